use std::fmt::Display;

use tracing::Span;

/// A logging handle bound to a named node component. Cloning is cheap and
/// every event flows through the process-wide `tracing` subscriber, so the
/// handle can be shared freely across API services.
#[derive(Clone, Debug)]
pub struct Logger {
    span: Span,
}

impl Logger {
    pub fn new(component: &str) -> Self {
        Self {
            span: tracing::info_span!("seele", component),
        }
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    pub fn debug(&self, message: impl Display) {
        let _guard = self.span.enter();
        tracing::debug!("{message}");
    }

    pub fn info(&self, message: impl Display) {
        let _guard = self.span.enter();
        tracing::info!("{message}");
    }

    pub fn warn(&self, message: impl Display) {
        let _guard = self.span.enter();
        tracing::warn!("{message}");
    }

    pub fn error(&self, message: impl Display) {
        let _guard = self.span.enter();
        tracing::error!("{message}");
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new("node")
    }
}
