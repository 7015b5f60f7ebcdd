mod debug_impl;
mod network_impl;
mod seele_impl;
mod subchain_impl;
mod txpool_impl;

pub use debug_impl::DebugApi;
pub use network_impl::NetworkApi;
pub use seele_impl::SeeleApi;
pub use subchain_impl::SubchainApi;
pub use txpool_impl::TransactionPoolApi;
