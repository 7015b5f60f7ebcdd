//! Serde helpers shared by the wire-visible types.

/// Serializes a [`num_bigint::BigUint`] as a decimal string instead of the
/// default limb sequence, so JSON clients see `"1000"` rather than `[232, 3]`.
pub mod biguint {
    use num_bigint::BigUint;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_str_radix(10))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let s = String::deserialize(deserializer)?;
        BigUint::parse_bytes(s.as_bytes(), 10)
            .ok_or_else(|| D::Error::custom("expected a decimal integer string"))
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "super::biguint")]
        value: BigUint,
    }

    #[test]
    fn encodes_as_decimal_string() {
        let wrapper = Wrapper {
            value: BigUint::from(1_000_000u64),
        };
        let json = serde_json::to_string(&wrapper).unwrap();
        assert_eq!(json, r#"{"value":"1000000"}"#);
        let back: Wrapper = serde_json::from_str(&json).unwrap();
        assert_eq!(back.value, wrapper.value);
    }
}
