use std::collections::HashMap;

/// Tagged attribute value, as encoded by the store.
///
/// DynamoDB transports every attribute as a type tag plus an encoded value,
/// with numbers travelling as decimal strings. Only the tags this crate
/// reads are modeled; every other tag collapses into `Unsupported` and
/// defaults out during decoding.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// String attribute.
    S(String),
    /// Numeric attribute, kept in its wire form (decimal digits as text).
    N(String),
    /// Nested map attribute.
    M(HashMap<String, AttrValue>),
    /// Any tag this crate does not read (booleans, lists, binary, ...).
    Unsupported,
}

/// One raw record as returned by a scan: attribute name to tagged value.
pub type RawRecord = HashMap<String, AttrValue>;

impl AttrValue {
    pub fn as_s(&self) -> Option<&str> {
        match self {
            AttrValue::S(value) => Some(value),
            _ => None,
        }
    }

    /// Base-10 integer reading of a numeric attribute.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            AttrValue::N(digits) => digits.parse().ok(),
            _ => None,
        }
    }

    /// Member lookup on a map attribute.
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        match self {
            AttrValue::M(entries) => entries.get(key),
            _ => None,
        }
    }
}
