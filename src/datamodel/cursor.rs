/// Resume token for a paginated scan: the key of the last record the store
/// evaluated. A cursor is only meaningful as a whole; a lone partition or a
/// lone timestamp must be treated as no cursor at all, never partially
/// applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanCursor {
    pub partition: String,
    pub timestamp: i64,
}

impl ScanCursor {
    pub fn new(partition: impl Into<String>, timestamp: i64) -> Self {
        Self {
            partition: partition.into(),
            timestamp,
        }
    }

    /// Build a cursor from its two optional components. Yields `Some` only
    /// when both are present.
    pub fn from_parts(partition: Option<String>, timestamp: Option<i64>) -> Option<Self> {
        match (partition, timestamp) {
            (Some(partition), Some(timestamp)) => Some(Self {
                partition,
                timestamp,
            }),
            _ => None,
        }
    }
}
