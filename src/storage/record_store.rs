use super::error::StorageError;
use crate::datamodel::{RawRecord, ScanCursor};
use async_trait::async_trait;
use std::fmt::Debug;

/// Raw result of one bounded scan.
#[derive(Debug, Default)]
pub struct ScanOutput {
    pub items: Vec<RawRecord>,
    /// Key of the last record the store evaluated, present when the scan
    /// window has more data.
    pub last_evaluated: Option<ScanCursor>,
}

/// Translation seam over the external store. Stateless between
/// invocations, and never retries on its own; retry policy belongs to the
/// caller.
#[async_trait]
pub trait RecordStore: Send + Sync + Debug {
    async fn scan(
        &self,
        limit: i32,
        cursor: Option<&ScanCursor>,
    ) -> Result<ScanOutput, StorageError>;
}
