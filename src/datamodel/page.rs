use super::{Reading, ScanCursor};

/// One bounded batch of readings, the unit of transfer between the store
/// and the HTTP boundary.
///
/// Items are sorted ascending by timestamp before the page is handed to any
/// consumer. A page is built fresh on every store query and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub items: Vec<Reading>,
    /// Continuation of the scan, when the store reported more data.
    pub cursor: Option<ScanCursor>,
}
