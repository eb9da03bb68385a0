use crate::datamodel::{Page, Reading, ScanCursor};
use crate::storage::{RecordStore, StorageError};

/// Fixed scan page size. Not caller-tunable.
pub const SCAN_PAGE_SIZE: i32 = 50;

/// Outcome of one page read. An empty scan window is a legitimate result,
/// distinct from an error; callers must be able to tell "nothing yet"
/// apart from a failure.
#[derive(Debug, PartialEq)]
pub enum PageOutcome {
    Data(Page),
    Empty,
}

/// Fetch one page: bounded scan, per-field decode, ascending sort by
/// timestamp, continuation propagated from the store.
pub async fn read_page(
    store: &dyn RecordStore,
    cursor: Option<ScanCursor>,
) -> Result<PageOutcome, StorageError> {
    let output = store.scan(SCAN_PAGE_SIZE, cursor.as_ref()).await?;

    if output.items.is_empty() {
        return Ok(PageOutcome::Empty);
    }

    let mut items: Vec<Reading> = output.items.iter().map(Reading::from_raw).collect();
    // Ties on the timestamp are allowed, their relative order is unspecified.
    items.sort_unstable_by_key(|reading| reading.timestamp);

    Ok(PageOutcome::Data(Page {
        items,
        cursor: output.last_evaluated,
    }))
}
