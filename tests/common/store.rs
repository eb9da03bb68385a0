use async_trait::async_trait;
use soundview::datamodel::{AttrValue, RawRecord, ScanCursor};
use soundview::storage::{RecordStore, ScanOutput, StorageError};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// In-memory record store double.
///
/// Serves canned raw records page by page with the same
/// resume-after-the-cursor-key semantics as the real store, including the
/// page-boundary quirk: a scan that stops exactly at the limit reports a
/// continuation even when nothing follows. Records the cursor every scan
/// was given, and can be switched into a failing mode.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<RawRecord>>,
    fail: AtomicBool,
    seen_cursors: Mutex<Vec<Option<ScanCursor>>>,
}

impl MemoryStore {
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    /// Land one more record, as the device pipeline would.
    pub fn push(&self, record: RawRecord) {
        self.records.lock().unwrap().push(record);
    }

    pub fn failing() -> Self {
        let store = Self::default();
        store.set_fail(true);
        store
    }

    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::Relaxed);
    }

    /// The cursor argument of every scan so far, in call order.
    pub fn seen_cursors(&self) -> Vec<Option<ScanCursor>> {
        self.seen_cursors.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn scan(
        &self,
        limit: i32,
        cursor: Option<&ScanCursor>,
    ) -> Result<ScanOutput, StorageError> {
        self.seen_cursors.lock().unwrap().push(cursor.cloned());

        if self.fail.load(Ordering::Relaxed) {
            return Err(StorageError::Configuration(
                "memory store set to fail".to_string(),
            ));
        }

        let records = self.records.lock().unwrap();

        let start = match cursor {
            None => 0,
            Some(cursor) => records
                .iter()
                .position(|record| record_key(record).as_ref() == Some(cursor))
                .map(|index| index + 1)
                .unwrap_or(0),
        };

        let items: Vec<RawRecord> = records
            .iter()
            .skip(start)
            .take(limit as usize)
            .cloned()
            .collect();

        // A continuation is reported when more records remain, and also
        // when the scan stopped right at the limit with nothing behind it.
        let stopped_at_limit = items.len() == limit as usize;
        let last_evaluated = if start + items.len() < records.len() || stopped_at_limit {
            items.last().and_then(record_key)
        } else {
            None
        };

        Ok(ScanOutput {
            items,
            last_evaluated,
        })
    }
}

fn record_key(record: &RawRecord) -> Option<ScanCursor> {
    let partition = record
        .get("partition")
        .and_then(|value| value.as_s())
        .map(str::to_string);
    let timestamp = record.get("timestamp").and_then(|value| value.as_i64());
    ScanCursor::from_parts(partition, timestamp)
}

/// One raw record fixture in the store's tagged encoding. `None` leaves
/// the `payload.decibel` path out entirely.
pub fn raw_reading(partition: &str, timestamp: &str, decibel: Option<&str>) -> RawRecord {
    let mut record = HashMap::new();
    record.insert(
        "partition".to_string(),
        AttrValue::S(partition.to_string()),
    );
    record.insert("timestamp".to_string(), AttrValue::N(timestamp.to_string()));
    if let Some(decibel) = decibel {
        record.insert(
            "payload".to_string(),
            AttrValue::M(HashMap::from([(
                "decibel".to_string(),
                AttrValue::N(decibel.to_string()),
            )])),
        );
    }
    record
}
