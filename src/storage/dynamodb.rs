use super::error::StorageError;
use super::record_store::{RecordStore, ScanOutput};
use crate::config::SoundviewConfig;
use crate::datamodel::{AttrValue, RawRecord, ScanCursor};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;

/// Record store adapter over a DynamoDB table.
///
/// Holds the one process-wide SDK client, built from configuration at
/// startup and shared by reference with the request handlers. Credentials
/// come from the ambient AWS provider chain.
#[derive(Debug)]
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
}

impl DynamoDbStore {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    pub async fn from_config(config: &SoundviewConfig) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.aws_region.clone()))
            .load()
            .await;
        Self::new(Client::new(&sdk_config), config.table_name.clone())
    }
}

#[async_trait]
impl RecordStore for DynamoDbStore {
    async fn scan(
        &self,
        limit: i32,
        cursor: Option<&ScanCursor>,
    ) -> Result<ScanOutput, StorageError> {
        let output = self
            .client
            .scan()
            .table_name(&self.table_name)
            .limit(limit)
            .set_exclusive_start_key(cursor.map(encode_cursor))
            .send()
            .await
            .map_err(|err| StorageError::scan(&self.table_name, err))?;

        let items = output.items().iter().map(decode_record).collect();
        let last_evaluated = output.last_evaluated_key().and_then(decode_last_evaluated_key);

        Ok(ScanOutput {
            items,
            last_evaluated,
        })
    }
}

fn encode_cursor(cursor: &ScanCursor) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            "partition".to_string(),
            AttributeValue::S(cursor.partition.clone()),
        ),
        (
            "timestamp".to_string(),
            AttributeValue::N(cursor.timestamp.to_string()),
        ),
    ])
}

fn decode_record(item: &HashMap<String, AttributeValue>) -> RawRecord {
    item.iter()
        .map(|(name, value)| (name.clone(), decode_value(value)))
        .collect()
}

fn decode_value(value: &AttributeValue) -> AttrValue {
    match value {
        AttributeValue::S(text) => AttrValue::S(text.clone()),
        AttributeValue::N(digits) => AttrValue::N(digits.clone()),
        AttributeValue::M(entries) => AttrValue::M(
            entries
                .iter()
                .map(|(name, value)| (name.clone(), decode_value(value)))
                .collect(),
        ),
        _ => AttrValue::Unsupported,
    }
}

/// The continuation key is only meaningful with both of its parts; a
/// partial key is treated as the end of the scan.
fn decode_last_evaluated_key(key: &HashMap<String, AttributeValue>) -> Option<ScanCursor> {
    let partition = key
        .get("partition")
        .and_then(|value| value.as_s().ok())
        .cloned();
    let timestamp = key
        .get("timestamp")
        .and_then(|value| value.as_n().ok())
        .and_then(|digits| digits.parse().ok());
    ScanCursor::from_parts(partition, timestamp)
}
