pub mod dynamodb;
pub mod error;
pub mod record_store;

pub use dynamodb::DynamoDbStore;
pub use error::StorageError;
pub use record_store::{RecordStore, ScanOutput};
