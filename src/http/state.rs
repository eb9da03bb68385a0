use crate::storage::RecordStore;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct HttpServerState {
    pub name: Arc<String>,
    pub store: Arc<dyn RecordStore>,
}
