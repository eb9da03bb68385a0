use super::app_error::AppError;
use super::state::HttpServerState;
use crate::datamodel::{Page, ScanCursor};
use crate::reader::{PageOutcome, read_page};
use axum::Json;
use axum::extract::{Query, State};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

/// Continuation headers on a `200` response. Either both are present or
/// neither is.
pub const NEXT_KEY_PARTITION_HEADER: &str = "x-next-key-partition";
pub const NEXT_KEY_TIMESTAMP_HEADER: &str = "x-next-key-timestamp";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataQuery {
    pub start_key_timestamp: Option<i64>,
    pub start_key_partition: Option<String>,
}

/// One page of readings, ascending by timestamp.
///
/// `200` with a JSON array when the scan returned records, `204` with an
/// empty body when it returned none, `500` with a plain-text message on a
/// store failure.
pub async fn get_data(
    State(state): State<HttpServerState>,
    Query(query): Query<DataQuery>,
) -> Result<Response, AppError> {
    // The resume key is only honored as a pair; a half cursor means an
    // unconstrained scan, not a partially constrained one.
    let cursor = ScanCursor::from_parts(query.start_key_partition, query.start_key_timestamp);

    match read_page(state.store.as_ref(), cursor).await? {
        PageOutcome::Empty => Ok(StatusCode::NO_CONTENT.into_response()),
        PageOutcome::Data(Page { items, cursor }) => {
            let mut response = Json(items).into_response();
            if let Some(cursor) = cursor {
                let headers = response.headers_mut();
                headers.insert(
                    NEXT_KEY_PARTITION_HEADER,
                    HeaderValue::from_str(&cursor.partition)?,
                );
                headers.insert(
                    NEXT_KEY_TIMESTAMP_HEADER,
                    HeaderValue::from_str(&cursor.timestamp.to_string())?,
                );
            }
            Ok(response)
        }
    }
}
