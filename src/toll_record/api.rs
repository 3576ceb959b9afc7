//! JSON endpoints for reading toll records.

use axum::{Json, extract::State};

use crate::{
    Error,
    toll_record::{TollRecord, TollRecordStore, TollSummary},
};

/// Get every toll record as JSON, in the order they were added.
pub async fn get_toll_records_json(
    State(store): State<TollRecordStore>,
) -> Result<Json<Vec<TollRecord>>, Error> {
    store.get_all().map(Json)
}

/// Get the number of records and the total collected as JSON.
pub async fn get_summary_json(
    State(store): State<TollRecordStore>,
) -> Result<Json<TollSummary>, Error> {
    store.summary().map(Json)
}
