//! Implements a struct that holds the state of the web server.

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::{Error, toll_record::TollRecordStore};

/// The state of the web server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The store for toll records, shared by every request handler.
    pub toll_record_store: TollRecordStore,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the toll record
    /// table if it does not exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_connection: Connection) -> Result<Self, Error> {
        Ok(Self {
            toll_record_store: TollRecordStore::new(db_connection)?,
        })
    }
}

impl FromRef<AppState> for TollRecordStore {
    fn from_ref(state: &AppState) -> Self {
        state.toll_record_store.clone()
    }
}
