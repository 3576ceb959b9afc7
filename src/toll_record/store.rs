//! The handle through which the app reads and writes toll records.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;

use crate::{
    Error,
    toll_record::{
        NewTollRecord, TollRecord, TollSummary, add_toll_record, create_toll_record_table,
        get_all_toll_records, get_toll_summary,
    },
};

/// Adds, lists and summarises toll records in a SQLite database.
///
/// Cloning the store is cheap and every clone shares the same connection.
/// The connection is closed when the last clone is dropped.
#[derive(Debug, Clone)]
pub struct TollRecordStore {
    connection: Arc<Mutex<Connection>>,
}

impl TollRecordStore {
    /// Create a store from an open connection, adding the toll record table
    /// if it does not exist yet.
    ///
    /// # Errors
    /// Returns an error if the table cannot be created.
    pub fn new(connection: Connection) -> Result<Self, Error> {
        create_toll_record_table(&connection)?;

        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }

    /// Store a new toll record.
    ///
    /// # Errors
    /// Returns [Error::DuplicateVehicleNumber] if the vehicle already has a
    /// record, or a storage error if the database could not be written.
    pub fn add(&self, record: NewTollRecord) -> Result<TollRecord, Error> {
        let connection = self.lock()?;
        let vehicle_number = record.vehicle_number.clone();

        add_toll_record(record, &connection)
            .inspect(|_| tracing::info!("Added toll record for {vehicle_number}"))
    }

    /// Get every toll record in the order they were added.
    pub fn get_all(&self) -> Result<Vec<TollRecord>, Error> {
        get_all_toll_records(&*self.lock()?)
    }

    /// Get the number of records and the total amount collected.
    pub fn summary(&self) -> Result<TollSummary, Error> {
        get_toll_summary(&*self.lock()?)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)
    }
}

#[cfg(test)]
pub(crate) fn get_test_store() -> TollRecordStore {
    let connection =
        Connection::open_in_memory().expect("Could not initialise in-memory SQLite database");

    TollRecordStore::new(connection).expect("Could not create toll record store")
}
