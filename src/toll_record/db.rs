//! Database operations for toll records.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    toll_record::{NewTollRecord, TollAmount, TollRecord, TollSummary, VehicleNumber},
};

/// Extended result code for a failed PRIMARY KEY constraint.
const SQLITE_CONSTRAINT_PRIMARYKEY: i32 = 1555;
/// Extended result code for a failed UNIQUE constraint.
const SQLITE_CONSTRAINT_UNIQUE: i32 = 2067;

/// Initialize the toll record table.
///
/// The table layout matches databases written by earlier versions of the app,
/// so an existing database file can be opened as is.
pub fn create_toll_record_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS toll_records (
            vehicle_number TEXT PRIMARY KEY,
            toll_paid REAL NOT NULL CHECK (toll_paid >= 0)
        )",
        (),
    )?;

    Ok(())
}

/// Store a new toll record.
///
/// The insert runs in autocommit mode, so the record is on disk when this
/// function returns.
///
/// # Errors
///
/// Returns [Error::DuplicateVehicleNumber] if a record for the vehicle already
/// exists, in which case the table is left unchanged.
pub fn add_toll_record(record: NewTollRecord, connection: &Connection) -> Result<TollRecord, Error> {
    connection
        .execute(
            "INSERT INTO toll_records (vehicle_number, toll_paid) VALUES (?1, ?2)",
            (record.vehicle_number.as_ref(), record.toll_paid.value()),
        )
        .map_err(|error| match error {
            rusqlite::Error::SqliteFailure(sql_error, _)
                if sql_error.extended_code == SQLITE_CONSTRAINT_PRIMARYKEY
                    || sql_error.extended_code == SQLITE_CONSTRAINT_UNIQUE =>
            {
                Error::DuplicateVehicleNumber(record.vehicle_number.clone())
            }
            error => error.into(),
        })?;

    Ok(TollRecord {
        vehicle_number: record.vehicle_number,
        toll_paid: record.toll_paid,
    })
}

/// Retrieve all toll records in the order they were added.
pub fn get_all_toll_records(connection: &Connection) -> Result<Vec<TollRecord>, Error> {
    connection
        .prepare("SELECT vehicle_number, toll_paid FROM toll_records ORDER BY rowid ASC;")?
        .query_map([], map_row)?
        .map(|maybe_record| maybe_record.map_err(|error| error.into()))
        .collect()
}

/// Count the toll records and sum the amounts paid.
///
/// The total is zero when there are no records.
pub fn get_toll_summary(connection: &Connection) -> Result<TollSummary, Error> {
    let (count, total): (i64, f64) = connection
        .prepare("SELECT COUNT(*), COALESCE(SUM(toll_paid), 0.0) FROM toll_records;")?
        .query_row([], |row| Ok((row.get(0)?, row.get(1)?)))?;

    Ok(TollSummary {
        count: count as usize,
        total,
    })
}

/// Tables written by earlier versions of the app have no `NOT NULL` or
/// `CHECK` on `toll_paid`. A NULL amount is read as zero, the same as `SUM`
/// skipping it, and other stored amounts are returned as they are, so the
/// records always add up to the summary total.
fn map_row(row: &Row) -> Result<TollRecord, rusqlite::Error> {
    let raw_vehicle_number: String = row.get(0)?;
    let toll_paid: f64 = row.get::<_, Option<f64>>(1)?.unwrap_or(0.0);

    Ok(TollRecord {
        vehicle_number: VehicleNumber::new_unchecked(&raw_vehicle_number),
        toll_paid: TollAmount::new_unchecked(toll_paid),
    })
}

#[cfg(test)]
mod create_table_tests {
    use rusqlite::Connection;

    use crate::toll_record::TollSummary;

    use super::{create_toll_record_table, get_all_toll_records, get_toll_summary};

    #[test]
    fn sql_is_valid() {
        let connection =
            Connection::open_in_memory().expect("Could not initialise in-memory SQLite database");

        assert_eq!(Ok(()), create_toll_record_table(&connection));
    }

    #[test]
    fn can_be_called_twice() {
        let connection =
            Connection::open_in_memory().expect("Could not initialise in-memory SQLite database");
        create_toll_record_table(&connection).unwrap();

        assert_eq!(Ok(()), create_toll_record_table(&connection));
    }

    #[test]
    fn opens_table_created_by_older_schema() {
        let connection =
            Connection::open_in_memory().expect("Could not initialise in-memory SQLite database");
        connection
            .execute(
                "CREATE TABLE toll_records (vehicle_number TEXT PRIMARY KEY, toll_paid REAL)",
                (),
            )
            .unwrap();
        connection
            .execute(
                "INSERT INTO toll_records VALUES ('KA01AB1234', 50.0), ('MH12CD5678', NULL), \
                ('DL3CAF0001', -5.0)",
                (),
            )
            .unwrap();

        assert_eq!(Ok(()), create_toll_record_table(&connection));

        let amounts: Vec<f64> = get_all_toll_records(&connection)
            .unwrap()
            .into_iter()
            .map(|record| record.toll_paid.value())
            .collect();
        assert_eq!(amounts, vec![50.0, 0.0, -5.0]);
        assert_eq!(
            get_toll_summary(&connection),
            Ok(TollSummary {
                count: 3,
                total: 45.0
            })
        );
    }
}
