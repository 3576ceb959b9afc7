use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use toll_plaza::{
    Error as TollPlazaError,
    toll_record::{NewTollRecord, TollRecordForm, add_toll_record, create_toll_record_table},
};

/// A utility for creating a test database for the toll plaza web server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

const TEST_RECORDS: [(&str, &str); 5] = [
    ("KA01AB1234", "50"),
    ("MH12CD5678", "75.5"),
    ("DL3CAF0001", "120"),
    ("TN09BZ4321", "35.25"),
    ("GJ05JK8080", "0"),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    create_toll_record_table(&conn)?;

    println!("Creating test toll records...");
    insert_test_records(&conn)?;

    println!("Success!");

    Ok(())
}

fn insert_test_records(conn: &Connection) -> Result<(), TollPlazaError> {
    for (vehicle_number, toll_paid) in TEST_RECORDS {
        let record = NewTollRecord::parse(&TollRecordForm {
            vehicle_number: vehicle_number.to_owned(),
            toll_paid: toll_paid.to_owned(),
        })?;

        add_toll_record(record, conn)?;
    }

    Ok(())
}
