use std::{error::Error, path::Path, process::exit};

use clap::Parser;
use rusqlite::{Connection, OpenFlags};

use toll_plaza::{
    format_currency,
    toll_record::{get_all_toll_records, get_toll_summary},
};

/// Print the toll records and the total collected from a toll plaza database.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database.
    #[arg(long)]
    db_path: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let db_path = Path::new(&args.db_path);

    if !db_path.is_file() {
        eprintln!("File does not exist at {db_path:#?}!");
        exit(1);
    }

    let conn = Connection::open_with_flags(db_path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;

    let records = get_all_toll_records(&conn)?;
    let summary = get_toll_summary(&conn)?;

    println!("{:<20} {:>15}", "Vehicle Number", "Toll Paid");
    for record in &records {
        println!(
            "{:<20} {:>15}",
            record.vehicle_number,
            format_currency(record.toll_paid.value())
        );
    }

    println!();
    println!("Vehicles Passed: {}", summary.count);
    println!("Total Collection: {}", format_currency(summary.total));

    Ok(())
}
