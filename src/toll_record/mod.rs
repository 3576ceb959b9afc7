//! Toll records: one payment per vehicle, stored in SQLite.

mod add;
mod api;
mod db;
mod domain;
mod list;
pub(crate) mod store;
mod summary;

pub use add::{add_toll_record_endpoint, get_dashboard_page};
pub use api::{get_summary_json, get_toll_records_json};
pub use db::{add_toll_record, create_toll_record_table, get_all_toll_records, get_toll_summary};
pub use domain::{
    NewTollRecord, TollAmount, TollRecord, TollRecordForm, TollSummary, ValidationError,
    VehicleNumber,
};
pub use list::get_records_page;
pub use store::TollRecordStore;
pub use summary::get_summary_page;
