//! The API endpoints URIs.

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The landing page with the form for adding toll records.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page listing every toll record.
pub const RECORDS_VIEW: &str = "/records";
/// The page showing the number of vehicles and the total collected.
pub const SUMMARY_VIEW: &str = "/summary";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The route for static files such as the stylesheet.
pub const STATIC: &str = "/static";

/// The route to add toll records (POST) or list them as JSON (GET).
pub const TOLL_RECORDS_API: &str = "/api/toll_records";
/// The route to get the toll summary as JSON.
pub const SUMMARY_API: &str = "/api/summary";
