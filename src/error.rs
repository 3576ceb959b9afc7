//! Defines the app level error type and conversions to rendered HTML pages and alerts.
//!
//! Errors are logged once, when they are turned into a response.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    alert::Alert,
    internal_server_error::InternalServerError,
    toll_record::{ValidationError, VehicleNumber},
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The user input could not be turned into a toll record.
    ///
    /// The store is not touched when input fails validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A toll record for the vehicle number already exists.
    ///
    /// The new record is rejected and the existing one is left as is.
    #[error("a toll record for vehicle \"{0}\" already exists")]
    DuplicateVehicleNumber(VehicleNumber),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(#[from] rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            // The lock error is logged where the lock is taken.
            Error::DatabaseLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::DuplicateVehicleNumber(vehicle_number) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Vehicle already exists".to_owned(),
                    details: format!(
                        "A toll has already been recorded for {vehicle_number}. \
                        Each vehicle can only be recorded once."
                    ),
                },
            ),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::Error {
                        message: "Something went wrong".to_owned(),
                        details:
                            "An unexpected error occurred, check the server logs for more details."
                                .to_owned(),
                    },
                )
            }
        };

        (status_code, alert.into_html()).into_response()
    }
}
