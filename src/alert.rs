//! Alert system for displaying success and error messages to users.
//!
//! Alerts are rendered into the fixed `#alert-container` element of the base
//! page, either as the target of a failed htmx request or as an out-of-band
//! swap alongside a successful one.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

/// A success or error message with details.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    Success { message: String, details: String },
    Error { message: String, details: String },
}

impl Alert {
    fn parts(&self) -> (bool, &str, &str) {
        match self {
            Alert::Success { message, details } => (true, message, details),
            Alert::Error { message, details } => (false, message, details),
        }
    }

    /// Render the alert as an HTML fragment.
    pub fn into_html(self) -> Markup {
        let (is_success, message, details) = self.parts();
        let style = if is_success {
            "flex items-start gap-3 p-4 rounded border border-green-600 \
            bg-green-950 text-green-300"
        } else {
            "flex items-start gap-3 p-4 rounded border border-red-600 \
            bg-red-950 text-red-300"
        };

        html!(
            div class=(style) role="alert"
            {
                div class="flex-1"
                {
                    p class="font-bold" { (message) }

                    @if !details.is_empty() {
                        p class="text-sm" { (details) }
                    }
                }

                button
                    type="button"
                    aria-label="Close"
                    class="font-bold"
                    onclick="this.closest('[role=alert]').remove()"
                {
                    "×"
                }
            }
        )
    }

    /// Render the alert wrapped in an out-of-band swap of the alert container.
    pub fn into_oob_html(self) -> Markup {
        html!(
            div
                id="alert-container"
                hx-swap-oob="true"
                class="w-full max-w-md px-4"
                style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
            {
                (self.into_html())
            }
        )
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        self.into_html().into_response()
    }
}
