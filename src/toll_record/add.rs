//! The dashboard page with the form for adding toll records, and the endpoint
//! the form posts to.

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    alert::Alert,
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE, base, format_currency,
    },
    internal_server_error::get_internal_server_error_redirect,
    navigation::NavBar,
    toll_record::{NewTollRecord, TollRecord, TollRecordForm, TollRecordStore},
};

/// Render the dashboard with the add-entry form and the total collected so far.
pub async fn get_dashboard_page(State(store): State<TollRecordStore>) -> Result<Response, Error> {
    let summary = store.summary()?;

    Ok(dashboard_view(summary.total).into_response())
}

/// Handle the add-entry form submission.
///
/// Invalid input re-renders the form with an error message. A duplicate
/// vehicle is reported with an error alert. On success the form is cleared
/// and the total collection box is refreshed out-of-band.
pub async fn add_toll_record_endpoint(
    State(store): State<TollRecordStore>,
    Form(form): Form<TollRecordForm>,
) -> Response {
    let record = match NewTollRecord::parse(&form) {
        Ok(record) => record,
        Err(error) => {
            return add_toll_record_form_view(&form, &error.to_string()).into_response();
        }
    };

    let record = match store.add(record) {
        Ok(record) => record,
        Err(Error::DatabaseLockError) => return get_internal_server_error_redirect(),
        Err(error) => return error.into_alert_response(),
    };

    // The record is saved at this point, so a failed read only skips the
    // total refresh.
    let total = store
        .summary()
        .inspect_err(|error| {
            tracing::warn!("could not refresh total after adding a toll record: {error}")
        })
        .ok()
        .map(|summary| summary.total);

    added_toll_record_view(&record, total).into_response()
}

/// The response to a successful add: a cleared form, the success alert and,
/// when `total` is known, the refreshed total collection box.
fn added_toll_record_view(record: &TollRecord, total: Option<f64>) -> (StatusCode, Markup) {
    let success_alert = Alert::Success {
        message: "Entry added".to_owned(),
        details: format!(
            "Recorded {} for {}.",
            format_currency(record.toll_paid.value()),
            record.vehicle_number
        ),
    };

    (
        StatusCode::CREATED,
        html!(
            (add_toll_record_form_view(&TollRecordForm::default(), ""))
            @if let Some(total) = total {
                (total_collection_view(total, true))
            }
            (success_alert.into_oob_html())
        ),
    )
}

fn dashboard_view(total: f64) -> Markup {
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW).into_html();
    let form = add_toll_record_form_view(&TollRecordForm::default(), "");

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-3xl font-bold text-slate-100" { "Toll Plaza Management Dashboard" }

            section class=(FORM_CONTAINER_STYLE)
            {
                (form)

                div class="grid grid-cols-2 gap-4"
                {
                    a href=(endpoints::RECORDS_VIEW) class=(BUTTON_SECONDARY_STYLE) { "📋 View Records" }
                    a href=(endpoints::SUMMARY_VIEW) class=(BUTTON_SECONDARY_STYLE) { "📊 Summary" }
                }
            }

            (total_collection_view(total, false))
        }
    };

    base("Dashboard", &content)
}

fn add_toll_record_form_view(form: &TollRecordForm, error_message: &str) -> Markup {
    html! {
        form
            id="toll-record-form"
            hx-post=(endpoints::TOLL_RECORDS_API)
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full space-y-4 md:space-y-6"
        {
            div
            {
                label
                    for="vehicle_number"
                    class=(FORM_LABEL_STYLE)
                {
                    "Vehicle Number"
                }

                input
                    id="vehicle_number"
                    type="text"
                    name="vehicle_number"
                    placeholder="KA01AB1234"
                    value=(form.vehicle_number)
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label
                    for="toll_paid"
                    class=(FORM_LABEL_STYLE)
                {
                    "Toll Amount (₹)"
                }

                input
                    id="toll_paid"
                    type="text"
                    inputmode="decimal"
                    name="toll_paid"
                    placeholder="0.00"
                    value=(form.toll_paid)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            @if !error_message.is_empty() {
                p class="text-red-400"
                {
                    (error_message)
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "➕ Add Entry" }
        }
    }
}

/// The "total collection" box. Set `out_of_band` to swap it into the page as
/// part of another htmx response.
fn total_collection_view(total: f64, out_of_band: bool) -> Markup {
    html! {
        div
            id="total-collection"
            hx-swap-oob=[out_of_band.then_some("true")]
            class="w-full max-w-sm p-4 text-center bg-slate-950 border-2 border-blue-600 rounded"
        {
            p class="text-sm font-bold text-slate-400" { "TOTAL COLLECTION" }
            p class="text-2xl font-bold text-green-500" { (format_currency(total)) }
        }
    }
}
