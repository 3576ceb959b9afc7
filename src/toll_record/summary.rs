//! The summary page: how many vehicles have passed and how much was collected.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error, endpoints,
    html::{FORM_CONTAINER_STYLE, PAGE_CONTAINER_STYLE, base, format_currency},
    navigation::NavBar,
    toll_record::{TollRecordStore, TollSummary},
};

/// Renders the summary page.
pub async fn get_summary_page(State(store): State<TollRecordStore>) -> Result<Response, Error> {
    let summary = store.summary()?;

    Ok(summary_view(summary).into_response())
}

fn summary_view(summary: TollSummary) -> Markup {
    let nav_bar = NavBar::new(endpoints::SUMMARY_VIEW).into_html();

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold" { "Summary" }

            dl class=(FORM_CONTAINER_STYLE)
            {
                div id="vehicle-count"
                {
                    dt class="text-sm font-bold text-slate-400" { "Vehicles Passed" }
                    dd class="text-2xl font-bold text-white" { (summary.count) }
                }

                div id="summary-total"
                {
                    dt class="text-sm font-bold text-slate-400" { "Total Collection" }
                    dd class="text-2xl font-bold text-green-500" { (format_currency(summary.total)) }
                }
            }
        }
    );

    base("Summary", &content)
}
