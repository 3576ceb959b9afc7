//! Displays every toll record in a table.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error, endpoints,
    html::{
        LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        base, format_currency,
    },
    navigation::NavBar,
    toll_record::{TollRecord, TollRecordStore},
};

/// Renders the page listing all toll records in the order they were added.
pub async fn get_records_page(State(store): State<TollRecordStore>) -> Result<Response, Error> {
    let records = store.get_all()?;

    Ok(records_view(&records).into_response())
}

fn records_view(records: &[TollRecord]) -> Markup {
    let nav_bar = NavBar::new(endpoints::RECORDS_VIEW).into_html();

    let table_row = |record: &TollRecord| {
        html!(
            tr class=(TABLE_ROW_STYLE)
            {
                th
                    scope="row"
                    class="px-6 py-4 font-medium text-white whitespace-nowrap"
                {
                    (record.vehicle_number)
                }

                td class="px-6 py-4 text-right tabular-nums"
                {
                    (format_currency(record.toll_paid.value()))
                }
            }
        )
    };

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="w-full max-w-2xl space-y-4"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { "Toll Records" }

                    a href=(endpoints::DASHBOARD_VIEW) class=(LINK_STYLE)
                    {
                        "Add Entry"
                    }
                }

                table class="w-full text-sm text-left text-slate-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE)
                            {
                                "Vehicle Number"
                            }
                            th scope="col" class="px-6 py-4 text-right"
                            {
                                "Toll Paid (₹)"
                            }
                        }
                    }

                    tbody
                    {
                        @for record in records {
                            (table_row(record))
                        }

                        @if records.is_empty() {
                            tr
                            {
                                td
                                    colspan="2"
                                    class="px-6 py-4 text-center text-slate-400"
                                {
                                    "No toll records yet. Add an entry on the "
                                    a href=(endpoints::DASHBOARD_VIEW) class=(LINK_STYLE)
                                    {
                                        "dashboard"
                                    }
                                    "."
                                }
                            }
                        }
                    }
                }
            }
        }
    );

    base("Toll Records", &content)
}
