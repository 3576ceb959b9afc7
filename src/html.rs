use maud::{DOCTYPE, Markup, html};

/// The symbol prepended to every displayed amount.
pub const CURRENCY_SYMBOL: &str = "₹";

// Link styles
pub const LINK_STYLE: &str = "text-blue-400 hover:text-blue-300 underline";

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "w-full px-4 py-3 font-bold bg-blue-600 \
    hover:enabled:bg-blue-700 disabled:bg-blue-800 text-white rounded";

pub const BUTTON_SECONDARY_STYLE: &str = "block w-full px-4 py-3 text-center \
    font-bold text-white bg-slate-800 hover:bg-slate-700 rounded border \
    border-slate-600";

// Form styles
pub const FORM_CONTAINER_STYLE: &str = "w-full max-w-2xl p-8 space-y-6 \
    bg-slate-950 border-2 border-slate-800 rounded";
pub const FORM_LABEL_STYLE: &str = "block mb-2 text-sm font-medium text-indigo-200";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2.5 rounded text-sm \
    text-white bg-slate-800 border border-slate-600 placeholder-slate-400 \
    focus:ring-blue-500 focus:border-blue-500";

// Table styles
pub const TABLE_HEADER_STYLE: &str = "text-xs uppercase bg-slate-800 text-slate-300";

pub const TABLE_ROW_STYLE: &str = "bg-slate-950 border-b border-slate-800";

pub const TABLE_CELL_STYLE: &str = "px-6 py-4";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col items-center gap-8 px-6 py-8 mx-auto text-slate-200";

pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Toll Plaza" }

                link href="/static/main.css" rel="stylesheet";

                script
                    src="https://cdn.jsdelivr.net/npm/htmx.org@2.0.8/dist/htmx.min.js"
                    integrity="sha384-/TgkGk7p307TH7EXJDuUlgG3Ce1UVolAOFopFekQkkXihi5u/6OCvVKyz1W+idaz"
                    crossorigin="anonymous"
                {}
                script
                    src="https://cdn.jsdelivr.net/npm/htmx-ext-response-targets@2.0.4"
                    integrity="sha384-T41oglUPvXLGBVyRdZsVRxNWnOOqCynaPubjUVjxhsjFTKrFJGEMm3/0KGmNQ+Pg"
                    crossorigin="anonymous"
                {}
            }

            body
                hx-ext="response-targets"
                class="container max-w-full min-h-screen bg-slate-900"
            {
                (content)

                // Alert container for out-of-band swaps
                div
                    id="alert-container"
                    class="w-full max-w-md px-4"
                    style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
                {}
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        section
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-blue-500"
                    {
                        (header)
                    }

                    p class="mb-4 text-3xl md:text-4xl tracking-tight font-bold text-white"
                    {
                        (description)
                    }

                    p class="mb-4 text-xl md:text-2xl tracking-tight text-white"
                    {
                        (fix)
                    }

                    a
                        href="/"
                        class="inline-flex text-white bg-blue-600
                            hover:bg-blue-800 font-medium rounded text-sm px-5
                            py-2.5 text-center my-4"
                    {
                        "Back to Dashboard"
                    }
                }
            }
        }
    );

    base(title, &content)
}

/// Format `number` as rupees with thousands separators and two decimal
/// places, e.g. "₹1,234.50".
///
/// The amount is rounded to the nearest paisa, halves away from zero.
pub fn format_currency(number: f64) -> String {
    let rounded = (number * 100.0).round() / 100.0;
    // Rounding can produce -0.0, which should read as zero.
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.2}", rounded.abs());

    match digits.split_once('.') {
        Some((whole, fraction)) => {
            format!("{sign}{CURRENCY_SYMBOL}{}.{fraction}", group_thousands(whole))
        }
        // Infinity and NaN have no decimal point.
        None => format!("{sign}{CURRENCY_SYMBOL}{digits}"),
    }
}

fn group_thousands(whole: &str) -> String {
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);

    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}
