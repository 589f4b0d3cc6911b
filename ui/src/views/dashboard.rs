use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

use crate::components::UploadForm;
use crate::core::client::{ApiClient, Statistics};
use crate::core::listing::{self, ReportRow};
use crate::core::poller;

/// Report dashboard: a polled table of generated reports plus the upload
/// form for new input files.
#[component]
pub fn Dashboard() -> Element {
    let rows = use_signal(Vec::<ReportRow>::new);
    let statistics = use_signal(|| Option::<Statistics>::None);

    // The poll loop starts with the first render (page load) and lives as
    // long as the page does; dropping the future on unmount is the only way
    // it stops.
    use_future(move || async move {
        let client = ApiClient::default();
        poller::poll(
            move || refresh_cycle(client.clone(), rows, statistics),
            poller::POLL_INTERVAL_MS,
        )
        .await;
    });

    let current_rows = rows();

    rsx! {
        section { class: "page page-dashboard",
            h1 { "Generated reports" }
            p { "The listing refreshes on its own. Upload a subscription export below to kick off a new run." }

            ReportTable { rows: current_rows }
            UploadForm {}
        }
    }
}

/// One poll cycle: fetch the listing and the statistics, then publish both.
/// No rendered state changes until both fetches have settled, and a failed
/// cycle leaves the previous rendering untouched.
async fn refresh_cycle(
    client: ApiClient,
    mut rows: Signal<Vec<ReportRow>>,
    mut statistics: Signal<Option<Statistics>>,
) {
    let fetched_listing = client.fetch_reports().await;
    let fetched_statistics = client.fetch_statistics().await;

    match fetched_listing {
        Ok(ids) => rows.with_mut(|rows| listing::apply_listing(rows, &ids)),
        Err(err) => warn!("report listing refresh failed: {err}"),
    }

    match fetched_statistics {
        // Held for forward compatibility; nothing renders these yet.
        Ok(value) => {
            debug!(%value, "statistics refreshed");
            statistics.set(Some(value));
        }
        Err(err) => warn!("statistics refresh failed: {err}"),
    }
}

#[component]
fn ReportTable(rows: Vec<ReportRow>) -> Element {
    rsx! {
        section { class: "report-table",
            div { class: "report-table__header",
                h2 { "Recent reports" }
                if !rows.is_empty() {
                    span { class: "report-table__meta", "{rows.len()} available" }
                }
            }

            if rows.is_empty() {
                p { class: "report-table__placeholder",
                    "Generated reports will appear here once the server has produced them."
                }
            } else {
                table { class: "report-table__grid",
                    thead {
                        tr {
                            th { "Report Type" }
                            th { "Creation Timestamp" }
                        }
                    }
                    tbody {
                        for row in rows.iter() {
                            tr { key: "{row.href}",
                                td {
                                    a { class: "report-table__link", href: "{row.href}", "{row.label}" }
                                }
                                td { "{row.timestamp_text}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
