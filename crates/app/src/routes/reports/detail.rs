use dioxus::prelude::*;
use shared_types::{Report, ReportStatus};
use shared_ui::components::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
    DetailItem, DetailList, PageActions, PageHeader, PageTitle, Skeleton,
};

use crate::fetch::FetchState;
use crate::format_helpers::format_date_human;
use crate::routes::Route;
use crate::session::use_api;

/// Read-only view of a single report.
#[component]
pub fn ReportDetailPage(id: String) -> Element {
    let client = use_api();

    let mut data = use_signal(FetchState::<Report>::default);

    {
        let client = client.clone();
        let report_id = id.clone();
        use_future(move || {
            let client = client.clone();
            let report_id = report_id.clone();
            async move {
                data.set(FetchState::Loading);
                match client.report(&report_id).await {
                    Ok(resp) => data.set(FetchState::Ready(resp.report)),
                    Err(err) => {
                        data.set(FetchState::Failed(err.message_or("Failed to fetch report")))
                    }
                }
            }
        });
    }

    rsx! {
        div { class: "container",
            match &*data.read() {
                FetchState::Idle | FetchState::Loading => rsx! {
                    div { class: "loading",
                        Skeleton {}
                        Skeleton {}
                    }
                },
                FetchState::Failed(msg) => rsx! {
                    Card {
                        CardContent {
                            div { class: "empty-state",
                                h2 { "Report Not Found" }
                                p { "{msg}" }
                                Link { to: Route::ReportList {},
                                    Button { "Back to Reports" }
                                }
                            }
                        }
                    }
                },
                FetchState::Ready(report) => rsx! {
                    ReportDetailBody { report: report.clone() }
                },
            }
        }
    }
}

#[component]
fn ReportDetailBody(report: Report) -> Element {
    let status_variant = match report.status {
        ReportStatus::Open => BadgeVariant::Primary,
        ReportStatus::Closed => BadgeVariant::Secondary,
    };
    let related = report
        .related_info
        .clone()
        .unwrap_or_else(|| "--".to_string());
    let reporter = report
        .user
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_else(|| "Anonymous".to_string());
    let submitted = report
        .created_at
        .as_deref()
        .map(format_date_human)
        .unwrap_or_else(|| "--".to_string());

    rsx! {
        PageHeader {
            PageTitle { "{report.title}" }
            PageActions {
                Link { to: Route::ReportList {},
                    Button { variant: ButtonVariant::Secondary, "Back to Reports" }
                }
            }
        }

        Card {
            CardHeader {
                CardTitle { "Incident" }
            }
            CardContent {
                DetailList {
                    DetailItem { label: "Category", value: report.category.clone() }
                    DetailItem { label: "Place of Incident", value: report.location.clone() }
                    DetailItem { label: "Date", value: format_date_human(&report.date) }
                    DetailItem { label: "Status",
                        Badge { variant: status_variant, "{report.status}" }
                    }
                    DetailItem { label: "Related Entities", value: related }
                    DetailItem { label: "Reported By", value: reporter }
                    DetailItem { label: "Submitted", value: submitted }
                    DetailItem { label: "Description", value: report.description.clone() }
                }
            }
        }
    }
}
