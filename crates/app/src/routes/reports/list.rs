use dioxus::prelude::*;
use shared_types::{Report, ReportStatus, Role};
use shared_ui::components::{
    AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Badge, BadgeVariant, Card,
    CardContent, DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader,
    DataTableRow, FormSelect, PageHeader, PageTitle, Skeleton,
};

use crate::fetch::{FetchState, RequestSeq};
use crate::format_helpers::{format_date_human, short_id};
use crate::notify::use_notifier;
use crate::routes::Route;
use crate::session::{use_api, use_can_edit_status, use_session};

#[component]
pub fn ReportListPage() -> Element {
    let session = use_session();
    let client = use_api();
    let notifier = use_notifier();
    let can_edit = use_can_edit_status();

    let mut reports = use_signal(FetchState::<Vec<Report>>::default);
    let mut seq = use_signal(RequestSeq::default);

    // Report pending the delete confirmation dialog, if any.
    let mut pending_delete = use_signal(|| Option::<Report>::None);
    let mut deleting = use_signal(|| false);

    let role = session.role();

    // One fetch per session identity. Re-runs when the session user changes
    // (the startup session restore can land after this view mounts); a
    // ticket from `seq` discards responses a newer run has superseded.
    {
        let client = client.clone();
        use_effect(move || {
            let user = session.user();

            let Some(user) = user else {
                reports.set(FetchState::Failed(
                    "You are not authorized to view reports.".into(),
                ));
                return;
            };

            let ticket = seq.write().next();
            reports.set(FetchState::Loading);

            let client = client.clone();
            spawn(async move {
                let result = if user.role.can_view_all_reports() {
                    client.all_reports().await
                } else {
                    client.user_reports(&user.id).await
                };

                if !seq.read().is_current(ticket) {
                    return;
                }

                match result {
                    Ok(resp) => reports.set(FetchState::Ready(resp.reports)),
                    Err(err) => {
                        let msg = err.message_or("Failed to fetch reports");
                        notifier.error(msg.clone());
                        reports.set(FetchState::Failed(msg));
                    }
                }
            });
        });
    }

    // Targeted status update: the row is replaced in place only after the
    // backend confirms; on failure the table is left untouched.
    let handle_status_change = {
        let client = client.clone();
        move |(crime_id, new_status): (String, ReportStatus)| {
            let client = client.clone();
            spawn(async move {
                match client.update_status(&crime_id, new_status).await {
                    Ok(resp) => {
                        if let Some(rows) = reports.write().ready_mut() {
                            apply_status_change(rows, &crime_id, new_status);
                        }
                        notifier.success(resp.message_or("Report status updated successfully!"));
                    }
                    Err(err) => {
                        notifier.error(err.message_or("Failed to update status"));
                    }
                }
            });
        }
    };

    let handle_delete_confirmed = {
        let client = client.clone();
        move |_: MouseEvent| {
            let Some(report) = pending_delete.read().clone() else {
                return;
            };
            let client = client.clone();
            spawn(async move {
                deleting.set(true);
                match client.delete_report(&report.id).await {
                    Ok(resp) => {
                        if let Some(rows) = reports.write().ready_mut() {
                            remove_report(rows, &report.id);
                        }
                        notifier.success(resp.message_or("Report deleted successfully!"));
                    }
                    Err(err) => {
                        notifier.error(err.message_or("Failed to delete report"));
                    }
                }
                deleting.set(false);
                pending_delete.set(None);
            });
        }
    };

    let title = role.map(listing_title).unwrap_or("Crime Reports");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./reports.css") }

        div { class: "container",
            PageHeader {
                PageTitle { "{title}" }
            }

            match &*reports.read() {
                FetchState::Idle | FetchState::Loading => rsx! {
                    div { class: "loading",
                        Skeleton {}
                        Skeleton {}
                        Skeleton {}
                    }
                },
                FetchState::Failed(msg) => rsx! {
                    Card {
                        CardContent {
                            p { class: "report-error", "{msg}" }
                        }
                    }
                },
                FetchState::Ready(rows) => rsx! {
                    ReportTable {
                        reports: rows.clone(),
                        can_edit: can_edit,
                        on_status_change: handle_status_change,
                        on_delete: move |report: Report| pending_delete.set(Some(report)),
                    }
                },
            }

            AlertDialogRoot {
                open: pending_delete.read().is_some(),
                on_open_change: move |open| {
                    if !open {
                        pending_delete.set(None);
                    }
                },
                AlertDialogContent {
                    AlertDialogTitle { "Delete Report" }
                    AlertDialogDescription {
                        "Are you sure you want to delete this report? This action cannot be undone."
                    }
                    AlertDialogActions {
                        AlertDialogCancel { "Cancel" }
                        AlertDialogAction {
                            on_click: handle_delete_confirmed,
                            if *deleting.read() { "Deleting..." } else { "Delete" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ReportTable(
    reports: Vec<Report>,
    can_edit: bool,
    on_status_change: EventHandler<(String, ReportStatus)>,
    on_delete: EventHandler<Report>,
) -> Element {
    if reports.is_empty() {
        return rsx! {
            Card {
                CardContent {
                    p { "No crime reports found." }
                }
            }
        };
    }

    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "ID" }
                DataTableColumn { "Title" }
                DataTableColumn { "Category" }
                DataTableColumn { "Place of Incident" }
                DataTableColumn { "Date" }
                DataTableColumn { "Status" }
                DataTableColumn { "Actions" }
            }
            DataTableBody {
                // Server order, unchanged: the backend decides how rows sort.
                for report in reports {
                    ReportRow {
                        report: report,
                        can_edit: can_edit,
                        on_status_change: on_status_change,
                        on_delete: on_delete,
                    }
                }
            }
        }
    }
}

#[component]
fn ReportRow(
    report: Report,
    can_edit: bool,
    on_status_change: EventHandler<(String, ReportStatus)>,
    on_delete: EventHandler<Report>,
) -> Element {
    let id_for_status = report.id.clone();
    let report_for_delete = report.clone();
    let display_date = format_date_human(&report.date);
    let id_short = short_id(&report.id).to_string();

    rsx! {
        DataTableRow {
            DataTableCell {
                span { class: "report-id", "{id_short}" }
            }
            DataTableCell { "{report.title}" }
            DataTableCell { "{report.category}" }
            DataTableCell { "{report.location}" }
            DataTableCell { "{display_date}" }
            DataTableCell {
                if can_edit {
                    FormSelect {
                        value: report.status.as_str().to_string(),
                        onchange: move |evt: Event<FormData>| {
                            if let Some(status) = ReportStatus::parse(&evt.value()) {
                                on_status_change.call((id_for_status.clone(), status));
                            }
                        },
                        for status in ReportStatus::ALL {
                            option { value: status.as_str(), "{status}" }
                        }
                    }
                } else {
                    Badge { variant: status_badge_variant(report.status), "{report.status}" }
                }
            }
            DataTableCell {
                div { class: "report-actions",
                    Link {
                        to: Route::ReportDetail { id: report.id.clone() },
                        class: "report-action-view",
                        "View"
                    }
                    button {
                        class: "report-action-delete",
                        onclick: move |_| on_delete.call(report_for_delete.clone()),
                        "Delete"
                    }
                }
            }
        }
    }
}

/// Listing heading: owners see their own reports, reviewers see everything.
fn listing_title(role: Role) -> &'static str {
    if role.can_view_all_reports() {
        "All Crime Reports"
    } else {
        "Your Crime Reports"
    }
}

/// Map a report status to a badge variant.
fn status_badge_variant(status: ReportStatus) -> BadgeVariant {
    match status {
        ReportStatus::Open => BadgeVariant::Primary,
        ReportStatus::Closed => BadgeVariant::Secondary,
    }
}

/// Replace the status of exactly the matching row. Returns whether a row
/// matched.
fn apply_status_change(reports: &mut [Report], crime_id: &str, status: ReportStatus) -> bool {
    match reports.iter_mut().find(|r| r.id == crime_id) {
        Some(report) => {
            report.status = status;
            true
        }
        None => false,
    }
}

/// Remove exactly the matching row, preserving the order of the rest.
/// Returns whether a row matched.
fn remove_report(reports: &mut Vec<Report>, crime_id: &str) -> bool {
    let before = reports.len();
    reports.retain(|r| r.id != crime_id);
    reports.len() != before
}
