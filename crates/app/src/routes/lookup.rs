use dioxus::prelude::*;
use shared_types::{LookupResponse, Report};
use shared_ui::components::{
    Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle, Input, PageHeader, PageTitle,
};
use shared_ui::Button;

use crate::fetch::{FetchState, RequestSeq};
use crate::format_helpers::format_date_human;
use crate::notify::use_notifier;
use crate::session::use_api;

const LOOKUP_FALLBACK: &str = "Failed to fetch results";

/// Free-text lookup of fraud indicators (phone numbers, emails, URLs)
/// against recorded incidents. Open to anonymous visitors.
#[component]
pub fn LookupPage() -> Element {
    let client = use_api();
    let notifier = use_notifier();

    let mut search = use_signal(String::new);
    // Idle = no search attempted yet; Ready([]) = a search came back empty.
    let mut results = use_signal(FetchState::<Vec<Report>>::default);
    let mut seq = use_signal(RequestSeq::default);

    let run_search = move || {
        let term = search.read().clone();
        if !should_submit(&term) {
            notifier.error("Please enter a search term");
            return;
        }

        // Clear previous matches right away so a slow response never
        // renders against stale cards, and take a ticket so a superseded
        // response is discarded instead of overwriting newer state.
        let ticket = seq.write().next();
        results.set(FetchState::Loading);

        let client = client.clone();
        spawn(async move {
            let outcome = client.fraud_lookup(&term).await;

            if !seq.read().is_current(ticket) {
                return;
            }

            match outcome {
                Ok(resp) => match classify_response(resp) {
                    LookupOutcome::Matches(crimes) => {
                        notifier.success("Matching record found");
                        results.set(FetchState::Ready(crimes));
                    }
                    LookupOutcome::NoMatch => {
                        notifier.error("No matching record found");
                        results.set(FetchState::Ready(Vec::new()));
                    }
                    LookupOutcome::Rejected(msg) => {
                        notifier.error(msg.clone());
                        results.set(FetchState::Failed(msg));
                    }
                },
                Err(err) => {
                    let msg = err.message_or(LOOKUP_FALLBACK);
                    notifier.error(msg.clone());
                    results.set(FetchState::Failed(msg));
                }
            }
        });
    };

    // Clone for use in the button and Enter-key handlers
    let mut run_search_for_btn = run_search.clone();
    let mut run_search_for_enter = run_search;

    let loading = results.read().is_loading();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./lookup.css") }

        div { class: "container",
            PageHeader {
                PageTitle { "Fraud Lookup" }
            }

            div { class: "lookup-controls",
                Input {
                    value: search.read().clone(),
                    placeholder: "Enter phone number, email or website url to search",
                    label: "",
                    on_input: move |evt: FormEvent| search.set(evt.value()),
                    on_keydown: move |evt: KeyboardEvent| {
                        if matches!(evt.key(), Key::Enter) {
                            evt.prevent_default();
                            run_search_for_enter();
                        }
                    },
                }
                Button {
                    disabled: loading,
                    onclick: move |_| run_search_for_btn(),
                    if loading { "Searching..." } else { "Search" }
                }
            }

            match &*results.read() {
                FetchState::Idle => rsx! {},
                FetchState::Loading => rsx! {
                    div { class: "lookup-loading", "Searching records..." }
                },
                FetchState::Ready(crimes) if !crimes.is_empty() => rsx! {
                    div { class: "lookup-results",
                        for crime in crimes.iter() {
                            LookupResultCard { report: crime.clone() }
                        }
                    }
                },
                // A completed search with nothing to show: either zero
                // matches or a failed request.
                _ => rsx! {
                    div { class: "lookup-empty",
                        "No records to display. Try searching for something."
                    }
                },
            }
        }
    }
}

#[component]
fn LookupResultCard(report: Report) -> Element {
    let related = report
        .related_info
        .clone()
        .unwrap_or_else(|| "--".to_string());
    let display_date = format_date_human(report.created_at.as_deref().unwrap_or(&report.date));
    let status_variant = status_badge_variant(&report);

    rsx! {
        Card {
            CardHeader {
                CardTitle { "{report.title}" }
            }
            CardContent {
                div { class: "lookup-card-grid",
                    p {
                        span { class: "lookup-card-label", "Related Entities: " }
                        "{related}"
                    }
                    p {
                        span { class: "lookup-card-label", "Category: " }
                        "{report.category}"
                    }
                    p {
                        span { class: "lookup-card-label", "Place of Incident: " }
                        "{report.location}"
                    }
                    p {
                        span { class: "lookup-card-label", "Date: " }
                        "{display_date}"
                    }
                    p { class: "lookup-card-wide",
                        span { class: "lookup-card-label", "Description: " }
                        "{report.description}"
                    }
                    p {
                        span { class: "lookup-card-label", "Status: " }
                        Badge { variant: status_variant, "{report.status}" }
                    }
                }
            }
        }
    }
}

fn status_badge_variant(report: &Report) -> BadgeVariant {
    match report.status {
        shared_types::ReportStatus::Open => BadgeVariant::Primary,
        shared_types::ReportStatus::Closed => BadgeVariant::Secondary,
    }
}

/// Local guard: an empty search term never issues a network call.
fn should_submit(term: &str) -> bool {
    !term.trim().is_empty()
}

/// How a lookup response should land in the view.
#[derive(Debug, PartialEq)]
enum LookupOutcome {
    Matches(Vec<Report>),
    NoMatch,
    Rejected(String),
}

/// Classify a logically-complete lookup response.
///
/// A successful response with zero matches is its own outcome, not an
/// error; a logical failure resolves to the server's message or the
/// generic fallback.
fn classify_response(resp: LookupResponse) -> LookupOutcome {
    if resp.success {
        if resp.crimes.is_empty() {
            LookupOutcome::NoMatch
        } else {
            LookupOutcome::Matches(resp.crimes)
        }
    } else {
        let msg = resp
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| LOOKUP_FALLBACK.to_string());
        LookupOutcome::Rejected(msg)
    }
}
