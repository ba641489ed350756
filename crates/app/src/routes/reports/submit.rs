use chrono::NaiveDate;
use dioxus::prelude::*;
use shared_types::{is_valid_category, SubmitReportRequest, REPORT_CATEGORIES};
use shared_ui::components::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Form,
    FormSelect, Input, PageHeader, PageTitle,
};

use crate::notify::use_notifier;
use crate::routes::Route;
use crate::session::{use_api, use_session};

/// Report submission form.
#[component]
pub fn SubmitReportPage() -> Element {
    let session = use_session();
    let client = use_api();
    let notifier = use_notifier();

    let mut title = use_signal(String::new);
    let mut category = use_signal(|| REPORT_CATEGORIES[0].to_string());
    let mut description = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut date = use_signal(String::new);
    let mut related_info = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    if !session.is_authenticated() {
        return rsx! {
            div { class: "container",
                Card {
                    CardContent {
                        p { class: "report-error", "You must be logged in to report a crime." }
                    }
                }
            }
        };
    }

    let handle_submit = {
        let client = client.clone();
        move |_: FormEvent| {
            let request = match build_request(
                &title.read(),
                &category.read(),
                &description.read(),
                &location.read(),
                &date.read(),
                &related_info.read(),
            ) {
                Ok(request) => request,
                Err(msg) => {
                    notifier.error(msg);
                    return;
                }
            };

            let client = client.clone();
            spawn(async move {
                submitting.set(true);
                match client.submit_report(&request).await {
                    Ok(resp) => {
                        notifier.success(resp.message_or("Crime report submitted successfully!"));
                        navigator().push(Route::ReportList {});
                    }
                    Err(err) => {
                        notifier.error(err.message_or("Failed to submit report"));
                    }
                }
                submitting.set(false);
            });
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./reports.css") }

        div { class: "container",
            PageHeader {
                PageTitle { "Report Crime" }
            }

            Card {
                CardHeader {
                    CardTitle { "New Report" }
                    CardDescription {
                        "Describe the incident. Add any related phone numbers, emails or URLs so others can look them up."
                    }
                }
                CardContent {
                    Form {
                        onsubmit: handle_submit,

                        Input {
                            label: "Title",
                            value: title.read().clone(),
                            placeholder: "Short summary of the incident",
                            on_input: move |e: FormEvent| title.set(e.value()),
                        }

                        FormSelect {
                            label: "Category",
                            value: category.read().clone(),
                            onchange: move |e: Event<FormData>| category.set(e.value()),
                            for c in REPORT_CATEGORIES.iter() {
                                option { value: *c, "{c}" }
                            }
                        }

                        div { class: "input-wrapper",
                            label { class: "input-label", "Description" }
                            textarea {
                                class: "input",
                                rows: "5",
                                value: description.read().clone(),
                                placeholder: "What happened?",
                                oninput: move |e: FormEvent| description.set(e.value()),
                            }
                        }

                        Input {
                            label: "Place of Incident",
                            value: location.read().clone(),
                            placeholder: "City, site or platform",
                            on_input: move |e: FormEvent| location.set(e.value()),
                        }

                        Input {
                            label: "Incident Date",
                            input_type: "date",
                            value: date.read().clone(),
                            on_input: move |e: FormEvent| date.set(e.value()),
                        }

                        Input {
                            label: "Related Entities (optional)",
                            value: related_info.read().clone(),
                            placeholder: "Phone numbers, emails or URLs involved",
                            on_input: move |e: FormEvent| related_info.set(e.value()),
                        }

                        Button {
                            variant: ButtonVariant::Primary,
                            disabled: *submitting.read(),
                            if *submitting.read() { "Submitting..." } else { "Submit Report" }
                        }
                    }
                }
            }
        }
    }
}

/// Validate the form locally and build the request body.
///
/// Rejections never reach the network; the backend still re-validates.
fn build_request(
    title: &str,
    category: &str,
    description: &str,
    location: &str,
    date: &str,
    related_info: &str,
) -> Result<SubmitReportRequest, String> {
    if title.trim().is_empty() {
        return Err("Title is required.".to_string());
    }
    if !is_valid_category(category) {
        return Err("Choose a category.".to_string());
    }
    if description.trim().is_empty() {
        return Err("Description is required.".to_string());
    }
    if location.trim().is_empty() {
        return Err("Place of incident is required.".to_string());
    }
    if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        return Err("Enter a valid incident date.".to_string());
    }

    let related = related_info.trim();
    Ok(SubmitReportRequest {
        title: title.trim().to_string(),
        category: category.to_string(),
        description: description.trim().to_string(),
        location: location.trim().to_string(),
        date: date.to_string(),
        related_info: (!related.is_empty()).then(|| related.to_string()),
    })
}
