use dioxus::prelude::*;
use shared_ui::{
    Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Form, Input, Label,
};

use crate::notify::use_notifier;
use crate::routes::Route;
use crate::session::{use_api, use_session};

/// Login page with email/password.
#[component]
pub fn LoginPage() -> Element {
    let mut session = use_session();
    let client = use_api();
    let notifier = use_notifier();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Redirect home if already authenticated
    if session.is_authenticated() {
        navigator().push(Route::Home {});
    }

    let handle_login = {
        let client = client.clone();
        move |_: FormEvent| {
            if email.read().trim().is_empty() || password.read().is_empty() {
                error_msg.set(Some("Enter your email and password.".to_string()));
                return;
            }

            let client = client.clone();
            let email_value = email.read().trim().to_string();
            let password_value = password.read().clone();
            spawn(async move {
                loading.set(true);
                error_msg.set(None);

                match client.login(&email_value, &password_value).await {
                    Ok(resp) if resp.success => {
                        if let Some(user) = resp.user {
                            session.set_user(user);
                            notifier.success(resp.message.unwrap_or_else(|| {
                                "Logged in successfully".to_string()
                            }));
                            navigator().push(Route::Home {});
                        } else {
                            error_msg.set(Some("Login failed. Please try again.".to_string()));
                        }
                    }
                    Ok(resp) => {
                        error_msg.set(Some(
                            resp.message
                                .unwrap_or_else(|| "Invalid email or password".to_string()),
                        ));
                    }
                    Err(err) => {
                        error_msg.set(Some(err.message_or("Login failed. Please try again.")));
                    }
                }
                loading.set(false);
            });
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Enter your credentials to access your account" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    Form {
                        onsubmit: handle_login,
                        div { class: "auth-field",
                            Label { html_for: "email", "Email" }
                            Input {
                                input_type: "email",
                                id: "email",
                                placeholder: "user@example.com",
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "password", "Password" }
                            Input {
                                input_type: "password",
                                id: "password",
                                placeholder: "Enter your password",
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Accounts are provisioned by the CyberLens service."
                    }
                }
            }
        }
    }
}
