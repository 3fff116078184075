//! Contact page - inquiry form over the mail relay.
//!
//! Submission outcome surfaces as a single acknowledgement line; a relay
//! failure (including an unconfigured relay) is reported the same way a
//! transport error is, never as a crash.

use dioxus::prelude::*;

use fotofolio_core::{ContactMessage, PortfolioError};

use crate::components::{NavHeader, NavLocation};
use crate::context::use_mailer;

/// Contact page component
#[component]
pub fn Contact() -> Element {
    let mailer = use_mailer();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);

    let mut sending = use_signal(|| false);
    let mut acknowledgement: Signal<Option<String>> = use_signal(|| None);

    let send_message = move |_| {
        if sending() {
            return;
        }

        let submission = ContactMessage {
            name: name(),
            email: email(),
            message: message(),
        };
        if submission.name.is_empty() || submission.email.is_empty() || submission.message.is_empty()
        {
            acknowledgement.set(Some("Please fill in every field before sending.".to_string()));
            return;
        }

        sending.set(true);
        acknowledgement.set(None);

        spawn(async move {
            let shared = mailer();
            let guard = shared.read().await;

            let outcome = match *guard {
                Some(ref relay) => relay.send(&submission).await,
                None => Err(PortfolioError::MailerDisabled),
            };

            match outcome {
                Ok(()) => {
                    acknowledgement
                        .set(Some("Message sent! I'll get back to you soon.".to_string()));
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                }
                Err(e) => {
                    tracing::error!("Contact submission failed: {}", e);
                    acknowledgement.set(Some(
                        "Something went wrong sending your message. Please try again later."
                            .to_string(),
                    ));
                }
            }
            sending.set(false);
        });
    };

    rsx! {
        div { class: "page contact-page",
            NavHeader { current: NavLocation::Contact }

            main { class: "contact-main",
                h2 { class: "page-title", "Get In Touch" }
                p { class: "contact-lead",
                    "Have a project or event in mind? Let's create something amazing together!"
                }

                div { class: "contact-form",
                    label { class: "contact-label", "Full Name" }
                    input {
                        class: "contact-input",
                        r#type: "text",
                        placeholder: "John Doe",
                        value: "{name}",
                        oninput: move |event| name.set(event.value()),
                    }

                    label { class: "contact-label", "Email Address" }
                    input {
                        class: "contact-input",
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: "{email}",
                        oninput: move |event| email.set(event.value()),
                    }

                    label { class: "contact-label", "Message" }
                    textarea {
                        class: "contact-input contact-textarea",
                        rows: "4",
                        placeholder: "Tell me about your project...",
                        value: "{message}",
                        oninput: move |event| message.set(event.value()),
                    }

                    button {
                        class: "btn-primary",
                        disabled: sending(),
                        onclick: send_message,
                        if sending() { "Sending..." } else { "Send Message" }
                    }

                    if let Some(line) = acknowledgement() {
                        p { class: "contact-ack", "{line}" }
                    }
                }
            }
        }
    }
}
