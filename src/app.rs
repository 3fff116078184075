use std::sync::Arc;

use dioxus::prelude::*;
use tokio::sync::RwLock;

use fotofolio_core::{MailConfig, MailRelay, PortfolioApi};

use crate::context::{SharedApi, SharedMailer};
use crate::pages::{About, Contact, Gallery, Home};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Home hero
/// - `/gallery` - Media gallery with category filter and lightbox
/// - `/about` - Photographer profile
/// - `/contact` - Contact form
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/gallery")]
    Gallery {},
    #[route("/about")]
    About {},
    #[route("/contact")]
    Contact {},
}

/// Root application component.
///
/// Provides global styles, shared API/mail clients, and routing.
#[component]
pub fn App() -> Element {
    // Shared service clients, initialized on mount
    let api: Signal<SharedApi> = use_signal(|| Arc::new(RwLock::new(None)));
    let mailer: Signal<SharedMailer> = use_signal(|| Arc::new(RwLock::new(None)));
    let mut services_ready: Signal<bool> = use_signal(|| false);

    // Provide service context to all child components
    use_context_provider(|| api);
    use_context_provider(|| mailer);
    use_context_provider(|| services_ready);

    // Initialize clients on mount
    use_effect(move || {
        spawn(async move {
            match PortfolioApi::new(crate::get_api_config()) {
                Ok(client) => {
                    let shared = api();
                    let mut guard = shared.write().await;
                    *guard = Some(client);
                }
                Err(e) => {
                    tracing::error!("Failed to initialize content API client: {}", e);
                }
            }

            let mail_config = MailConfig::from_env();
            match MailRelay::new(mail_config) {
                Ok(relay) => {
                    if !relay.is_configured() {
                        tracing::warn!("mail relay not configured, contact form will not send");
                    }
                    let shared = mailer();
                    let mut guard = shared.write().await;
                    *guard = Some(relay);
                }
                Err(e) => {
                    tracing::error!("Failed to initialize mail relay: {}", e);
                }
            }

            services_ready.set(true);
            tracing::info!("Portfolio services initialized");
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
