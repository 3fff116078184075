//! Service context providers for the portfolio app.
//!
//! Provides the content API client and the mail relay to all components
//! via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let api = use_api();
//! let ready = use_services_ready();
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use fotofolio_core::{MailRelay, PortfolioApi};
use tokio::sync::RwLock;

/// Shared content API client.
///
/// Wrapped in Arc<RwLock<Option<..>>> so pages can read concurrently and
/// the root component can install the client once it is built.
pub type SharedApi = Arc<RwLock<Option<PortfolioApi>>>;

/// Shared mail relay client, same wrapping as [`SharedApi`].
pub type SharedMailer = Arc<RwLock<Option<MailRelay>>>;

/// Hook to access the content API client from context.
pub fn use_api() -> Signal<SharedApi> {
    use_context::<Signal<SharedApi>>()
}

/// Hook to access the mail relay from context.
pub fn use_mailer() -> Signal<SharedMailer> {
    use_context::<Signal<SharedMailer>>()
}

/// Hook to check whether the service clients are initialized.
///
/// Returns a reactive signal that flips once on startup; pages gate
/// their fetch effects on it.
pub fn use_services_ready() -> Signal<bool> {
    use_context::<Signal<bool>>()
}
