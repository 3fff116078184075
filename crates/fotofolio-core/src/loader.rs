//! Collection fetch lifecycle and per-asset load tracking
//!
//! The HTTP fetch itself happens in the UI layer (a spawned task awaiting
//! the API client); this module is the synchronous state machine fed by
//! its outcome. Every failure mode terminates in a displayable state:
//! a failed or misshapen fetch becomes an empty gallery plus a log line,
//! never an error surfaced to the page shell.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::PortfolioError;
use crate::media::classify;
use crate::types::{ContentItem, ItemId};

/// Lifecycle of the collection fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    /// No fetch started yet
    #[default]
    Idle,
    /// A fetch is in flight
    Loading,
    /// The last fetch produced a collection (possibly empty)
    Loaded,
    /// The last fetch failed; the collection is empty
    Failed,
}

/// Load state of one image asset
///
/// Only image-bearing kinds get an entry; videos and YouTube embeds have
/// no analogous pending state. `Loaded` and `LoadedWithFallback` are both
/// terminal and both permit display; the latter swaps in the placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetLoadState {
    /// Asset fetch/render still pending
    Loading,
    /// Asset rendered successfully
    Loaded,
    /// Asset failed to render; the placeholder displays instead
    LoadedWithFallback,
}

impl AssetLoadState {
    /// Terminal states never transition again.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, AssetLoadState::Loading)
    }
}

/// Drives the asynchronous collection fetch and owns the resulting
/// collection plus per-item image load state.
///
/// Each fetch cycle is tagged with a monotonically increasing generation;
/// a response carrying a stale generation is discarded instead of
/// clobbering a newer cycle's result. Duplicate concurrent fetches are
/// otherwise not coalesced; each runs its own cycle.
#[derive(Debug, Default)]
pub struct GalleryLoadCoordinator {
    phase: FetchPhase,
    generation: u64,
    collection: Vec<ContentItem>,
    load_states: HashMap<ItemId, AssetLoadState>,
}

impl GalleryLoadCoordinator {
    /// Coordinator in the `Idle` phase with an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current fetch phase.
    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    /// The current collection snapshot. Empty until the first successful
    /// fetch, and again after a failed one.
    pub fn collection(&self) -> &[ContentItem] {
        &self.collection
    }

    /// Start a fetch cycle.
    ///
    /// Returns the generation to hand back to [`complete_fetch`]; all
    /// earlier generations become stale immediately.
    ///
    /// [`complete_fetch`]: GalleryLoadCoordinator::complete_fetch
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.phase = FetchPhase::Loading;
        self.generation
    }

    /// Feed the outcome of the fetch started with `generation`.
    ///
    /// A success payload may be a bare JSON array or an object wrapping
    /// one under `data`; anything else coerces to an empty collection.
    /// A failure enters `Failed` with an empty collection and a logged
    /// diagnostic. Load state is reset for the new collection either way.
    pub fn complete_fetch(
        &mut self,
        generation: u64,
        outcome: Result<Value, PortfolioError>,
    ) {
        if generation != self.generation {
            tracing::debug!(
                generation,
                current = self.generation,
                "discarding stale gallery response"
            );
            return;
        }

        match outcome {
            Ok(payload) => {
                let collection = extract_collection(payload);
                self.load_states = initial_load_states(&collection);
                self.collection = collection;
                self.phase = FetchPhase::Loaded;
            }
            Err(error) => {
                tracing::error!(%error, "gallery fetch failed");
                self.collection.clear();
                self.load_states.clear();
                self.phase = FetchPhase::Failed;
            }
        }
    }

    /// Load state of one item's asset, if its kind tracks one.
    pub fn load_state(&self, id: &ItemId) -> Option<AssetLoadState> {
        self.load_states.get(id).copied()
    }

    /// The asset rendered successfully. Terminal; later marks are ignored.
    pub fn mark_asset_loaded(&mut self, id: &ItemId) {
        self.mark(id, AssetLoadState::Loaded);
    }

    /// The asset failed to render; the placeholder takes its place.
    /// Terminal; later marks are ignored.
    pub fn mark_asset_failed(&mut self, id: &ItemId) {
        self.mark(id, AssetLoadState::LoadedWithFallback);
    }

    fn mark(&mut self, id: &ItemId, terminal: AssetLoadState) {
        if let Some(state) = self.load_states.get_mut(id) {
            if !state.is_terminal() {
                *state = terminal;
            }
        }
    }

    /// True while any tracked image asset is still pending.
    pub fn any_asset_pending(&self) -> bool {
        self.load_states.values().any(|state| !state.is_terminal())
    }
}

/// Accept either a bare array or an object wrapping one under `data`.
/// Everything else, including a payload that fails item deserialization,
/// coerces to an empty collection.
fn extract_collection(payload: Value) -> Vec<ContentItem> {
    let array = match payload {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => Value::Array(items),
            _ => {
                tracing::warn!("gallery payload object has no data array, treating as empty");
                return Vec::new();
            }
        },
        _ => {
            tracing::warn!("gallery payload is not array-shaped, treating as empty");
            return Vec::new();
        }
    };

    match serde_json::from_value(array) {
        Ok(items) => items,
        Err(error) => {
            tracing::warn!(%error, "gallery payload did not deserialize, treating as empty");
            Vec::new()
        }
    }
}

/// Every item classifying to an image-bearing kind starts out `Loading`.
fn initial_load_states(collection: &[ContentItem]) -> HashMap<ItemId, AssetLoadState> {
    collection
        .iter()
        .filter(|item| classify(item).kind.tracks_load_state())
        .map(|item| (item.id.clone(), AssetLoadState::Loading))
        .collect()
}
