//! Defines the mutable, reactive state for the application's UI.

use dioxus::prelude::*;
use rewards_types::RedemptionSession;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// The session signal owns every piece of state the redemption flow can
/// mutate (balance, redeemed-set, history, flow). It is separate from the
/// immutable `AppState` catalog.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    pub session: Signal<RedemptionSession>,
}
