//! Shared components for the rewards screens.

pub mod empty_state;
pub mod nav_bar;
pub mod pico;
pub mod points_badge;
