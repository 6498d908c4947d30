//! A pill for displaying a point amount.

use crate::i18n;
use dioxus::prelude::*;

/// Renders `⭐ {points} points` as a rounded badge. The unit caption comes
/// from the translation bundle.
#[component]
pub fn PointsBadge(points: u32) -> Element {
    let unit = i18n::t("incentives.points");
    rsx! {
        span {
            class: "points-badge",
            title: "{points} {unit}",
            "⭐ {points} {unit}"
        }
    }
}
