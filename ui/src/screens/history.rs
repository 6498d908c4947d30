//=============================================================================
// File: src/screens/history.rs
//=============================================================================
use crate::app_state_mut::AppStateMut;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::points_badge::PointsBadge;
use crate::i18n;
use crate::Tab;
use dioxus::prelude::*;
use rewards_types::RedemptionEntry;

/// A single row in the redemption history table.
#[component]
fn HistoryRow(entry: RedemptionEntry) -> Element {
    let date = entry.date.format("%Y-%m-%d").to_string();

    rsx! {
        tr {
            td { "{date}" }
            td { "{entry.reward_name}" }
            td { PointsBadge { points: entry.points_cost } }
            td { title: "{entry.status}", "✓" }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn HistoryScreen() -> Element {
    let app_state_mut = use_context::<AppStateMut>();
    let session = app_state_mut.session;
    let mut active_tab = use_context::<Signal<Tab>>();

    let entries = session.read().history().to_vec();

    rsx! {
        if entries.is_empty() {
            EmptyState {
                title: i18n::t("rewards.historyEmptyTitle"),
                description: i18n::t("rewards.historyEmptyBody"),
                icon: rsx! { "🎁" },
                primary_action: rsx! {
                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        on_click: move |_| active_tab.set(Tab::Available),
                        {i18n::t("rewards.browseRewards")}
                    }
                },
            }
        } else {
            Card {
                h3 { {i18n::t("rewards.redeemHistory")} }
                table {
                    thead {
                        tr {
                            th { "Date" }
                            th { "Reward" }
                            th { {i18n::t("incentives.points")} }
                            th { "" }
                        }
                    }
                    tbody {
                        for entry in entries.iter() {
                            HistoryRow { key: "{entry.id}", entry: entry.clone() }
                        }
                    }
                }
            }
        }
    }
}
