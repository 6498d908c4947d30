//=============================================================================
// File: src/screens/rewards.rs
//=============================================================================
use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::points_badge::PointsBadge;
use crate::i18n;
use dioxus::prelude::*;
use rewards_types::Reward;
use std::collections::HashMap;

/// One catalog entry with its redeem → confirm/cancel action area.
#[component]
fn RewardCard(reward: Reward) -> Element {
    let app_state_mut = use_context::<AppStateMut>();
    let mut session = app_state_mut.session;

    let redeemed = session.read().is_redeemed(reward.id);
    let pending = session.read().is_pending(reward.id);
    let affordable = session.read().can_afford(&reward);
    let balance = session.read().balance();

    let glyph = reward.category.glyph();
    let redeemed_label = i18n::t("rewards.redeemed");
    let cancel_label = i18n::t("common.cancel");
    // An unaffordable card keeps its buttons visible but disabled, labeled
    // with what is still missing.
    let redeem_label = if affordable {
        i18n::t("rewards.redeem")
    } else {
        format!("{}: {}", i18n::t("rewards.pointsNeeded"), reward.points_cost)
    };
    let confirm_label = if affordable {
        i18n::t("common.confirm")
    } else {
        let missing = (reward.points_cost - balance).to_string();
        let mut vars = HashMap::new();
        vars.insert("missing", missing.as_str());
        i18n::tr("rewards.pointsShort", &vars)
    };

    let reward_id = reward.id;
    let confirm_reward = reward.clone();

    rsx! {
        Card {
            div {
                class: "reward-media",
                img { src: "{reward.image}", alt: "{reward.name}" }
            }
            div {
                class: "reward-body",
                div {
                    class: "reward-head",
                    span { class: "reward-glyph", "aria-hidden": "true", "{glyph}" }
                    div {
                        class: "reward-text",
                        h4 { "{reward.name}" }
                        p { class: "muted", "{reward.description}" }
                    }
                    PointsBadge { points: reward.points_cost }
                }
                footer {
                    class: "reward-actions",
                    if redeemed {
                        Button {
                            button_type: ButtonType::Secondary,
                            outline: true,
                            disabled: true,
                            "✓ {redeemed_label}"
                        }
                    } else if pending {
                        Button {
                            button_type: ButtonType::Secondary,
                            outline: true,
                            on_click: move |_| session.write().cancel(),
                            "{cancel_label}"
                        }
                        Button {
                            disabled: !affordable,
                            on_click: move |_| {
                                let today = chrono::Local::now().date_naive();
                                match session.write().confirm(&confirm_reward, today) {
                                    Ok(()) => dioxus_logger::tracing::info!(
                                        "redeemed reward {}", confirm_reward.id
                                    ),
                                    Err(e) => dioxus_logger::tracing::warn!(
                                        "redemption of reward {} rejected: {e}", confirm_reward.id
                                    ),
                                }
                            },
                            "{confirm_label}"
                        }
                    } else {
                        Button {
                            disabled: !affordable,
                            on_click: move |_| session.write().request_redeem(reward_id),
                            "{redeem_label}"
                        }
                    }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn RewardsScreen() -> Element {
    let app_state = use_context::<AppState>();

    rsx! {
        div {
            class: "reward-list",
            for reward in app_state.catalog.iter() {
                RewardCard { key: "{reward.id}", reward: reward.clone() }
            }
        }
    }
}
