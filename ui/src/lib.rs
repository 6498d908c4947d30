// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
pub mod compat;
mod components;
pub mod i18n;
mod screens;

use app_state::AppState;
use app_state_mut::AppStateMut;
use components::nav_bar::NavBar;
use components::pico::Container;
use components::points_badge::PointsBadge;
use rewards_types::fixtures;
use rewards_types::RedeemError;
use rewards_types::RedeemFlow;
use rewards_types::RedemptionSession;
use screens::history::HistoryScreen;
use screens::rewards::RewardsScreen;

/// How long a success/rejection notice stays on screen.
const NOTICE_DISMISS_AFTER: std::time::Duration = std::time::Duration::from_secs(3);

/// Enum to represent the two tabs of the rewards screen.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
enum Tab {
    #[default]
    Available,
    History,
}

impl Tab {
    /// Helper to get the localized caption for each tab.
    fn label(&self) -> String {
        match self {
            Tab::Available => i18n::t("rewards.availableRewards"),
            Tab::History => i18n::t("rewards.redeemHistory"),
        }
    }
}

/// A list of both tabs for easy iteration.
const ALL_TABS: [Tab; 2] = [Tab::Available, Tab::History];

/// The tab strip under the header.
#[component]
fn Tabs(active_tab: Signal<Tab>) -> Element {
    rsx! {
        nav {
            class: "tab-menu",
            ul {
                for tab in ALL_TABS {
                    li {
                        a {
                            href: "#",
                            class: if *active_tab.read() == tab { "active-tab" } else { "" },
                            "aria-current": if *active_tab.read() == tab { "page" } else { "false" },
                            onclick: move |event| {
                                event.prevent_default();
                                active_tab.set(tab);
                            },
                            {tab.label()}
                        }
                    }
                }
            }
        }
    }
}

/// The transient banner driven by the session flow. Success and rejection
/// notices dismiss themselves after [`NOTICE_DISMISS_AFTER`]; the serial
/// check in `dismiss_notice` keeps a timer from a superseded notice from
/// blanking the one currently showing.
#[component]
fn NoticeBanner() -> Element {
    let app_state_mut = use_context::<AppStateMut>();
    let mut session = app_state_mut.session;

    let notice = use_memo(move || match *session.read().flow() {
        RedeemFlow::Success { serial, .. } => Some((serial, None)),
        RedeemFlow::Rejected { serial, error, .. } => Some((serial, Some(error))),
        _ => None,
    });

    use_effect(move || {
        if let Some((serial, _)) = notice() {
            spawn(async move {
                compat::sleep(NOTICE_DISMISS_AFTER).await;
                session.write().dismiss_notice(serial);
            });
        }
    });

    match notice() {
        Some((_, None)) => {
            let text = i18n::t("rewards.redeemSuccess");
            rsx! {
                div { class: "notice notice-success", role: "status", "✓ {text}" }
            }
        }
        Some((_, Some(error))) => {
            let text = notice_error_text(error);
            rsx! {
                div { class: "notice notice-error", role: "alert", "⚠ {text}" }
            }
        }
        None => rsx! {},
    }
}

/// Maps a rejection to its banner text. `InsufficientBalance` reuses the
/// localized missing-points string; the rarer errors fall back to their
/// `Display` form.
fn notice_error_text(error: RedeemError) -> String {
    match error {
        RedeemError::InsufficientBalance { missing, .. } => {
            let missing = missing.to_string();
            let mut vars = std::collections::HashMap::new();
            vars.insert("missing", missing.as_str());
            i18n::tr("rewards.pointsShort", &vars)
        }
        other => other.to_string(),
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    .app-main-container {
        max-width: 480px;
        margin: 0 auto;
        padding-bottom: 4rem;
    }

    /* --- HEADER --- */
    .rewards-hero {
        display: flex;
        align-items: center;
        gap: 1rem;
        padding: 1.5rem 0 1rem 0;
    }
    .rewards-hero .hero-glyph {
        font-size: 2rem;
        background: var(--pico-card-sectioning-background-color);
        border-radius: 50%;
        padding: 0.5rem 0.75rem;
    }
    .rewards-hero h1 { margin-bottom: 0.25rem; }
    .rewards-hero p { margin-bottom: 0; }

    /* --- TABS --- */
    .tab-menu ul {
        display: flex;
        padding: 0;
        margin: 0 0 1rem 0;
        border-bottom: 1px solid var(--pico-muted-border-color);
    }
    .tab-menu li { list-style: none; flex: 1; text-align: center; }
    .tab-menu a {
        display: block;
        padding: 0.75rem 0;
        text-decoration: none;
        color: var(--pico-muted-color);
        border-bottom: 3px solid transparent;
    }
    .tab-menu a.active-tab {
        color: var(--pico-primary);
        border-bottom-color: var(--pico-primary);
    }

    /* --- NOTICES --- */
    .notice {
        position: fixed;
        top: 1rem;
        left: 50%;
        transform: translateX(-50%);
        z-index: 50;
        padding: 0.75rem 1.25rem;
        border-radius: var(--pico-border-radius);
        color: #fff;
        box-shadow: 0 4px 16px rgba(0, 0, 0, 0.25);
    }
    .notice-success { background-color: var(--pico-ins-color, #2e7d32); }
    .notice-error { background-color: var(--pico-del-color, #c62828); }

    /* --- REWARD CARDS --- */
    .reward-media img { width: 100%; height: 10rem; object-fit: cover; }
    .reward-head {
        display: flex;
        align-items: flex-start;
        gap: 0.75rem;
        margin-bottom: 0.5rem;
    }
    .reward-head .reward-text { flex: 1; }
    .reward-head h4 { margin-bottom: 0.25rem; }
    .reward-glyph { font-size: 1.5rem; }
    .muted { color: var(--pico-muted-color); font-size: 0.875rem; margin-bottom: 0; }
    .points-badge {
        white-space: nowrap;
        font-size: 0.8rem;
        background: var(--pico-card-sectioning-background-color);
        border-radius: 1rem;
        padding: 0.25rem 0.6rem;
    }
    .reward-actions {
        display: flex;
        justify-content: flex-end;
        gap: 0.5rem;
        margin-top: 0.75rem;
    }

    .content { padding-bottom: 1rem; }

    /* --- BOTTOM NAV --- */
    .bottom-nav {
        position: fixed;
        bottom: 0;
        left: 0;
        right: 0;
        background: var(--pico-card-background-color);
        border-top: 1px solid var(--pico-muted-border-color);
        padding: 0 1rem;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        style {
            "{app_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // Provide the stable, non-reactive catalog.
    use_context_provider(|| AppState::new(fixtures::reward_catalog()));

    // All mutable state lives in the session signal. Nothing persists;
    // a reload starts over from the fixtures.
    let session = use_signal(|| {
        RedemptionSession::new(
            fixtures::STARTING_BALANCE,
            fixtures::redemption_history_seed(),
        )
    });
    use_context_provider(|| AppStateMut { session });

    let active_tab = use_signal(Tab::default);
    use_context_provider(|| active_tab);

    let balance = session.read().balance();
    let title = i18n::t("rewards.title");
    let points_caption = i18n::t("rewards.yourPoints");

    rsx! {
        div {
            class: "app-main-container",
            Container {
                header {
                    div {
                        class: "rewards-hero",
                        span { class: "hero-glyph", "aria-hidden": "true", "🎁" }
                        div {
                            h1 { "{title}" }
                            p {
                                "{points_caption}: "
                                PointsBadge { points: balance }
                            }
                        }
                    }
                    Tabs { active_tab }
                }
                NoticeBanner {}
                div {
                    class: "content",
                    match active_tab() {
                        Tab::Available => rsx! {
                            RewardsScreen {}
                        },
                        Tab::History => rsx! {
                            HistoryScreen {}
                        },
                    }
                }
                NavBar {
                    on_logout: move |()| {
                        // Sign-out belongs to the host app; nothing to do yet.
                        dioxus_logger::tracing::info!("logout requested");
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_labels_come_from_the_bundle() {
        assert_eq!(Tab::Available.label(), "Available Rewards");
        assert_eq!(Tab::History.label(), "Redeem History");
    }

    #[test]
    fn insufficient_balance_notice_names_the_missing_amount() {
        let text = notice_error_text(RedeemError::InsufficientBalance {
            cost: 100,
            balance: 70,
            missing: 30,
        });
        assert_eq!(text, "Need 30 more points");
    }
}
