//! Translation lookup backed by the embedded message bundle.
//!
//! Keys are flat dotted strings (`rewards.redeem`). An unknown key falls
//! back to the key itself so a missing entry shows up in the UI instead of
//! rendering blank.

use std::collections::HashMap;
use std::sync::OnceLock;

static EN_BUNDLE: &str = include_str!("../assets/i18n/en.json");
static TABLE: OnceLock<HashMap<String, String>> = OnceLock::new();

fn table() -> &'static HashMap<String, String> {
    TABLE.get_or_init(|| {
        serde_json::from_str(EN_BUNDLE).unwrap_or_else(|e| {
            dioxus_logger::tracing::warn!("translation bundle failed to parse: {e}");
            HashMap::new()
        })
    })
}

/// Returns the localized text for `key`.
pub fn t(key: &str) -> String {
    table().get(key).cloned().unwrap_or_else(|| key.to_string())
}

/// Like [`t`], substituting `{name}` placeholders from `vars`.
pub fn tr(key: &str, vars: &HashMap<&str, &str>) -> String {
    let mut text = t(key);
    for (name, value) in vars {
        text = text.replace(&format!("{{{name}}}"), value);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_key_resolves() {
        assert_eq!(t("rewards.redeem"), "Redeem");
        assert_eq!(t("common.cancel"), "Cancel");
    }

    #[test]
    fn unknown_key_falls_back_to_the_key() {
        assert_eq!(t("rewards.doesNotExist"), "rewards.doesNotExist");
    }

    #[test]
    fn placeholders_are_substituted() {
        let mut vars = HashMap::new();
        vars.insert("missing", "30");
        assert_eq!(tr("rewards.pointsShort", &vars), "Need 30 more points");
    }
}
