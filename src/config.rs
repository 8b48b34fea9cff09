//! Page behavior configuration.
//!
//! Every selector, class name, label and delay the page routines use lives in
//! [`UiConfig`]. Defaults are the values the FinançasWeb templates are written
//! against; a page may override any subset through an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="financasweb-config">
//!   {"alert_dismiss_ms": 8000, "nav_match": "all_prefixes"}
//! </script>
//! ```

use serde::{Deserialize, Serialize};

use crate::error::UiError;
use crate::money::EmptyAmount;
use crate::nav::NavMatch;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Element id of the optional inline JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "financasweb-config";

pub const DEFAULT_ALERT_DISMISS_MS: u32 = 5_000;
pub const DEFAULT_CONFIRM_MESSAGE: &str = "Tem certeza que deseja realizar esta ação?";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    // ── Theme ───────────────────────────────────────────────────
    pub theme_storage_key: String,
    pub theme_toggler_id: String,
    pub dark_class: String,
    pub light_icon: String,
    pub dark_icon: String,

    // ── Advanced filters ────────────────────────────────────────
    pub filter_toggle_id: String,
    pub filter_panel_id: String,
    pub hidden_class: String,
    pub show_filters_label: String,
    pub hide_filters_label: String,

    // ── Alerts ──────────────────────────────────────────────────
    pub alert_selector: String,
    pub persistent_alert_class: String,
    pub alert_dismiss_ms: u32,

    // ── Confirmation ────────────────────────────────────────────
    pub confirm_attribute: String,
    pub confirm_message: String,

    // ── Money ───────────────────────────────────────────────────
    pub money_input_selector: String,
    pub empty_amount: EmptyAmount,

    // ── Navigation ──────────────────────────────────────────────
    pub nav_link_selector: String,
    pub active_class: String,
    pub nav_match: NavMatch,

    // ── Widgets and footer ──────────────────────────────────────
    pub tooltip_selector: String,
    pub popover_selector: String,
    pub footer_year_id: String,

    /// `log` level name for the browser console (`info`, `debug`, ...).
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: "darkMode".to_owned(),
            theme_toggler_id: "theme-toggler".to_owned(),
            dark_class: "dark-theme".to_owned(),
            light_icon: "fa-moon".to_owned(),
            dark_icon: "fa-sun".to_owned(),

            filter_toggle_id: "toggle-advanced-filters".to_owned(),
            filter_panel_id: "advanced-filters".to_owned(),
            hidden_class: "d-none".to_owned(),
            show_filters_label: "Mostrar filtros avançados".to_owned(),
            hide_filters_label: "Ocultar filtros avançados".to_owned(),

            alert_selector: ".alert".to_owned(),
            persistent_alert_class: "alert-persistent".to_owned(),
            alert_dismiss_ms: DEFAULT_ALERT_DISMISS_MS,

            confirm_attribute: "data-confirm".to_owned(),
            confirm_message: DEFAULT_CONFIRM_MESSAGE.to_owned(),

            money_input_selector: ".money-input".to_owned(),
            empty_amount: EmptyAmount::default(),

            nav_link_selector: ".navbar-nav .nav-link".to_owned(),
            active_class: "active".to_owned(),
            nav_match: NavMatch::default(),

            tooltip_selector: r#"[data-bs-toggle="tooltip"]"#.to_owned(),
            popover_selector: r#"[data-bs-toggle="popover"]"#.to_owned(),
            footer_year_id: "current-year".to_owned(),

            log_level: "info".to_owned(),
        }
    }
}

impl UiConfig {
    /// Parse a config override; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Config`] when `raw` is not a JSON object matching
    /// the config shape.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Configured console level, falling back to `Info` for unknown names.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Selector for the `data-confirm` controls.
    pub fn confirm_selector(&self) -> String {
        format!("[{}]", self.confirm_attribute)
    }
}
