//! Advanced filters show/hide toggle.
//!
//! Visibility is whatever the markup says at load (the hidden class on the
//! panel). Each click flips it and relabels the button to match.

use crate::config::UiConfig;
use crate::render::{Patch, Target};

#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

#[derive(Clone, Debug)]
pub struct FilterPanel {
    visible: bool,
    hidden_class: String,
    show_label: String,
    hide_label: String,
}

impl FilterPanel {
    /// Start from the panel's current markup state.
    pub fn from_markup(hidden: bool, config: &UiConfig) -> Self {
        Self {
            visible: !hidden,
            hidden_class: config.hidden_class.clone(),
            show_label: config.show_filters_label.clone(),
            hide_label: config.hide_filters_label.clone(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Button text for the current state: offer the opposite action.
    pub fn label(&self) -> &str {
        if self.visible { &self.hide_label } else { &self.show_label }
    }

    /// Flip visibility and return the patches for the new state.
    pub fn toggle(&mut self) -> Vec<Patch> {
        self.visible = !self.visible;
        log::debug!("filters: visible={}", self.visible);
        vec![
            Patch::class(Target::FilterPanel, &self.hidden_class, !self.visible),
            Patch::text(Target::FilterButton, self.label()),
        ]
    }
}
