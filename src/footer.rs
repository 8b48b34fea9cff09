//! Footer year stamp.

use crate::render::{Patch, Target};

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

/// Logged once the page behaviors are attached.
pub const LOAD_BANNER: &str = "FinançasWeb - JavaScript carregado";

pub fn year_patch(year: i32) -> Patch {
    Patch::text(Target::FooterYear, year.to_string())
}

/// Current local year from the browser clock.
#[cfg(feature = "hydrate")]
pub fn current_year() -> i32 {
    i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or(i32::MAX)
}
