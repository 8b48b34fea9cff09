//! Active navigation link highlighting.
//!
//! A link matches the current path when the path starts with the link's
//! `href` (root excluded), or when both are exactly `/`. Prefixes are plain
//! string prefixes, so `/rel` also matches `/relatorios`.

use serde::{Deserialize, Serialize};

use crate::render::{Patch, Target};

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Which matching links become active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavMatch {
    /// Only the link(s) with the longest matching `href`.
    #[default]
    LongestPrefix,
    /// Every matching link, in document order.
    AllPrefixes,
}

/// Whether a single `href` matches `current_path`.
pub fn link_matches(href: &str, current_path: &str) -> bool {
    if href.is_empty() {
        return false;
    }
    if href == "/" {
        return current_path == "/";
    }
    current_path.starts_with(href)
}

/// Indices (document order) of the links to mark active.
///
/// `hrefs[i]` is the `href` attribute of link `i`, `None` when absent.
pub fn active_links(current_path: &str, hrefs: &[Option<String>], policy: NavMatch) -> Vec<usize> {
    let matching: Vec<(usize, usize)> = hrefs
        .iter()
        .enumerate()
        .filter_map(|(i, href)| {
            let href = href.as_deref()?;
            link_matches(href, current_path).then_some((i, href.len()))
        })
        .collect();

    match policy {
        NavMatch::AllPrefixes => matching.into_iter().map(|(i, _)| i).collect(),
        NavMatch::LongestPrefix => {
            let longest = matching.iter().map(|&(_, len)| len).max().unwrap_or(0);
            matching
                .into_iter()
                .filter(|&(_, len)| len == longest)
                .map(|(i, _)| i)
                .collect()
        }
    }
}

/// Patches that add `active_class` to each active link.
pub fn patches(active: &[usize], active_class: &str) -> Vec<Patch> {
    active
        .iter()
        .map(|&i| Patch::class(Target::NavLink(i), active_class, true))
        .collect()
}
