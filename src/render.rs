//! Single render step from view-model state to the DOM.
//!
//! View models never touch elements. They describe the mutations they need as
//! [`Patch`] values, and [`apply`] replays those against a [`Surface`]. The
//! browser surface resolves each [`Target`] to an element; tests use an
//! in-memory surface.

use crate::error::UiError;

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

/// Element a patch is addressed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// `<body>`.
    Body,
    /// The `<i>` icon inside the theme toggler.
    ThemeIcon,
    /// The advanced filters container.
    FilterPanel,
    /// The button that shows or hides the advanced filters.
    FilterButton,
    /// A navigation link, by document order among every queried nav link.
    NavLink(usize),
    /// The footer year placeholder.
    FooterYear,
}

/// One DOM mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Patch {
    /// Add (`on`) or remove a class.
    SetClass { target: Target, class: String, on: bool },
    /// Remove `from` and add `to`.
    SwapClass { target: Target, from: String, to: String },
    /// Replace the text content.
    SetText { target: Target, text: String },
}

impl Patch {
    pub fn class(target: Target, class: &str, on: bool) -> Self {
        Self::SetClass { target, class: class.to_owned(), on }
    }

    pub fn swap(target: Target, from: &str, to: &str) -> Self {
        Self::SwapClass { target, from: from.to_owned(), to: to.to_owned() }
    }

    pub fn text(target: Target, text: impl Into<String>) -> Self {
        Self::SetText { target, text: text.into() }
    }

    pub fn target(&self) -> Target {
        match self {
            Self::SetClass { target, .. } | Self::SwapClass { target, .. } | Self::SetText { target, .. } => *target,
        }
    }
}

/// Something patches can be applied to.
///
/// Implementations treat a target with no backing element as a no-op.
pub trait Surface {
    /// Add or remove `class` on `target`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Dom`] if the underlying element rejects the change.
    fn set_class(&mut self, target: Target, class: &str, on: bool) -> Result<(), UiError>;

    /// Replace the text content of `target`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Dom`] if the underlying element rejects the change.
    fn set_text(&mut self, target: Target, text: &str) -> Result<(), UiError>;
}

/// Apply `patches` in order, stopping at the first failure.
///
/// # Errors
///
/// Propagates the first [`Surface`] error.
pub fn apply<S: Surface + ?Sized>(surface: &mut S, patches: &[Patch]) -> Result<(), UiError> {
    for patch in patches {
        log::trace!("render: {:?}", patch.target());
        match patch {
            Patch::SetClass { target, class, on } => surface.set_class(*target, class, *on)?,
            Patch::SwapClass { target, from, to } => {
                surface.set_class(*target, from, false)?;
                surface.set_class(*target, to, true)?;
            }
            Patch::SetText { target, text } => surface.set_text(*target, text)?,
        }
    }
    log::debug!("render: applied {} patches", patches.len());
    Ok(())
}
