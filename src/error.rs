//! Crate-wide error type.
//!
//! Nothing here ever reaches the user: page routines log a `UiError` at their
//! boundary and carry on with the rest of the page.

/// Error raised while wiring page behavior.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// A DOM or browser API call failed; holds the stringified JS value.
    #[error("dom error: {0}")]
    Dom(String),
    /// The inline configuration block is not valid JSON for [`crate::config::UiConfig`].
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for UiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
