//! # financasweb
//!
//! Browser behavior for the FinançasWeb server-rendered pages, compiled to
//! WebAssembly with the `hydrate` feature.
//!
//! View models are plain data and produce [`render::Patch`] lists; the
//! `browser` module (hydrate only) resolves elements, attaches listeners, and
//! applies those patches. Without `hydrate` the crate is a native library of
//! the pure logic, which is what the tests exercise.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`money`] | Money-input cents formatting and pt-BR currency display |
//! | [`theme`] | Light/dark toggle and the injected preference store |
//! | [`filters`] | Advanced filters show/hide state |
//! | [`nav`] | Active navigation link matching |
//! | [`alerts`] | Cancellable alert auto-dismissal bookkeeping |
//! | [`confirm`] | Destructive-action prompt text and decision |
//! | [`footer`] | Footer year stamp |
//! | [`render`] | Patches and the single apply step |
//! | [`config`] | Selectors, labels, delays, policies |
//! | [`error`] | Crate error type |

pub mod alerts;
pub mod config;
pub mod confirm;
pub mod error;
pub mod filters;
pub mod footer;
pub mod money;
pub mod nav;
pub mod render;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod browser;
