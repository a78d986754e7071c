//! # likes
//!
//! Like buttons for static blog pages. Each button keeps a per-post counter in
//! the browser's `localStorage` and shows it next to the button.
//!
//! Compiled to WebAssembly with the `hydrate` feature, the crate scans the
//! page on load, fills in every count and wires the click handlers. Without
//! `hydrate` only the browser-independent core is built, which is what the
//! unit tests exercise.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`widget`] | Initialization pass and click handler |
//! | [`count`] | Stored counter value and its text encoding |
//! | [`store`] | Key-value storage capability and in-memory store |
//! | [`dom`] | Traits over the host document |
//! | [`config`] | Selectors, attribute names and storage key prefix |
//! | [`error`] | Error types |
//! | `web` | web-sys bindings and wasm entry points (`hydrate` only) |

pub mod config;
pub mod count;
pub mod dom;
pub mod error;
pub mod store;
pub mod widget;

#[cfg(feature = "hydrate")]
pub mod web;

pub use config::WidgetConfig;
pub use count::LikeCount;
pub use error::{ConfigError, StoreError, WidgetError};
pub use store::{LikeStore, MemoryStore};
pub use widget::{InitReport, LikeWidget, initialize, on_click};
