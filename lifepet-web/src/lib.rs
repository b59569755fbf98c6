#![forbid(unsafe_code)]
//! Browser bindings for the Lifepet engine.
//!
//! Maps the core storage contract onto `window.localStorage`. Rendering,
//! form wiring, and navigation live in the host page, not here.

#[cfg(target_arch = "wasm32")]
pub mod storage;

#[cfg(target_arch = "wasm32")]
pub use storage::{BrowserBackend, create_browser_engine};

// Re-export the core API so web callers depend on one crate.
pub use lifepet_core::*;
