//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Every browser call is gated on `target_arch = "wasm32"`; native builds compile inert
//! fallbacks so the workspace tests without a browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Host-strategy selection and the adapter factory used by the site entry point.
pub mod adapters;
pub mod media_preview;
pub mod storage;
pub mod timer;

pub use adapters::{build_host_services, host_strategy_name, selected_host_strategy};
pub use media_preview::{preview_first_file, PreviewedFile, WebMediaPreviewService};
pub use storage::local_session::WebSessionStore;
pub use timer::{sleep_ms, WebTimer};
