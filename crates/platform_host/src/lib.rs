//! Typed host contracts shared by the composer runtime and browser adapters.
//!
//! This crate is the boundary between the Leptos runtime and whatever hosts it: session
//! persistence, media preview release, delays, and time. Browser implementations live in
//! `platform_host_web`; the in-memory adapters here back native builds and tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod host;
pub mod media_preview;
pub mod session;
pub mod storage;
pub mod time;
pub mod timer;

pub use host::{HostServices, HostStrategy};
pub use media_preview::{MediaPreviewService, MemoryMediaPreviewService, NoopMediaPreviewService};
pub use session::SessionRepository;
pub use storage::{
    delete_session_entry_with, load_session_entry_with, save_session_entry_with,
    MemorySessionStore, NoopSessionStore, SessionStore, SessionStoreFuture,
};
pub use time::{next_local_id, next_monotonic_timestamp_ms, unix_time_ms_now};
pub use timer::{ImmediateTimer, TimerFuture, TimerService};
