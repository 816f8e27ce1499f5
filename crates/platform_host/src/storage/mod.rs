//! Session persistence contracts and adapters.

mod session_store;

pub use session_store::{
    delete_session_entry_with, load_session_entry_with, save_session_entry_with,
    MemorySessionStore, NoopSessionStore, SessionStore, SessionStoreFuture,
};
