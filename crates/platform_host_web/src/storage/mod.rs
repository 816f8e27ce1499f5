//! Browser persistence adapters.

pub mod local_session;
