//! Host service bundle injected into the composer runtime.

use std::rc::Rc;

use crate::{
    ImmediateTimer, MediaPreviewService, MemoryMediaPreviewService, MemorySessionStore,
    SessionStore, TimerService,
};

/// Host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed composition.
    Browser,
    /// In-memory composition for native builds and tests.
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Runtime-selected host services.
///
/// Adapter selection happens before this bundle reaches `composer_runtime`, which keeps the
/// runtime free of browser API details.
#[derive(Clone)]
pub struct HostServices {
    /// Durable store holding the signed-in user.
    pub session: Rc<dyn SessionStore>,
    /// Releases media preview URLs.
    pub media_previews: Rc<dyn MediaPreviewService>,
    /// Delay source for simulated latency.
    pub timer: Rc<dyn TimerService>,
    /// Strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// In-memory services with an immediate timer.
    pub fn headless() -> Self {
        Self {
            session: Rc::new(MemorySessionStore::default()),
            media_previews: Rc::new(MemoryMediaPreviewService::default()),
            timer: Rc::new(ImmediateTimer),
            host_strategy: HostStrategy::Headless,
        }
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}
