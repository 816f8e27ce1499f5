//! Host-side runtime helpers for executing composer effects and session side effects.
//!
//! The reducer stays pure; everything here touches injected host services (session store,
//! preview URLs, timers) and maps results back onto runtime signals.

mod boot;
mod effects;
mod session_effects;

use std::rc::Rc;

use composer_core::{AuthProvider, ComposerConfig, ComposerEffect, User};
use platform_host::{HostServices, MediaPreviewService, SessionRepository, TimerService};

use crate::runtime_context::ComposerRuntimeContext;

#[derive(Clone)]
/// Host service bundle for composer runtime side effects.
pub struct ComposerHostContext {
    session: SessionRepository<User>,
    media_previews: Rc<dyn MediaPreviewService>,
    timer: Rc<dyn TimerService>,
    host_strategy_name: &'static str,
}

impl ComposerHostContext {
    /// Binds the injected services, keying the session repository by `config.session_key`.
    pub fn new(services: HostServices, config: &ComposerConfig) -> Self {
        Self {
            session: SessionRepository::new(services.session, config.session_key.clone()),
            media_previews: services.media_previews,
            timer: services.timer,
            host_strategy_name: services.host_strategy.as_str(),
        }
    }

    /// Returns the repository holding the signed-in user.
    pub fn session(&self) -> &SessionRepository<User> {
        &self.session
    }

    /// Returns the configured preview-URL service.
    pub fn media_preview_service(&self) -> Rc<dyn MediaPreviewService> {
        self.media_previews.clone()
    }

    /// Returns the configured delay source.
    pub fn timer(&self) -> Rc<dyn TimerService> {
        self.timer.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy_name
    }

    /// Installs the boot-time session restore for the provider.
    pub(crate) fn install_boot_hydration(&self, runtime: ComposerRuntimeContext) {
        boot::install_boot_hydration(self.clone(), runtime);
    }

    /// Executes a single [`ComposerEffect`] emitted by the reducer.
    pub(crate) fn run_composer_effect(
        &self,
        runtime: ComposerRuntimeContext,
        effect: ComposerEffect,
    ) {
        match effect {
            ComposerEffect::RevokeMediaPreview(url) => effects::revoke_preview(self, &url),
            ComposerEffect::PublishPost(post) => {
                effects::publish_post(self.clone(), runtime, post)
            }
        }
    }

    /// Starts a mock sign-in unless one is already running.
    pub(crate) fn begin_sign_in(
        &self,
        runtime: ComposerRuntimeContext,
        provider: AuthProvider,
        email: Option<String>,
    ) {
        session_effects::begin_sign_in(self.clone(), runtime, provider, email);
    }

    /// Signs out immediately and clears the stored user in the background.
    pub(crate) fn begin_sign_out(&self, runtime: ComposerRuntimeContext) {
        session_effects::begin_sign_out(self.clone(), runtime);
    }
}

impl std::fmt::Debug for ComposerHostContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComposerHostContext")
            .field("session", &self.session)
            .field("host_strategy_name", &self.host_strategy_name)
            .finish_non_exhaustive()
    }
}
