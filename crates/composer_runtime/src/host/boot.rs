use leptos::{create_effect, logging, spawn_local, SignalSet};

use super::ComposerHostContext;
use crate::{runtime_context::ComposerRuntimeContext, session};

pub(super) fn install_boot_hydration(host: ComposerHostContext, runtime: ComposerRuntimeContext) {
    create_effect(move |_| {
        let host = host.clone();
        logging::log!("composer host strategy: {}", host.host_strategy_name());
        spawn_local(async move {
            let auth = match session::restore_session(host.session()).await {
                Ok(auth) => auth,
                Err(err) => {
                    logging::warn!("session restore failed, starting signed out: {err}");
                    composer_core::AuthState::SignedOut
                }
            };
            runtime.auth.set(auth);
        });
    });
}
