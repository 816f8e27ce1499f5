use composer_core::{AuthProvider, AuthState};
use leptos::{logging, spawn_local, SignalGetUntracked, SignalSet};

use super::ComposerHostContext;
use crate::{runtime_context::ComposerRuntimeContext, session};

pub(super) fn begin_sign_in(
    host: ComposerHostContext,
    runtime: ComposerRuntimeContext,
    provider: AuthProvider,
    email: Option<String>,
) {
    if runtime.signing_in.get_untracked().is_some() {
        return;
    }
    runtime.signing_in.set(Some(provider));
    let delay_ms = runtime.config.with_value(|config| config.mock_auth_delay_ms);

    spawn_local(async move {
        let timer = host.timer();
        let outcome = session::sign_in(
            host.session(),
            timer.as_ref(),
            delay_ms,
            provider,
            email.as_deref(),
        )
        .await;
        if let Err(err) = &outcome.persisted {
            logging::warn!("session persist failed: {err}");
        }
        runtime.auth.set(AuthState::SignedIn(outcome.user));
        runtime.signing_in.set(None);
    });
}

pub(super) fn begin_sign_out(host: ComposerHostContext, runtime: ComposerRuntimeContext) {
    runtime.auth.set(AuthState::SignedOut);
    spawn_local(async move {
        if let Err(err) = session::sign_out(host.session()).await {
            logging::warn!("session clear failed: {err}");
        }
    });
}
