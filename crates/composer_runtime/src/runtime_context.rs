//! Runtime provider and context wiring for the composer.
//!
//! This module owns the long-lived reducer container, the effect queue, the recent-posts feed,
//! and auth state. UI composition stays in [`crate::components`].

use composer_core::{
    reduce_composer, AuthProvider, AuthState, ComposerAction, ComposerConfig, ComposerEffect,
    ComposerState, PlatformCatalog, PostFeed,
};
use leptos::*;
use platform_host::HostServices;

use crate::{effect_executor, host::ComposerHostContext};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Transient banner shown after a submission.
pub struct Notice {
    /// Unique id; a dismissal timer only clears the notice it was scheduled for.
    pub id: u64,
    /// Message text.
    pub text: &'static str,
}

#[derive(Clone, Copy)]
/// Leptos context for reading composer runtime state and dispatching [`ComposerAction`] values.
pub struct ComposerRuntimeContext {
    /// Host service bundle for executing runtime side effects.
    pub host: StoredValue<ComposerHostContext>,
    /// Configuration passed in at the composition root.
    pub config: StoredValue<ComposerConfig>,
    /// Platform catalog passed in at the composition root.
    pub catalog: &'static PlatformCatalog,
    /// Reactive composer form state.
    pub composer: RwSignal<ComposerState>,
    /// Submitted posts, newest first.
    pub feed: RwSignal<PostFeed>,
    /// Authentication state.
    pub auth: RwSignal<AuthState>,
    /// Provider of the sign-in currently in flight.
    pub signing_in: RwSignal<Option<AuthProvider>>,
    /// Transient success banner.
    pub notice: RwSignal<Option<Notice>>,
    /// Queue of effects emitted by the reducer and drained by the executor.
    pub effects: RwSignal<Vec<ComposerEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<ComposerAction>,
}

impl ComposerRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: ComposerAction) {
        self.dispatch.call(action);
    }

    /// Starts a mock sign-in with `provider`. Ignored while another sign-in is running.
    pub fn sign_in(&self, provider: AuthProvider, email: Option<String>) {
        self.host.get_value().begin_sign_in(*self, provider, email);
    }

    /// Signs the current user out.
    pub fn sign_out(&self) {
        self.host.get_value().begin_sign_out(*self);
    }
}

fn install_runtime_orchestration(runtime: ComposerRuntimeContext) {
    runtime.host.get_value().install_boot_hydration(runtime);
    effect_executor::install(runtime);
}

#[component]
/// Provides [`ComposerRuntimeContext`] to descendant components and restores the session.
pub fn ComposerProvider(
    /// Injected host bundle assembled by the entry layer.
    host_services: HostServices,
    /// Composition-root configuration.
    config: ComposerConfig,
    /// Platform catalog offered in the picker.
    catalog: &'static PlatformCatalog,
    children: Children,
) -> impl IntoView {
    let host = store_value(ComposerHostContext::new(host_services, &config));
    let composer = create_rw_signal(ComposerState::new(&config));
    let config = store_value(config);
    let feed = create_rw_signal(PostFeed::default());
    let auth = create_rw_signal(AuthState::Loading);
    let signing_in = create_rw_signal(None::<AuthProvider>);
    let notice = create_rw_signal(None::<Notice>);
    let effects = create_rw_signal(Vec::<ComposerEffect>::new());

    let dispatch = Callback::new(move |action: ComposerAction| {
        let mut next = composer.get_untracked();
        let previous = next.clone();

        match reduce_composer(&mut next, catalog, action) {
            Ok(new_effects) => {
                if next != previous {
                    composer.set(next);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("composer reducer error: {err}"),
        }
    });

    let runtime = ComposerRuntimeContext {
        host,
        config,
        catalog,
        composer,
        feed,
        auth,
        signing_in,
        notice,
        effects,
        dispatch,
    };

    provide_context(runtime);

    install_runtime_orchestration(runtime);

    children().into_view()
}

/// Returns the current [`ComposerRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`ComposerProvider`].
pub fn use_composer_runtime() -> ComposerRuntimeContext {
    use_context::<ComposerRuntimeContext>().expect("ComposerRuntimeContext not provided")
}
