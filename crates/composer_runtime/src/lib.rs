//! Leptos runtime and UI surface for the Social Swift post composer.
//!
//! [`ComposerProvider`] owns the reactive state (composer form, recent posts, auth) and the
//! reducer dispatch path; [`ComposerShell`] renders the signed-out landing page or the composer
//! itself. Domain decisions live in `composer_core`, host side effects behind `platform_host`.

pub mod components;
mod effect_executor;
mod host;
mod runtime_context;
pub mod session;

pub use components::{ComposerShell, PlatformIcon};
pub use host::ComposerHostContext;
pub use runtime_context::{use_composer_runtime, ComposerProvider, ComposerRuntimeContext, Notice};
pub use session::{restore_session, sign_in, sign_out, SessionFlowError, SignInOutcome};
