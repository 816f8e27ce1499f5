use composer_core::AuthState;
use leptos::*;

use super::{
    composer_form::PostComposer, header::Header, login::LandingPage, recent_posts::RecentPosts,
};
use crate::runtime_context::use_composer_runtime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShellScreen {
    Loading,
    Landing,
    Composer,
}

impl ShellScreen {
    fn for_auth(auth: &AuthState) -> Self {
        match auth {
            AuthState::Loading => Self::Loading,
            AuthState::SignedOut => Self::Landing,
            AuthState::SignedIn(_) => Self::Composer,
        }
    }
}

#[component]
fn NoticeBanner() -> impl IntoView {
    let runtime = use_composer_runtime();
    move || {
        runtime.notice.get().map(|notice| {
            view! {
                <div class="notice-banner" role="status" aria-live="polite">
                    {notice.text}
                    <button
                        type="button"
                        aria-label="Dismiss"
                        on:click=move |_| runtime.notice.set(None)
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}

#[component]
/// Top-level composer surface: a spinner while the session loads, then the landing page or
/// the composer with its recent posts.
pub fn ComposerShell() -> impl IntoView {
    let runtime = use_composer_runtime();
    let screen = create_memo(move |_| runtime.auth.with(ShellScreen::for_auth));

    move || match screen.get() {
        ShellScreen::Loading => view! {
            <div class="app-loading" role="progressbar" aria-label="Loading">
                <span class="app-spinner"></span>
            </div>
        }
        .into_view(),
        ShellScreen::Landing => view! { <LandingPage /> }.into_view(),
        ShellScreen::Composer => view! {
            <div class="app-shell">
                <Header />
                <main class="app-main">
                    <NoticeBanner />
                    <PostComposer />
                    <RecentPosts />
                </main>
            </div>
        }
        .into_view(),
    }
}

#[cfg(test)]
mod tests {
    use composer_core::{mock_user, AuthProvider};

    use super::*;

    #[test]
    fn auth_state_selects_screen() {
        assert_eq!(ShellScreen::for_auth(&AuthState::Loading), ShellScreen::Loading);
        assert_eq!(ShellScreen::for_auth(&AuthState::SignedOut), ShellScreen::Landing);
        let user = mock_user(AuthProvider::Google, None, "u1");
        assert_eq!(
            ShellScreen::for_auth(&AuthState::SignedIn(user)),
            ShellScreen::Composer
        );
    }
}
