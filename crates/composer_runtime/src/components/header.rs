//! App header with the profile dialog.

use composer_core::User;
use leptos::*;

use super::primitives::{Button, Modal};
use crate::runtime_context::use_composer_runtime;

pub(crate) const APP_NAME: &str = "Social Swift";

#[component]
fn Avatar(user: User, #[prop(default = "avatar")] layout_class: &'static str) -> impl IntoView {
    match user.image.clone() {
        Some(image) => {
            let alt = user.name.clone().unwrap_or_else(|| "User profile".to_string());
            view! { <img class=layout_class src=image alt=alt /> }.into_view()
        }
        None => view! {
            <span class=layout_class data-avatar="initial" aria-hidden="true">
                {user.initial()}
            </span>
        }
        .into_view(),
    }
}

#[component]
/// Logo plus the signed-in user's avatar, which opens the profile dialog.
pub fn Header() -> impl IntoView {
    let runtime = use_composer_runtime();
    let profile_open = create_rw_signal(false);
    let user = create_memo(move |_| runtime.auth.with(|auth| auth.user().cloned()));

    view! {
        <header class="app-header">
            <div class="app-logo">
                <span>{APP_NAME}</span>
            </div>
            {move || {
                user.get()
                    .map(|user| {
                        view! {
                            <button
                                type="button"
                                class="app-header-profile"
                                aria-label="Open profile"
                                on:click=move |_| profile_open.set(true)
                            >
                                <Avatar user />
                            </button>
                        }
                    })
            }}
            {move || {
                if !profile_open.get() {
                    return None;
                }
                user.get()
                    .map(|user| {
                        let close = Callback::new(move |()| profile_open.set(false));
                        view! {
                            <Modal title="Your Profile" on_close=close layout_class="profile-dialog">
                                <div class="profile-dialog-body">
                                    <Avatar user=user.clone() layout_class="avatar avatar-large" />
                                    <h3>{user.display_name().to_string()}</h3>
                                    <p>{user.email.clone().unwrap_or_default()}</p>
                                    <p class="profile-dialog-provider">
                                        {format!("Signed in with {}", user.provider.label())}
                                    </p>
                                    <Button on_click=Callback::new(move |_| {
                                        profile_open.set(false);
                                        runtime.sign_out();
                                    })>"Sign out"</Button>
                                </div>
                            </Modal>
                        }
                    })
            }}
        </header>
    }
}
