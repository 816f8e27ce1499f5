//! Signed-out landing page with the mock sign-in form.

use composer_core::AuthProvider;
use leptos::ev::SubmitEvent;
use leptos::*;

use super::{
    header::APP_NAME,
    primitives::{Button, ButtonVariant, TextField},
};
use crate::runtime_context::use_composer_runtime;

#[component]
/// Landing page shown while nobody is signed in.
pub fn LandingPage() -> impl IntoView {
    view! {
        <main class="landing-page">
            <LoginForm />
        </main>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let runtime = use_composer_runtime();
    let email = create_rw_signal(String::new());
    let show_email = create_rw_signal(false);
    let submitting = Signal::derive(move || runtime.signing_in.get().is_some());
    let email_in_flight =
        Signal::derive(move || runtime.signing_in.get() == Some(AuthProvider::Email));

    let on_email_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let address = email.get_untracked();
        if address.trim().is_empty() {
            return;
        }
        runtime.sign_in(AuthProvider::Email, Some(address));
    };

    view! {
        <section class="login-card">
            <h1 class="login-title">{APP_NAME}</h1>
            <p class="login-subtitle">"Sign in to manage your social media posts"</p>
            <div class="login-providers">
                <Button
                    disabled=submitting
                    on_click=Callback::new(move |_| runtime.sign_in(AuthProvider::Google, None))
                >
                    "Continue with Google"
                </Button>
                <Button
                    disabled=submitting
                    on_click=Callback::new(move |_| runtime.sign_in(AuthProvider::Apple, None))
                >
                    "Continue with Apple"
                </Button>
            </div>
            <Show
                when=move || show_email.get()
                fallback=move || {
                    view! {
                        <Button
                            variant=ButtonVariant::Quiet
                            disabled=submitting
                            on_click=Callback::new(move |_| show_email.set(true))
                        >
                            "Continue with Email"
                        </Button>
                    }
                }
            >
                <form class="login-email" on:submit=on_email_submit>
                    <TextField
                        input_type="email"
                        autocomplete="email"
                        placeholder="Enter your email"
                        aria_label="Email address"
                        value=email
                        disabled=submitting
                        on_input=Callback::new(move |value: String| email.set(value))
                    />
                    <Button
                        variant=ButtonVariant::Primary
                        submit=true
                        disabled=Signal::derive(move || {
                            submitting.get() || email.with(|value| value.trim().is_empty())
                        })
                    >
                        {move || {
                            if email_in_flight.get() { "Signing in..." } else { "Sign in with Email" }
                        }}
                    </Button>
                </form>
            </Show>
        </section>
    }
}
