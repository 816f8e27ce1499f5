use composer_core::{ComposerAction, SubmitBlocker};
use leptos::ev::SubmitEvent;
use leptos::*;

use super::{
    file_uploader::FileUploader,
    insights_panel::CaptionInsightsPanel,
    platform_picker::PlatformPicker,
    primitives::{Button, ButtonVariant, TextArea},
};
use crate::runtime_context::use_composer_runtime;

fn blocker_hint(blocker: Option<SubmitBlocker>) -> Option<&'static str> {
    match blocker? {
        SubmitBlocker::EmptyCaption => Some("Write a caption to post."),
        SubmitBlocker::NoPlatforms => Some("Select at least one platform."),
        SubmitBlocker::InFlight => None,
    }
}

#[component]
/// Caption, media, and platform form with the submit button.
pub fn PostComposer() -> impl IntoView {
    let runtime = use_composer_runtime();
    let caption = Signal::derive(move || runtime.composer.with(|state| state.caption.clone()));
    let blocker = create_memo(move |_| runtime.composer.with(|state| state.submit_blocker()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        runtime.dispatch_action(ComposerAction::Submit);
    };

    view! {
        <form class="post-composer" on:submit=on_submit>
            <div class="post-composer-field">
                <label for="caption">"Write your caption"</label>
                <TextArea
                    id="caption"
                    placeholder="What's on your mind?"
                    rows=4
                    value=caption
                    on_input=Callback::new(move |text: String| {
                        runtime.dispatch_action(ComposerAction::SetCaption(text));
                    })
                />
            </div>
            <CaptionInsightsPanel />
            <div class="post-composer-field">
                <span class="post-composer-label">"Upload media"</span>
                <FileUploader />
            </div>
            <PlatformPicker />
            <Button
                variant=ButtonVariant::Primary
                layout_class="post-composer-submit"
                submit=true
                disabled=Signal::derive(move || blocker.get().is_some())
            >
                "Post across platforms"
            </Button>
            {move || {
                blocker_hint(blocker.get())
                    .map(|hint| view! { <p class="post-composer-hint">{hint}</p> })
            }}
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_explain_each_blocker_except_in_flight() {
        assert_eq!(blocker_hint(None), None);
        assert_eq!(
            blocker_hint(Some(SubmitBlocker::EmptyCaption)),
            Some("Write a caption to post.")
        );
        assert_eq!(
            blocker_hint(Some(SubmitBlocker::NoPlatforms)),
            Some("Select at least one platform.")
        );
        assert_eq!(blocker_hint(Some(SubmitBlocker::InFlight)), None);
    }
}
