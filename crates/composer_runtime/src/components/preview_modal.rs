//! Mock Facebook and Instagram renderings of the draft post.

use composer_core::{ComposerAction, MediaKind, PostMedia};
use leptos::*;

use super::primitives::{Button, ButtonVariant, Modal, TextArea};
use crate::runtime_context::use_composer_runtime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Feed layout shown in the preview.
pub enum PreviewLayout {
    /// Facebook post card.
    #[default]
    Facebook,
    /// Instagram square post.
    Instagram,
}

impl PreviewLayout {
    /// Tab label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Facebook => "Facebook",
            Self::Instagram => "Instagram",
        }
    }

    const ALL: [Self; 2] = [Self::Facebook, Self::Instagram];
}

fn media_view(media: &PostMedia) -> View {
    match media.kind {
        MediaKind::Image => {
            view! { <img class="preview-media" src=media.preview_url.clone() alt="Preview" /> }
                .into_view()
        }
        MediaKind::Video => view! {
            <video class="preview-media" src=media.preview_url.clone() controls=true />
        }
        .into_view(),
    }
}

#[component]
/// Preview dialog with an editable caption. Edits go straight to the composer caption.
pub fn PostPreviewModal(on_close: Callback<()>) -> impl IntoView {
    let runtime = use_composer_runtime();
    let layout = create_rw_signal(PreviewLayout::default());
    let caption = Signal::derive(move || runtime.composer.with(|state| state.caption.clone()));
    let media = create_memo(move |_| runtime.composer.with(|state| state.media.clone()));
    let set_caption =
        Callback::new(move |text: String| runtime.dispatch_action(ComposerAction::SetCaption(text)));

    view! {
        <Modal title="Post preview" on_close layout_class="post-preview">
            <div class="post-preview-tabs" role="tablist">
                {PreviewLayout::ALL
                    .into_iter()
                    .map(|option| {
                        view! {
                            <Button
                                variant=ButtonVariant::Quiet
                                selected=Signal::derive(move || layout.get() == option)
                                on_click=Callback::new(move |_| layout.set(option))
                            >
                                {option.label()}
                            </Button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || {
                let media = media.get();
                match layout.get() {
                    PreviewLayout::Facebook => view! {
                        <article class="post-preview-card" data-layout="facebook">
                            <header class="post-preview-author">
                                <span class="post-preview-avatar" aria-hidden="true"></span>
                                <div>
                                    <strong>"Your Name"</strong>
                                    <span class="post-preview-meta">"Just now · 🌐"</span>
                                </div>
                            </header>
                            <TextArea
                                layout_class="post-preview-caption"
                                placeholder="What's on your mind?"
                                aria_label="Caption"
                                rows=3
                                value=caption
                                on_input=set_caption
                            />
                            {media.as_ref().map(media_view)}
                            <footer class="post-preview-actions">
                                <span>"Like"</span>
                                <span>"Comment"</span>
                                <span>"Share"</span>
                            </footer>
                        </article>
                    }
                    .into_view(),
                    PreviewLayout::Instagram => view! {
                        <article class="post-preview-card" data-layout="instagram">
                            <header class="post-preview-author">
                                <span class="post-preview-avatar" aria-hidden="true"></span>
                                <strong>"your_username"</strong>
                            </header>
                            <div class="post-preview-square">{media.as_ref().map(media_view)}</div>
                            <footer class="post-preview-actions">
                                <span aria-label="Like">"♡"</span>
                                <span aria-label="Comment">"💬"</span>
                                <span aria-label="Share">"↗"</span>
                            </footer>
                            <TextArea
                                layout_class="post-preview-caption"
                                placeholder="Write a caption..."
                                aria_label="Caption"
                                rows=3
                                value=caption
                                on_input=set_caption
                            />
                        </article>
                    }
                    .into_view(),
                }
            }}
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facebook_is_the_default_layout() {
        assert_eq!(PreviewLayout::default(), PreviewLayout::Facebook);
        assert_eq!(
            PreviewLayout::ALL.map(PreviewLayout::label),
            ["Facebook", "Instagram"]
        );
    }
}
