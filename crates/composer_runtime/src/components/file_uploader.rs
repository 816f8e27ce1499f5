//! Single-file media picker with drag and drop.

use composer_core::{ComposerAction, MediaCandidate, MediaKind, PostMedia};
use leptos::ev::{DragEvent, Event, MouseEvent};
use leptos::*;
use platform_host_web::{preview_first_file, PreviewedFile};
use wasm_bindgen::JsCast;

use super::{preview_modal::PostPreviewModal, primitives::bool_token};
use crate::runtime_context::use_composer_runtime;

const ACCEPTED_TYPES: &str = "image/*,video/*";

fn media_candidate(file: PreviewedFile) -> MediaCandidate {
    MediaCandidate {
        file_name: file.name,
        mime_type: file.mime_type,
        byte_len: file.size,
        preview_url: file.preview_url,
    }
}

fn offer_files(runtime: crate::ComposerRuntimeContext, files: Option<web_sys::FileList>) {
    match preview_first_file(files) {
        Ok(Some(file)) => {
            runtime.dispatch_action(ComposerAction::SelectMedia(media_candidate(file)));
        }
        Ok(None) => {}
        Err(err) => logging::warn!("media preview failed: {err}"),
    }
}

fn input_files(ev: &Event) -> Option<(web_sys::HtmlInputElement, Option<web_sys::FileList>)> {
    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    let files = input.files();
    Some((input, files))
}

#[component]
/// Media attachment area: a drop zone while empty, a thumbnail once a file is attached.
pub fn FileUploader() -> impl IntoView {
    let runtime = use_composer_runtime();
    let media = create_memo(move |_| runtime.composer.with(|state| state.media.clone()));
    let media_error = create_memo(move |_| runtime.composer.with(|state| state.media_error.clone()));
    let drag_active = create_rw_signal(false);
    let preview_open = create_rw_signal(false);
    let input_ref = create_node_ref::<html::Input>();

    let on_change = move |ev: Event| {
        if let Some((input, files)) = input_files(&ev) {
            offer_files(runtime, files);
            // Allows picking the same file again after removing it.
            input.set_value("");
        }
    };
    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        drag_active.set(false);
        offer_files(runtime, ev.data_transfer().and_then(|transfer| transfer.files()));
    };
    let open_picker = move |_: MouseEvent| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <div class="file-uploader">
            <Show
                when=move || media.with(Option::is_some)
                fallback=move || {
                    view! {
                        <div
                            class="file-drop-zone"
                            role="button"
                            tabindex="0"
                            aria-label="Upload media"
                            data-drag-active=move || bool_token(drag_active.get())
                            on:click=open_picker
                            on:dragover=move |ev: DragEvent| {
                                ev.prevent_default();
                                drag_active.set(true);
                            }
                            on:dragleave=move |_| drag_active.set(false)
                            on:drop=on_drop
                        >
                            <input
                                type="file"
                                accept=ACCEPTED_TYPES
                                hidden=true
                                node_ref=input_ref
                                on:change=on_change
                            />
                            <p class="file-drop-zone-title">
                                {move || {
                                    if drag_active.get() {
                                        "Drop your file here"
                                    } else {
                                        "Drag & drop your image or video"
                                    }
                                }}
                            </p>
                            <p class="file-drop-zone-hint">"or click to browse"</p>
                            {move || {
                                media_error
                                    .get()
                                    .map(|message| {
                                        view! { <p class="file-drop-zone-error" role="alert">{message}</p> }
                                    })
                            }}
                        </div>
                    }
                }
            >
                {move || media.get().map(|media| view! { <AttachedMedia media preview_open /> })}
            </Show>
            <Show when=move || preview_open.get() && media.with(Option::is_some)>
                <PostPreviewModal on_close=Callback::new(move |()| preview_open.set(false)) />
            </Show>
        </div>
    }
}

#[component]
fn AttachedMedia(media: PostMedia, preview_open: RwSignal<bool>) -> impl IntoView {
    let runtime = use_composer_runtime();
    let label = format!("{} ({})", media.file_name, media.size_label());
    let thumbnail = match media.kind {
        MediaKind::Image => view! { <img src=media.preview_url.clone() alt="Preview" /> }.into_view(),
        MediaKind::Video => view! { <video src=media.preview_url.clone() muted=true /> }.into_view(),
    };

    view! {
        <div
            class="file-attachment"
            role="button"
            tabindex="0"
            aria-label="Open post preview"
            on:click=move |_| preview_open.set(true)
        >
            {thumbnail}
            <button
                type="button"
                class="file-attachment-remove"
                aria-label="Remove media"
                on:click=move |ev: MouseEvent| {
                    ev.stop_propagation();
                    runtime.dispatch_action(ComposerAction::RemoveMedia);
                }
            >
                "×"
            </button>
            <div class="file-attachment-label">{label}</div>
        </div>
    }
}
