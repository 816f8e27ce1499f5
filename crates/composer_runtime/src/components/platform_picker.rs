//! Platform tiles, search, and the connect-confirmation dialog.

use composer_core::{ComposerAction, Platform, PlatformFilter};
use leptos::*;

use super::{
    platform_icon::PlatformIcon,
    primitives::{bool_token, Button, ButtonVariant, Modal, TextField},
};
use crate::runtime_context::use_composer_runtime;

const TILE_ICON_PX: u16 = 32;
const DIALOG_ICON_PX: u16 = 64;

fn visible_platforms(catalog: &composer_core::PlatformCatalog, term: &str) -> Vec<Platform> {
    catalog
        .filter(&PlatformFilter::search(term))
        .cloned()
        .collect()
}

#[component]
/// Searchable grid of catalog platforms.
///
/// Clicking a connected tile toggles its selection; clicking a disconnected tile asks to
/// connect it first.
pub fn PlatformPicker() -> impl IntoView {
    let runtime = use_composer_runtime();
    let catalog = runtime.catalog;
    let search = create_rw_signal(String::new());
    let platforms = create_memo(move |_| search.with(|term| visible_platforms(catalog, term)));
    let selected_count = move || runtime.composer.with(|state| state.selected.len());

    view! {
        <section class="platform-picker" aria-labelledby="platform-picker-title">
            <div class="platform-picker-header">
                <h3 id="platform-picker-title">"Post to platforms"</h3>
                <span class="platform-picker-count">
                    {move || format!("{} selected", selected_count())}
                </span>
            </div>
            <TextField
                layout_class="platform-picker-search"
                input_type="search"
                placeholder="Search platforms"
                aria_label="Search platforms"
                value=search
                on_input=Callback::new(move |term: String| search.set(term))
            />
            <div class="platform-grid" role="list">
                <For
                    each=move || platforms.get()
                    key=|platform| platform.id.clone()
                    let:platform
                >
                    <PlatformTile platform />
                </For>
            </div>
            <Show when=move || platforms.with(Vec::is_empty)>
                <p class="platform-picker-empty">"No platforms match your search."</p>
            </Show>
            <ConnectDialog />
        </section>
    }
}

#[component]
fn PlatformTile(platform: Platform) -> impl IntoView {
    let runtime = use_composer_runtime();
    let id = store_value(platform.id.clone());
    let connected = move || {
        runtime
            .composer
            .with(|state| id.with_value(|id| state.is_connected(id)))
    };
    let selected = move || {
        runtime
            .composer
            .with(|state| id.with_value(|id| state.is_selected(id)))
    };
    let name = platform.name.clone();

    view! {
        <div role="listitem">
            <Button
                variant=ButtonVariant::Quiet
                layout_class="platform-tile"
                title=name.clone()
                selected=Signal::derive(selected)
                on_click=Callback::new(move |_| {
                    runtime.dispatch_action(ComposerAction::ActivatePlatform(id.get_value()));
                })
            >
                <span
                    class="platform-tile-icon"
                    data-connected=move || bool_token(connected())
                >
                    <PlatformIcon identifier=platform.identifier() size_px=TILE_ICON_PX />
                    <Show
                        when=connected
                        fallback=|| {
                            view! {
                                <span class="platform-tile-badge" aria-hidden="true">"🔗"</span>
                            }
                        }
                    >
                        <Show when=selected>
                            <span class="platform-tile-badge" aria-hidden="true">"✓"</span>
                        </Show>
                    </Show>
                </span>
                <span class="platform-tile-name">{name}</span>
            </Button>
        </div>
    }
}

#[component]
/// Confirmation dialog for the platform awaiting connection.
fn ConnectDialog() -> impl IntoView {
    let runtime = use_composer_runtime();
    let catalog = runtime.catalog;
    let pending = create_memo(move |_| {
        runtime.composer.with(|state| {
            state
                .pending_connection
                .as_ref()
                .and_then(|id| catalog.get(id))
                .cloned()
        })
    });
    let cancel =
        Callback::new(move |()| runtime.dispatch_action(ComposerAction::CancelConnection));

    move || {
        pending.get().map(|platform| {
            let title = format!("Connect to {}", platform.name);
            view! {
                <Modal title=title on_close=cancel layout_class="connect-dialog">
                    <div class="connect-dialog-icon">
                        <PlatformIcon identifier=platform.identifier() size_px=DIALOG_ICON_PX />
                    </div>
                    <p class="connect-dialog-copy">
                        {format!(
                            "You'll be redirected to {} to authorize access to your account.",
                            platform.name
                        )}
                    </p>
                    <div class="connect-dialog-actions">
                        <Button on_click=Callback::new(move |_| cancel.call(()))>"Cancel"</Button>
                        <Button
                            variant=ButtonVariant::Primary
                            on_click=Callback::new(move |_| {
                                runtime.dispatch_action(ComposerAction::ConfirmConnection);
                            })
                        >
                            "Connect"
                        </Button>
                    </div>
                </Modal>
            }
        })
    }
}
