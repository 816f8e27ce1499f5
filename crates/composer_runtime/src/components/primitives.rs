//! Small styled-by-token controls shared by the composer views.
//!
//! Every primitive carries `data-ui-primitive` and `data-ui-kind` so the stylesheet can target
//! them without per-view class names.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Visual weight of a [`Button`].
pub enum ButtonVariant {
    /// Filled call-to-action.
    Primary,
    /// Outlined default.
    #[default]
    Standard,
    /// Borderless, used inside tiles and dialogs.
    Quiet,
}

impl ButtonVariant {
    /// Returns the `data-ui-variant` token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Standard => "standard",
            Self::Quiet => "quiet",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[component]
/// Shared button primitive.
pub fn Button(
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] submit: bool,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let button_type = if submit { "submit" } else { "button" };
    view! {
        <button
            type=button_type
            class=merge_layout_class("ui-button", layout_class)
            aria-label=move || aria_label.get()
            title=move || title.get()
            disabled=move || disabled.get()
            aria-pressed=move || bool_token(selected.get())
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-selected=move || bool_token(selected.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Single-line text input.
pub fn TextField(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<String>>,
) -> impl IntoView {
    view! {
        <input
            class=merge_layout_class("ui-field", layout_class)
            id=id
            placeholder=placeholder
            aria-label=aria_label
            type=input_type.unwrap_or("text")
            autocomplete=autocomplete.unwrap_or("off")
            prop:value=move || value.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="text-field"
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(event_target_value(&ev));
                }
            }
        />
    }
}

#[component]
/// Multi-line text input.
pub fn TextArea(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(default = 4)] rows: u32,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
) -> impl IntoView {
    view! {
        <textarea
            class=merge_layout_class("ui-textarea", layout_class)
            id=id
            placeholder=placeholder
            aria-label=aria_label
            rows=rows
            spellcheck="true"
            lang="en"
            prop:value=move || value.get()
            data-ui-primitive="true"
            data-ui-kind="text-area"
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(event_target_value(&ev));
                }
            }
        />
    }
}

#[component]
/// Dialog overlay. Closes on `Escape` and on clicks outside the panel.
pub fn Modal(
    #[prop(into)] title: MaybeSignal<String>,
    on_close: Callback<()>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let panel_ref = create_node_ref::<html::Div>();
    let aria_title = title.clone();

    create_effect(move |_| {
        if let Some(panel) = panel_ref.get() {
            let _ = panel.focus();
        }
    });

    view! {
        <div
            class="ui-modal-backdrop"
            data-ui-primitive="true"
            data-ui-kind="modal-backdrop"
            on:click=move |ev: MouseEvent| {
                if ev.target() == ev.current_target() {
                    on_close.call(());
                }
            }
        >
            <div
                class=merge_layout_class("ui-modal", layout_class)
                role="dialog"
                aria-modal="true"
                aria-label=move || aria_title.get()
                tabindex="-1"
                node_ref=panel_ref
                data-ui-primitive="true"
                data-ui-kind="modal"
                on:keydown=move |ev: KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        on_close.call(());
                    }
                }
            >
                <header class="ui-modal-header">
                    <h2 class="ui-modal-title">{move || title.get()}</h2>
                    <button
                        type="button"
                        class="ui-modal-close"
                        aria-label="Close"
                        on:click=move |_| on_close.call(())
                    >
                        "×"
                    </button>
                </header>
                <div class="ui-modal-body">{children()}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_class_is_appended_when_present() {
        assert_eq!(merge_layout_class("ui-button", None), "ui-button");
        assert_eq!(merge_layout_class("ui-button", Some("")), "ui-button");
        assert_eq!(
            merge_layout_class("ui-button", Some("tile")),
            "ui-button tile"
        );
    }

    #[test]
    fn variant_tokens_are_stable() {
        assert_eq!(ButtonVariant::default().token(), "standard");
        assert_eq!(ButtonVariant::Primary.token(), "primary");
        assert_eq!(bool_token(true), "true");
    }
}
