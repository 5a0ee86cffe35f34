//! Overlay modal dialog.
//!
//! # Design
//! - The open flag is owned by the caller; the component keeps no state.
//! - The root is always rendered, `--opened` toggles visibility through CSS.
//! - The header exists only for a non-blank title.

use crate::class_names::{self, root_classes};
use crate::diagnostics;
use crate::title::ModalTitle;
use yew::prelude::*;

/// Props for [`Modal`].
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    /// Body content, rendered verbatim.
    pub children: Children,
    /// Optional header title.
    #[prop_or_default]
    pub title: Option<ModalTitle>,
    /// Whether the modal is shown.
    pub is_open: bool,
    /// Invoked once per activation of the close control.
    pub on_close: Callback<()>,
    /// Extra classes appended to the root element.
    #[prop_or_default]
    pub class: Classes,
}

/// Modal dialog with an overlay, a close control, an optional header and a body.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    diagnostics::report(&diagnostics::check(props));

    let on_close = close_trigger::<MouseEvent>(&props.on_close);
    let header = props
        .title
        .as_ref()
        .filter(|title| !title.is_blank())
        .map(|title| {
            html! {
                <div class={class_names::HEADER}>{ title.to_header() }</div>
            }
        })
        .unwrap_or_default();

    html! {
        <div
            class={root_classes(props.is_open, &props.class)}
            role="dialog"
            aria-modal="true"
            aria-hidden={if props.is_open { "false" } else { "true" }}
        >
            <div class={class_names::OVERLAY}></div>
            <div class={class_names::WRAPPER}>
                <button class={class_names::CLOSE} type="button" aria-label="Close" onclick={on_close}>
                    { "X" }
                </button>
                { header }
                <div class={class_names::BODY}>
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}

/// Adapts the caller's close callback to any event, dropping the event payload.
pub(crate) fn close_trigger<E: 'static>(on_close: &Callback<()>) -> Callback<E> {
    on_close.reform(|_| ())
}
