use crate::{Modal, ModalTitle};
use gloo::console;
use yew::prelude::*;

fn open_with(state: &UseStateHandle<bool>) -> Callback<MouseEvent> {
    let state = state.clone();
    Callback::from(move |_| state.set(true))
}

fn close_with(state: &UseStateHandle<bool>, name: &'static str) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        console::log!("modal close requested", name);
        state.set(false);
    })
}

#[function_component(DemoApp)]
fn demo_app() -> Html {
    let info_open = use_state(|| false);
    let custom_open = use_state(|| false);

    let custom_title = html! {
        <h2 class="demo__title">{ "Custom header" }</h2>
    };

    html! {
        <main class="demo">
            <button type="button" onclick={open_with(&info_open)}>{ "Open text title" }</button>
            <button type="button" onclick={open_with(&custom_open)}>{ "Open node title" }</button>
            <Modal
                is_open={*info_open}
                on_close={close_with(&info_open, "info")}
                title={ModalTitle::from("Info")}
            >
                <p>{ "Hello" }</p>
            </Modal>
            <Modal
                is_open={*custom_open}
                on_close={close_with(&custom_open, "custom")}
                title={ModalTitle::from(custom_title)}
            >
                { "Body" }
            </Modal>
        </main>
    }
}

/// Mounts the demo page on `#root`, or on `<body>` when the element is missing.
pub fn run_demo() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<DemoApp>::with_root(root).render();
    } else {
        yew::Renderer::<DemoApp>::new().render();
    }
}
