use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Modal frame container (overlay + positioned surface).
///
/// Renders no header or buttons: every dialog lays out its own
/// `dialog__title` / `dialog__content` / `dialog__actions` blocks.
#[component]
pub fn ModalFrame(
    /// Called when the overlay is clicked; without it the overlay is inert.
    #[prop(optional)]
    on_close: Option<Callback<()>>,
    /// Extra class for the modal surface (`div.modal`).
    #[prop(optional, into)]
    modal_class: Option<String>,
    /// Width of the modal surface, any CSS length (default: `600px`).
    #[prop(optional, into)]
    width: Option<String>,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Close only if both press and release happened on the overlay itself,
    // so selecting text inside the dialog and releasing outside keeps it open.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if let (true, Some(on_close)) = (should_close, on_close) {
            // Defer close to next tick: the overlay must not be removed during its own click dispatch.
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let modal_class = match modal_class {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };
    let modal_style = format!(
        "position: relative; width: {}; overflow-y: visible;",
        width.unwrap_or_else(|| "600px".to_string())
    );

    view! {
        <div
            class="modal-overlay"
            style="z-index: 1000;"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class=modal_class style=modal_style on:click=stop_propagation>
                {children()}
            </div>
        </div>
    }
}
