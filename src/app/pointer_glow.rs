use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::JsCast;

/// Mirrors the pointer's viewport coordinates into the `--mouse-x` and
/// `--mouse-y` custom properties on the document element. Decorative
/// gradient rules in the stylesheet read them back; nothing else does.
///
/// The listener lives for the owning component's reactive scope and is
/// removed on unmount. No smoothing, no throttling.
pub fn use_pointer_glow() {
    let _ = use_event_listener(use_window(), ev::pointermove, |ev: web_sys::PointerEvent| {
        let Some(root) = document().document_element() else {
            return;
        };
        let Some(root) = root.dyn_ref::<web_sys::HtmlElement>() else {
            return;
        };
        let style = root.style();
        let _ = style.set_property("--mouse-x", &format!("{}px", ev.client_x()));
        let _ = style.set_property("--mouse-y", &format!("{}px", ev.client_y()));
    });
}
