//! Small helpers for touching the page outside the Leptos tree. All of them are
//! no-ops when the element they need is missing.

fn body() -> Option<web_sys::HtmlElement> {
    web_sys::window()?.document()?.body()
}

/// Lock page scrolling while a modal is open.
pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = body() else {
        return;
    };
    let value = if locked { "hidden" } else { "" };
    body.style().set_property("overflow", value).ok();
}

/// Swap `remove` for `add` on the `<body>` class list.
pub fn swap_body_class(add: &str, remove: &str) {
    let Some(body) = body() else {
        return;
    };
    let classes = body.class_list();
    classes.remove_1(remove).ok();
    classes.add_1(add).ok();
}

pub fn blur_active_element() {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(el) = document
        .active_element()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        el.blur().ok();
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
