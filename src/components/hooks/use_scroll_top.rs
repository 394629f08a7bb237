use leptos::prelude::*;

/// Hook tracking the vertical scroll offset of a scrollable element.
///
/// Returns `(on_scroll_handler, scroll_top_signal)`. Attach the handler to the
/// element's `on:scroll`; the signal holds its `scrollTop` in pixels and starts
/// at 0.
pub fn use_scroll_top() -> (impl Fn(web_sys::Event) + Clone, RwSignal<i32>) {
    let scroll_top_signal = RwSignal::new(0);

    let on_scroll = move |ev: web_sys::Event| {
        let target = event_target::<web_sys::HtmlElement>(&ev);
        scroll_top_signal.set(target.scroll_top());
    };

    (on_scroll, scroll_top_signal)
}
