//! Browser entry for the pin preview synchronizer.
//!
//! The host page is server-rendered; this module attaches to its markup
//! once the document is ready and keeps each preview image in sync with
//! its paired dropdown. Pages without an embedded catalog are left alone.

pub mod listener;
pub mod sync;

use std::cell::RefCell;

use sync::PreviewSync;
use wasm_bindgen::prelude::*;
use web_sys::Document;

thread_local! {
    // Holds the active synchronizer (and with it the change listeners) for
    // the lifetime of the page. There is no teardown path.
    static ACTIVE: RefCell<Option<PreviewSync>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = tracing_wasm::try_set_as_global_default();

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };

    if document.ready_state() == "loading" {
        // Fires exactly once per page; the page lifetime owns the closure.
        let deferred = document.clone();
        let on_ready: Closure<dyn FnMut(JsValue)> =
            Closure::wrap(Box::new(move |_| activate(&deferred)));
        let _ = document.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.as_ref().unchecked_ref(),
        );
        on_ready.forget();
    } else {
        activate(&document);
    }
}

fn activate(document: &Document) {
    if let Some(sync) = PreviewSync::initialize(document) {
        ACTIVE.with(|slot| *slot.borrow_mut() = Some(sync));
    }
}
