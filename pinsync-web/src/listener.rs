//! RAII event listeners for browser interop.
//!
//! A `Closure` backing a JavaScript event listener has to outlive the
//! listener. `Closure::forget()` does that by leaking and leaves no handle
//! to detach with; storing the closure in a struct that removes the listener
//! on `Drop` ties the listener's lifetime to Rust ownership instead.

use wasm_bindgen::prelude::*;
use web_sys::EventTarget;

/// An event listener on a DOM target that removes itself when dropped.
pub struct ElementEventListener {
    target: EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl ElementEventListener {
    /// Attaches an event listener to the target.
    ///
    /// The listener stays attached until this struct is dropped.
    pub fn new(
        target: EventTarget,
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(callback));

        target
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();

        Self {
            target,
            event_name,
            callback,
        }
    }
}

impl Drop for ElementEventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
