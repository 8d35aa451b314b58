//! Owned DOM event listeners

use sitenav_core::NavError;
use tracing::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

use crate::surface::js_message;

/// An attached listener. Dropping it detaches the callback.
pub(crate) struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub(crate) fn attach(
        target: &EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<Self, NavError> {
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| NavError::Listener {
                event,
                message: js_message(&e),
            })?;

        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(e) = self.target.remove_event_listener_with_callback(
            self.event,
            self.callback.as_ref().unchecked_ref(),
        ) {
            debug!(event = self.event, "removeEventListener failed: {}", js_message(&e));
        }
    }
}
