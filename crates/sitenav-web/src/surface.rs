//! `NavSurface` over the live DOM

use std::time::Duration;

use sitenav_core::{ElementQuery, NavError, NavSurface};
use tracing::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Window};

/// Best-effort message out of a thrown JS value
pub(crate) fn js_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Browser page driven through `web-sys`
pub struct DomSurface {
    window: Window,
    document: Document,

    /// Runs when the resize settle timer fires
    settle: Closure<dyn FnMut()>,
}

impl DomSurface {
    pub fn new(window: Window, document: Document, settle: Closure<dyn FnMut()>) -> Self {
        Self {
            window,
            document,
            settle,
        }
    }

    /// Every element matching `selector`, in document order
    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        let nodes = match self.document.query_selector_all(selector) {
            Ok(nodes) => nodes,
            Err(e) => {
                warn!(selector, "Invalid selector: {}", js_message(&e));
                return Vec::new();
            }
        };

        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }
}

impl NavSurface for DomSurface {
    type Element = Element;
    type Timer = i32;

    fn lookup(&self, query: &ElementQuery) -> Option<Element> {
        match query {
            ElementQuery::Id(id) => self.document.get_element_by_id(id),
            ElementQuery::Selector(selector) => match self.document.query_selector(selector) {
                Ok(element) => element,
                Err(e) => {
                    warn!(selector = selector.as_str(), "Invalid selector: {}", js_message(&e));
                    None
                }
            },
        }
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .or_else(|| {
                self.document
                    .document_element()
                    .map(|root| f64::from(root.client_width()))
            })
            .unwrap_or(0.0)
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn add_class(&self, element: &Element, class: &str) {
        if let Err(e) = element.class_list().add_1(class) {
            debug!(class, "classList.add failed: {}", js_message(&e));
        }
    }

    fn remove_class(&self, element: &Element, class: &str) {
        if let Err(e) = element.class_list().remove_1(class) {
            debug!(class, "classList.remove failed: {}", js_message(&e));
        }
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) {
        if let Err(e) = element.set_attribute(name, value) {
            debug!(name, "setAttribute failed: {}", js_message(&e));
        }
    }

    fn contains(&self, ancestor: &Element, target: &Element) -> bool {
        ancestor.contains(Some(target.as_ref()))
    }

    fn open_external(&self, url: &str, target: &str, features: &str) -> Result<(), NavError> {
        // With `noopener` the returned handle is always null
        self.window
            .open_with_url_and_target_and_features(url, target, features)
            .map(|_| ())
            .map_err(|e| NavError::OpenWindow {
                url: url.to_string(),
                message: js_message(&e),
            })
    }

    fn schedule_settle(&self, delay: Duration) -> Result<i32, NavError> {
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                self.settle.as_ref().unchecked_ref(),
                millis,
            )
            .map_err(|e| NavError::Timer {
                message: js_message(&e),
            })
    }

    fn cancel_settle(&self, timer: i32) {
        self.window.clear_timeout_with_handle(timer);
    }
}
