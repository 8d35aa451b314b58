//! Wires the navigation controller to page events

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use sitenav_core::{EventResponse, NavConfig, NavController, NavError, NavEvent, NavSurface};
use tracing::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, KeyboardEvent};

use crate::listener::Listener;
use crate::surface::DomSurface;

type SharedController = Rc<RefCell<NavController<DomSurface>>>;

thread_local! {
    static MOUNTED: Cell<bool> = const { Cell::new(false) };
}

/// Mounted controller. Dropping the handle detaches every listener and
/// cancels a pending resize check.
pub struct NavHandle {
    controller: SharedController,
    listeners: Vec<Listener>,
}

impl NavHandle {
    /// Keep the controller alive for the rest of the page's lifetime
    pub fn forget(self) {
        std::mem::forget(self);
    }

    pub fn is_open(&self) -> bool {
        self.controller.borrow().is_open()
    }

    pub fn open(&self) {
        self.controller.borrow().open();
    }

    /// Number of DOM listeners attached
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Drop for NavHandle {
    fn drop(&mut self) {
        if let Ok(mut controller) = self.controller.try_borrow_mut() {
            controller.cancel_pending_resize();
        }
        debug!(listeners = self.listeners.len(), "Navigation controller unmounted");
    }
}

/// Mount with the default page contract
pub fn mount() -> Result<NavHandle, NavError> {
    mount_with_config(NavConfig::default())
}

/// Mount with the default contract for the rest of the page's lifetime.
///
/// Only the first call attaches listeners; later calls return `Ok(false)`.
/// Every entry point goes through here so the icon never gets two click
/// listeners that cancel each other out.
pub fn mount_once() -> Result<bool, NavError> {
    if MOUNTED.with(Cell::get) {
        debug!("Navigation controller already mounted");
        return Ok(false);
    }
    mount()?.forget();
    MOUNTED.with(|mounted| mounted.set(true));
    Ok(true)
}

/// Resolve the navigation elements and attach all listeners
pub fn mount_with_config(config: NavConfig) -> Result<NavHandle, NavError> {
    let window = web_sys::window().ok_or(NavError::WindowUnavailable)?;
    let document = window.document().ok_or(NavError::DocumentUnavailable)?;

    let controller: SharedController = Rc::new_cyclic(|weak: &Weak<RefCell<NavController<DomSurface>>>| {
        let weak = weak.clone();
        let settle = Closure::wrap(Box::new(move || {
            if let Some(controller) = weak.upgrade() {
                dispatch(&controller, NavEvent::ResizeSettled);
            }
        }) as Box<dyn FnMut()>);

        let surface = DomSurface::new(window.clone(), document.clone(), settle);
        RefCell::new(NavController::new(surface, config))
    });

    controller.borrow().initialize();

    let (elements, anchors, links) = {
        let controller = controller.borrow();
        let surface = controller.surface();
        let anchors = surface.query_all(&controller.config().selectors.nav_anchors);
        let links: Vec<_> = controller
            .config()
            .links
            .iter()
            .filter_map(|binding| Some((surface.lookup(&binding.query)?, binding.link)))
            .collect();
        (controller.elements().clone(), anchors, links)
    };

    let mut listeners = Vec::new();

    if let Some(icon) = &elements.menu_icon {
        listeners.push(listen(&controller, icon, "click", |_| {
            Some(NavEvent::MenuIconClick)
        })?);
    }

    for anchor in &anchors {
        listeners.push(listen(&controller, anchor, "click", |_| {
            Some(NavEvent::NavAnchorClick)
        })?);
    }

    listeners.push(listen(&controller, &document, "click", |event| {
        Some(NavEvent::DocumentClick {
            target: target_element(event),
        })
    })?);

    listeners.push(listen(&controller, &window, "keydown", |event| {
        event
            .dyn_ref::<KeyboardEvent>()
            .map(|key| NavEvent::key_down(key.key()))
    })?);

    listeners.push(listen(&controller, &window, "resize", |_| {
        Some(NavEvent::Resize)
    })?);

    for (element, link) in &links {
        let link = *link;
        listeners.push(listen(&controller, element, "click", move |_| {
            Some(NavEvent::ExternalLinkClick(link))
        })?);
    }

    listeners.push(listen(&controller, &document, "focusin", |event| {
        Some(NavEvent::FocusIn {
            target: target_element(event),
        })
    })?);

    info!(
        menu = elements.menu_icon.is_some() && elements.nav_links.is_some(),
        anchors = anchors.len(),
        links = links.len(),
        "Navigation controller mounted"
    );

    Ok(NavHandle {
        controller,
        listeners,
    })
}

/// Attach a listener translating DOM events into controller events
fn listen<F>(
    controller: &SharedController,
    target: &EventTarget,
    event: &'static str,
    translate: F,
) -> Result<Listener, NavError>
where
    F: Fn(&Event) -> Option<NavEvent<Element>> + 'static,
{
    let controller = Rc::downgrade(controller);
    let callback = Closure::wrap(Box::new(move |dom_event: Event| {
        let Some(nav_event) = translate(&dom_event) else {
            return;
        };
        let Some(controller) = controller.upgrade() else {
            return;
        };
        let response = dispatch(&controller, nav_event);
        apply(&dom_event, response);
    }) as Box<dyn FnMut(_)>);

    Listener::attach(target, event, callback)
}

fn dispatch(
    controller: &RefCell<NavController<DomSurface>>,
    event: NavEvent<Element>,
) -> EventResponse {
    match controller.try_borrow_mut() {
        Ok(mut controller) => controller.handle(event),
        Err(_) => {
            warn!(event = event.name(), "Navigation event dropped during dispatch");
            EventResponse::PASS
        }
    }
}

fn apply(event: &Event, response: EventResponse) {
    if response.stop_propagation {
        event.stop_propagation();
    }
    if response.prevent_default {
        event.prevent_default();
    }
}

/// Event target as an element. Shadow DOM retargets it to the host, which
/// keeps the containment check valid.
fn target_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}
