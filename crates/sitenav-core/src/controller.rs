//! Navigation controller
//!
//! Keeps the overlay's visibility, the icon glyph and the ARIA attributes
//! in agreement, and routes the outbound link buttons.
//!
//! Every operation first checks that the elements it needs were found on
//! the page. A missing element silently disables the features that depend
//! on it.

use tracing::{debug, trace, warn};

use crate::config::NavConfig;
use crate::debounce::ResizeDebounce;
use crate::event::{is_escape, EventResponse, NavEvent};
use crate::links::ExternalLink;
use crate::surface::NavSurface;
use crate::viewport::Viewport;

/// Elements resolved once at construction
#[derive(Debug, Clone)]
pub struct NavElements<E> {
    pub menu_icon: Option<E>,
    pub nav_links: Option<E>,
    pub body: Option<E>,
}

impl<E> NavElements<E> {
    /// Icon and container, when both exist
    fn menu(&self) -> Option<(&E, &E)> {
        Some((self.menu_icon.as_ref()?, self.nav_links.as_ref()?))
    }
}

/// Responsive navigation menu controller
pub struct NavController<S: NavSurface> {
    surface: S,
    config: NavConfig,
    elements: NavElements<S::Element>,
    resize: ResizeDebounce<S::Timer>,
}

impl<S: NavSurface> NavController<S> {
    /// Resolve the page elements. Call [`initialize`](Self::initialize)
    /// before dispatching events.
    pub fn new(surface: S, config: NavConfig) -> Self {
        let elements = NavElements {
            menu_icon: surface.lookup(&config.selectors.menu_icon),
            nav_links: surface.lookup(&config.selectors.nav_links),
            body: surface.body(),
        };

        debug!(
            menu_icon = elements.menu_icon.is_some(),
            nav_links = elements.nav_links.is_some(),
            body = elements.body.is_some(),
            "Navigation elements resolved"
        );

        Self {
            surface,
            config,
            elements,
            resize: ResizeDebounce::new(),
        }
    }

    /// Set the initial ARIA state on whichever elements exist
    pub fn initialize(&self) {
        if let Some(icon) = &self.elements.menu_icon {
            self.surface.set_attribute(icon, "role", "button");
            self.surface
                .set_attribute(icon, "aria-label", &self.config.aria_label);
            self.surface.set_attribute(icon, "aria-expanded", "false");
        }
        if let Some(nav) = &self.elements.nav_links {
            self.surface.set_attribute(nav, "aria-hidden", "true");
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn elements(&self) -> &NavElements<S::Element> {
        &self.elements
    }

    /// Classify the viewport as it is right now
    pub fn viewport(&self) -> Viewport {
        Viewport::classify(self.surface.viewport_width(), self.config.breakpoint_px)
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport().is_mobile()
    }

    /// Whether the overlay container carries the active class
    pub fn is_open(&self) -> bool {
        self.elements
            .nav_links
            .as_ref()
            .is_some_and(|nav| self.surface.has_class(nav, &self.config.classes.active))
    }

    /// Whether a resize settle check is waiting to fire
    pub fn resize_pending(&self) -> bool {
        self.resize.is_pending()
    }

    pub fn open(&self) {
        let Some((icon, nav)) = self.elements.menu() else {
            return;
        };
        let classes = &self.config.classes;

        self.surface.add_class(nav, &classes.active);
        if let Some(body) = &self.elements.body {
            self.surface.add_class(body, &classes.body_open);
        }

        self.surface.remove_class(icon, &classes.icon_closed);
        self.surface.add_class(icon, &classes.icon_open);

        self.surface.set_attribute(icon, "aria-expanded", "true");
        self.surface.set_attribute(nav, "aria-hidden", "false");

        debug!("Navigation menu opened");
    }

    pub fn close(&self) {
        let Some((icon, nav)) = self.elements.menu() else {
            return;
        };
        let classes = &self.config.classes;

        self.surface.remove_class(nav, &classes.active);
        if let Some(body) = &self.elements.body {
            self.surface.remove_class(body, &classes.body_open);
        }

        self.surface.remove_class(icon, &classes.icon_open);
        self.surface.add_class(icon, &classes.icon_closed);

        self.surface.set_attribute(icon, "aria-expanded", "false");
        self.surface.set_attribute(nav, "aria-hidden", "true");

        debug!("Navigation menu closed");
    }

    /// Open or close the overlay. Only acts on mobile viewports.
    pub fn toggle(&self) {
        if self.elements.menu().is_none() {
            return;
        }
        if !self.is_mobile() {
            trace!("Toggle ignored on desktop viewport");
            return;
        }
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Dispatch one page event
    pub fn handle(&mut self, event: NavEvent<S::Element>) -> EventResponse {
        trace!(event = event.name(), "Dispatching navigation event");

        match event {
            NavEvent::MenuIconClick => {
                // The same click must not reach the outside-click handler
                self.toggle();
                EventResponse::STOP_PROPAGATION
            }
            NavEvent::NavAnchorClick => {
                if self.is_mobile() {
                    self.close();
                }
                EventResponse::PASS
            }
            NavEvent::DocumentClick { target } => {
                if self.is_mobile() && self.is_open() && !self.is_inside_nav(target.as_ref()) {
                    self.close();
                }
                EventResponse::PASS
            }
            NavEvent::KeyDown { key } => {
                if is_escape(&key) && self.is_open() {
                    self.close();
                }
                EventResponse::PASS
            }
            NavEvent::Resize => {
                self.schedule_resize_check();
                EventResponse::PASS
            }
            NavEvent::ResizeSettled => {
                self.resize.fire();
                if !self.is_mobile() {
                    self.close();
                }
                EventResponse::PASS
            }
            NavEvent::ExternalLinkClick(link) => {
                self.open_link(link);
                EventResponse::PREVENT_DEFAULT
            }
            NavEvent::FocusIn { target } => {
                self.observe_focus(target.as_ref());
                EventResponse::PASS
            }
        }
    }

    /// Cancel the pending settle timer, e.g. when unmounting
    pub fn cancel_pending_resize(&mut self) {
        let surface = &self.surface;
        self.resize.cancel(|timer| surface.cancel_settle(timer));
    }

    fn schedule_resize_check(&mut self) {
        let surface = &self.surface;
        let delay = self.config.resize_debounce;
        if let Err(e) = self
            .resize
            .rearm(|timer| surface.cancel_settle(timer), || surface.schedule_settle(delay))
        {
            warn!("Resize check not scheduled: {}", e);
        }
    }

    fn open_link(&self, link: ExternalLink) {
        debug!(%link, url = link.url(), "Opening external link");
        if let Err(e) = self.surface.open_external(
            link.url(),
            &self.config.open_target,
            &self.config.open_features,
        ) {
            warn!("{}", e);
        }
    }

    /// Focus leaving the overlay is observed but never closes it, so
    /// keyboard users can tab into header controls with the menu open.
    fn observe_focus(&self, target: Option<&S::Element>) {
        if !self.is_mobile() || !self.is_open() {
            return;
        }
        if !self.is_inside_nav(target) {
            trace!("Focus moved outside the open navigation menu");
        }
    }

    /// Containment check against the overlay and the icon
    fn is_inside_nav(&self, target: Option<&S::Element>) -> bool {
        let Some(target) = target else {
            return false;
        };
        [&self.elements.nav_links, &self.elements.menu_icon]
            .into_iter()
            .flatten()
            .any(|ancestor| self.surface.contains(ancestor, target))
    }
}
