//! Controller configuration
//!
//! The defaults are the page contract. They are fixed at build time and
//! never read from the page.

use std::time::Duration;

use crate::links::ExternalLink;
use crate::surface::ElementQuery;

/// Widths at or below this are treated as mobile
pub const MOBILE_BREAKPOINT_PX: f64 = 720.0;

/// Quiet period after the last resize event before the viewport is rechecked
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(120);

/// Where the controller finds its elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSelectors {
    /// Hamburger icon
    pub menu_icon: ElementQuery,

    /// Overlay container
    pub nav_links: ElementQuery,

    /// Anchors inside the overlay (`querySelectorAll`)
    pub nav_anchors: String,
}

impl Default for NavSelectors {
    fn default() -> Self {
        Self {
            menu_icon: ElementQuery::id("menu-icon"),
            nav_links: ElementQuery::selector(".nav-links"),
            nav_anchors: ".nav-links a".to_string(),
        }
    }
}

/// CSS classes toggled by open/close
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuClasses {
    /// On the container while open
    pub active: String,

    /// On `<body>` while open
    pub body_open: String,

    /// Icon glyph while closed
    pub icon_closed: String,

    /// Icon glyph while open
    pub icon_open: String,
}

impl Default for MenuClasses {
    fn default() -> Self {
        Self {
            active: "active".to_string(),
            body_open: "menu-open".to_string(),
            icon_closed: "fa-bars".to_string(),
            icon_open: "fa-xmark".to_string(),
        }
    }
}

/// An element that opens an [`ExternalLink`] when clicked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkBinding {
    pub query: ElementQuery,
    pub link: ExternalLink,
}

impl LinkBinding {
    pub fn new(query: ElementQuery, link: ExternalLink) -> Self {
        Self { query, link }
    }
}

/// Configuration for the navigation controller
#[derive(Debug, Clone)]
pub struct NavConfig {
    /// Mobile breakpoint in CSS pixels
    pub breakpoint_px: f64,

    /// Resize settle delay
    pub resize_debounce: Duration,

    pub selectors: NavSelectors,

    pub classes: MenuClasses,

    /// Accessible name of the menu icon
    pub aria_label: String,

    /// `window.open` target for external links
    pub open_target: String,

    /// `window.open` features for external links
    pub open_features: String,

    pub links: Vec<LinkBinding>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: MOBILE_BREAKPOINT_PX,
            resize_debounce: RESIZE_DEBOUNCE,
            selectors: NavSelectors::default(),
            classes: MenuClasses::default(),
            aria_label: "Toggle navigation menu".to_string(),
            open_target: "_blank".to_string(),
            open_features: "noopener,noreferrer".to_string(),
            links: vec![
                LinkBinding::new(ElementQuery::id("link-git"), ExternalLink::GitHub),
                LinkBinding::new(ElementQuery::id("link-linkedin"), ExternalLink::LinkedIn),
                LinkBinding::new(ElementQuery::selector(".visit-btn"), ExternalLink::Visit),
            ],
        }
    }
}
