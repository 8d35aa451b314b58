//! sitenav-core - Responsive navigation menu controller
//!
//! This crate holds the menu state machine without any browser dependency:
//! viewport classification, the resize debouncer, external link table and
//! the [`NavController`] that drives a page through the [`NavSurface`] seam.
//!
//! Used by:
//! - sitenav-web (web-sys binding, WASM entry point)

pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod event;
pub mod links;
pub mod surface;
pub mod viewport;

pub use config::{
    LinkBinding, MenuClasses, NavConfig, NavSelectors, MOBILE_BREAKPOINT_PX, RESIZE_DEBOUNCE,
};
pub use controller::{NavController, NavElements};
pub use debounce::ResizeDebounce;
pub use error::NavError;
pub use event::{EventResponse, NavEvent};
pub use links::ExternalLink;
pub use surface::{ElementQuery, NavSurface};
pub use viewport::Viewport;
