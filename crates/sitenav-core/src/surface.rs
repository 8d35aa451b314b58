//! Page abstraction driven by the controller
//!
//! The controller never touches a DOM directly. Everything it needs from
//! the page goes through [`NavSurface`], which `sitenav-web` implements over
//! `web-sys` and the tests implement in memory.

use std::time::Duration;

use crate::error::NavError;

/// How an element is located on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementQuery {
    /// `document.getElementById`
    Id(String),
    /// `document.querySelector` (first match)
    Selector(String),
}

impl ElementQuery {
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    pub fn selector(selector: impl Into<String>) -> Self {
        Self::Selector(selector.into())
    }
}

/// Page operations used by [`NavController`](crate::NavController)
///
/// Mutating methods are infallible from the controller's point of view.
/// Implementations log and drop any failure raised underneath.
pub trait NavSurface {
    /// Handle to a page element
    type Element: Clone + PartialEq + std::fmt::Debug;

    /// Handle to a pending settle timer
    type Timer;

    fn lookup(&self, query: &ElementQuery) -> Option<Self::Element>;

    fn body(&self) -> Option<Self::Element>;

    /// Current layout width of the viewport
    fn viewport_width(&self) -> f64;

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    fn add_class(&self, element: &Self::Element, class: &str);

    fn remove_class(&self, element: &Self::Element, class: &str);

    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str);

    /// Whether `target` is `ancestor` or one of its descendants
    fn contains(&self, ancestor: &Self::Element, target: &Self::Element) -> bool;

    /// Open `url` in a new browsing context
    fn open_external(&self, url: &str, target: &str, features: &str) -> Result<(), NavError>;

    /// Arm the settle timer. When it fires, the owner dispatches
    /// [`NavEvent::ResizeSettled`](crate::NavEvent::ResizeSettled).
    fn schedule_settle(&self, delay: Duration) -> Result<Self::Timer, NavError>;

    fn cancel_settle(&self, timer: Self::Timer);
}
