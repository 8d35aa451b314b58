//! Page events understood by the controller

use crate::links::ExternalLink;

/// Events dispatched to [`NavController::handle`](crate::NavController::handle)
///
/// `E` is the surface's element handle.
#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent<E> {
    /// Click on the hamburger icon
    MenuIconClick,
    /// Click on an anchor inside the overlay
    NavAnchorClick,
    /// Click that bubbled to the document. `None` when the event target is
    /// not an element.
    DocumentClick { target: Option<E> },
    /// Window keydown, carrying `KeyboardEvent.key`
    KeyDown { key: String },
    /// Window resize
    Resize,
    /// The debounced resize check fired
    ResizeSettled,
    /// Click on one of the outbound link buttons
    ExternalLinkClick(ExternalLink),
    /// Focus moved to `target`
    FocusIn { target: Option<E> },
}

impl<E> NavEvent<E> {
    pub fn key_down(key: impl Into<String>) -> Self {
        Self::KeyDown { key: key.into() }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::MenuIconClick => "menu_icon_click",
            Self::NavAnchorClick => "nav_anchor_click",
            Self::DocumentClick { .. } => "document_click",
            Self::KeyDown { .. } => "keydown",
            Self::Resize => "resize",
            Self::ResizeSettled => "resize_settled",
            Self::ExternalLinkClick(_) => "external_link_click",
            Self::FocusIn { .. } => "focusin",
        }
    }
}

/// `"Esc"` is the pre-standard spelling still sent by old Edge/IE
pub fn is_escape(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// What the DOM layer should do with the native event after dispatch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventResponse {
    pub stop_propagation: bool,
    pub prevent_default: bool,
}

impl EventResponse {
    /// Let the event continue untouched
    pub const PASS: Self = Self {
        stop_propagation: false,
        prevent_default: false,
    };

    pub const STOP_PROPAGATION: Self = Self {
        stop_propagation: true,
        prevent_default: false,
    };

    pub const PREVENT_DEFAULT: Self = Self {
        stop_propagation: false,
        prevent_default: true,
    };

    pub fn merge(self, other: Self) -> Self {
        Self {
            stop_propagation: self.stop_propagation || other.stop_propagation,
            prevent_default: self.prevent_default || other.prevent_default,
        }
    }
}
