//! Link activation and navigation directives.
//!
//! # Responsibilities
//! - Turn a plain primary click on a router link into `navigate()`
//! - Leave modifier-clicks and non-primary buttons to the platform (new tab, context menu)
//! - Provide a directive that navigates as soon as it is applied

use crate::navigation::controller::NavigationController;
use crate::navigation::event::NavigationEvent;
use crate::navigation::history::History;

/// Pointer button that activated a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    #[default]
    Primary,
    /// Usually the middle button.
    Auxiliary,
    Secondary,
    Other(u16),
}

/// Keyboard modifiers held during activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.ctrl || self.meta || self.shift || self.alt
    }
}

/// A single activation of a link (click, tap, Enter key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Activation {
    pub button: MouseButton,
    pub modifiers: Modifiers,
}

impl Activation {
    /// Plain primary activation with no modifiers.
    pub fn primary() -> Self {
        Self::default()
    }

    pub fn with_button(button: MouseButton) -> Self {
        Self {
            button,
            ..Self::default()
        }
    }

    pub fn with_modifiers(modifiers: Modifiers) -> Self {
        Self {
            modifiers,
            ..Self::default()
        }
    }

    /// True if the router should take over this activation.
    pub fn is_interceptable(&self) -> bool {
        self.button == MouseButton::Primary && !self.modifiers.any()
    }
}

/// What the host should do with the platform's default link behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkDisposition {
    /// Default suppressed; the router navigated.
    Intercepted(NavigationEvent),
    /// Let the platform follow the link itself.
    PlatformDefault,
}

impl LinkDisposition {
    pub fn prevents_default(&self) -> bool {
        matches!(self, LinkDisposition::Intercepted(_))
    }
}

/// A link bound to the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterLink {
    target: String,
    replace: bool,
}

impl RouterLink {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            replace: false,
        }
    }

    /// Replace the current history entry instead of pushing.
    pub fn replacing(mut self) -> Self {
        self.replace = true;
        self
    }

    /// The link target, as rendered into `href`.
    pub fn href(&self) -> &str {
        &self.target
    }

    pub fn replaces(&self) -> bool {
        self.replace
    }

    /// Handle an activation of this link.
    pub fn activate<T, H: History>(
        &self,
        controller: &mut NavigationController<T, H>,
        activation: Activation,
    ) -> LinkDisposition {
        if !activation.is_interceptable() {
            tracing::trace!(href = %self.target, ?activation, "Link activation left to platform");
            return LinkDisposition::PlatformDefault;
        }
        LinkDisposition::Intercepted(controller.navigate(&self.target, self.replace))
    }
}

/// Navigates as soon as it is applied, e.g. when the content holding it is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigate {
    target: String,
    replace: bool,
}

impl Navigate {
    pub fn to(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            replace: false,
        }
    }

    /// Redirect semantics: replace the current entry.
    pub fn replacing(mut self) -> Self {
        self.replace = true;
        self
    }

    pub fn apply<T, H: History>(&self, controller: &mut NavigationController<T, H>) -> NavigationEvent {
        controller.navigate(&self.target, self.replace)
    }
}
