//! Notices and the page surfaces a behaviour acts through
//!
//! Behaviours never touch the DOM directly. They decide, then apply the
//! decision through these traits; the WASM crate implements them with
//! `window.alert`, `Event::prevent_default` and element style/disabled flags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A blocking, user-facing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Shows a notice to the user and blocks until it is dismissed
pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

/// The browser's default action for the event being handled
/// (form submission, link navigation)
pub trait DefaultAction {
    fn prevent_default(&self);
}

/// The controls an edit toggle flips
pub trait ToggleSurface {
    /// Set the `disabled` flag on every tracked input
    fn set_inputs_disabled(&self, disabled: bool);
    fn set_edit_visible(&self, visible: bool);
    fn set_save_visible(&self, visible: bool);
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, notice: &Notice) {
        (**self).notify(notice)
    }
}

impl<T: DefaultAction + ?Sized> DefaultAction for &T {
    fn prevent_default(&self) {
        (**self).prevent_default()
    }
}

impl<T: ToggleSurface + ?Sized> ToggleSurface for &T {
    fn set_inputs_disabled(&self, disabled: bool) {
        (**self).set_inputs_disabled(disabled)
    }

    fn set_edit_visible(&self, visible: bool) {
        (**self).set_edit_visible(visible)
    }

    fn set_save_visible(&self, visible: bool) {
        (**self).set_save_visible(visible)
    }
}
