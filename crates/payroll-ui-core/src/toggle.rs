//! Read-only / editable toggle for the employee profile form
//!
//! ```text
//!   ReadOnly ──activate──► Editable
//! ```
//!
//! There is no way back to `ReadOnly` here. Saving submits the form and the
//! server re-renders the page read-only.

use crate::notice::ToggleSurface;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditMode {
    #[default]
    ReadOnly,
    Editable,
}

/// What the page should look like in a given mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlView {
    pub inputs_disabled: bool,
    pub edit_visible: bool,
    pub save_visible: bool,
}

impl EditMode {
    pub fn view(self) -> ControlView {
        match self {
            Self::ReadOnly => ControlView {
                inputs_disabled: true,
                edit_visible: true,
                save_visible: false,
            },
            Self::Editable => ControlView {
                inputs_disabled: false,
                edit_visible: false,
                save_visible: true,
            },
        }
    }
}

impl ControlView {
    /// Push this view onto the page
    pub fn apply(&self, surface: impl ToggleSurface) {
        surface.set_inputs_disabled(self.inputs_disabled);
        surface.set_edit_visible(self.edit_visible);
        surface.set_save_visible(self.save_visible);
    }
}

#[derive(Debug, Default)]
pub struct EditToggle {
    mode: EditMode,
}

impl EditToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn view(&self) -> ControlView {
        self.mode.view()
    }

    /// Handle a click on the edit control.
    ///
    /// Returns `true` if the form switched to `Editable`. Once editable,
    /// further activations leave both the state and the surface alone.
    pub fn activate(&mut self, surface: impl ToggleSurface) -> bool {
        match self.mode {
            EditMode::ReadOnly => {
                self.mode = EditMode::Editable;
                self.mode.view().apply(surface);
                tracing::debug!("EditToggle: profile form is now editable");
                true
            }
            EditMode::Editable => false,
        }
    }
}
