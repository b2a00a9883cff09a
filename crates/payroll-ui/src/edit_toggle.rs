//! Unlock the employee profile form when Edit is clicked

use crate::dom::{self, ProfileControls};
use crate::error::{Result, UiError};
use payroll_ui_core::{EditToggle, EditToggleConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, HtmlInputElement};

fn profile_controls(document: &Document, config: &EditToggleConfig) -> Result<ProfileControls> {
    let edit = dom::by_id::<HtmlElement>(document, &config.edit_button_id, "HTML element")?;
    let save = dom::by_id::<HtmlElement>(document, &config.save_button_id, "HTML element")?;

    let selector = config.inputs_selector();
    let inputs = dom::query_all(document, &selector)?
        .into_iter()
        .map(|el| {
            el.dyn_into::<HtmlInputElement>()
                .map_err(|_| UiError::wrong_type(selector.as_str(), "input element"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ProfileControls {
        inputs,
        edit,
        save,
        save_display: config.save_display.clone(),
    })
}

/// Attach the toggle to the edit button. The save button gets no handler;
/// it submits the form as usual.
pub fn install(document: &Document, config: &EditToggleConfig) -> Result<()> {
    let controls = profile_controls(document, config)?;
    let edit = controls.edit.clone();
    let tracked = controls.inputs.len();
    let mut toggle = EditToggle::new();

    let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        toggle.activate(&controls);
    });
    edit.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    tracing::info!(
        edit = %config.edit_button_id,
        save = %config.save_button_id,
        inputs = tracked,
        "EditToggle installed"
    );
    Ok(())
}
