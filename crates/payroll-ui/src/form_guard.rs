//! Account number check on form submission

use crate::dom::{self, AlertNotifier, DomEvent};
use crate::error::{Result, UiError};
use payroll_ui_core::{FormGuard, FormGuardConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlFormElement};

/// Current value of the control named `field_name`, read the way
/// `form.<name>.value` would be. `None` if the form has no such control.
fn field_value(form: &HtmlFormElement, field_name: &str) -> Option<String> {
    let field = form.elements().named_item(field_name)?;
    js_sys::Reflect::get(&field, &JsValue::from_str("value"))
        .ok()
        .and_then(|value| value.as_string())
}

/// Attach the guard to the form matched by `form_selector`
pub fn install(document: &Document, form_selector: &str, config: &FormGuardConfig) -> Result<()> {
    let form = dom::query(document, form_selector)?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| UiError::wrong_type(form_selector, "form element"))?;

    let guard = FormGuard::from_config(config);
    let notifier = AlertNotifier::new(dom::window()?);
    let field_name = config.field_name.clone();
    let target = form.clone();

    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let raw = field_value(&target, &field_name);
        guard.on_submit(raw.as_deref(), DomEvent(&event), &notifier);
    });
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();

    tracing::info!(form = form_selector, field = %config.field_name, "FormGuard installed");
    Ok(())
}
