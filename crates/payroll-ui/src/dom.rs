//! Thin helpers over web-sys, plus the DOM side of the core's page surfaces

use crate::error::{Result, UiError};
use payroll_ui_core::{DefaultAction, Notice, Notifier, ToggleSurface};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlInputElement, Window,
};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(UiError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(UiError::NoDocument)
}

/// First element matching `selector`, or `MissingElement`
pub fn query(document: &Document, selector: &str) -> Result<Element> {
    document
        .query_selector(selector)?
        .ok_or_else(|| UiError::missing(selector))
}

/// Every element matching `selector`, in document order
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let nodes = document.query_selector_all(selector)?;
    let elements = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect();
    Ok(elements)
}

pub fn by_id<T: JsCast>(document: &Document, id: &str, expected: &'static str) -> Result<T> {
    let selector = format!("#{id}");
    document
        .get_element_by_id(id)
        .ok_or_else(|| UiError::missing(selector.as_str()))?
        .dyn_into::<T>()
        .map_err(|_| UiError::wrong_type(selector, expected))
}

/// Run `setup` once the element tree is parsed.
///
/// The WASM module usually finishes instantiating after `DOMContentLoaded`
/// has fired, so setup runs immediately unless the document is still loading.
pub fn on_structural_ready<F>(document: &Document, setup: F) -> Result<()>
where
    F: FnOnce() + 'static,
{
    if document.ready_state() != "loading" {
        setup();
        return Ok(());
    }

    let callback = Closure::<dyn FnMut()>::once_into_js(setup);
    document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())?;
    tracing::debug!("setup deferred until DOMContentLoaded");
    Ok(())
}

/// `window.alert`
pub struct AlertNotifier {
    window: Window,
}

impl AlertNotifier {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Notifier for AlertNotifier {
    fn notify(&self, notice: &Notice) {
        if let Err(err) = self.window.alert_with_message(&notice.message) {
            tracing::warn!(?err, "alert failed");
        }
    }
}

/// Borrowed DOM event exposing its default action
pub struct DomEvent<'a>(pub &'a Event);

impl DefaultAction for DomEvent<'_> {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}

/// The profile form's inputs and its edit/save buttons
pub struct ProfileControls {
    pub inputs: Vec<HtmlInputElement>,
    pub edit: HtmlElement,
    pub save: HtmlElement,
    /// `display` value for a visible save button
    pub save_display: String,
}

fn set_display(element: &HtmlElement, display: Option<&str>) {
    let style = element.style();
    let result = match display {
        Some(value) => style.set_property("display", value),
        // Fall back to whatever the stylesheet says
        None => style.remove_property("display").map(|_| ()),
    };
    if let Err(err) = result {
        tracing::warn!(?err, id = %element.id(), "could not change display");
    }
}

impl ToggleSurface for ProfileControls {
    fn set_inputs_disabled(&self, disabled: bool) {
        for input in &self.inputs {
            input.set_disabled(disabled);
        }
    }

    fn set_edit_visible(&self, visible: bool) {
        set_display(&self.edit, if visible { None } else { Some("none") });
    }

    fn set_save_visible(&self, visible: bool) {
        let display = if visible {
            self.save_display.as_str()
        } else {
            "none"
        };
        set_display(&self.save, Some(display));
    }
}
