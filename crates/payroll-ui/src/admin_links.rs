//! Placeholder click handlers for the admin dashboard's payslip links

use crate::dom::{self, AlertNotifier, DomEvent};
use crate::error::Result;
use payroll_ui_core::{PayslipLinkStub, PayslipLinksConfig};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event};

/// Wire every payslip link on the page. Returns how many were wired;
/// a dashboard with no employees has none.
pub fn install(document: &Document, config: &PayslipLinksConfig) -> Result<usize> {
    let links = dom::query_all(document, &config.link_selector)?;
    let notifier = Rc::new(AlertNotifier::new(dom::window()?));

    for link in &links {
        let target = link.clone();
        let notifier = Rc::clone(&notifier);
        let id_attribute = config.id_attribute.clone();

        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let employee_id = target.get_attribute(&id_attribute);
            PayslipLinkStub.on_click(employee_id.as_deref(), DomEvent(&event), &*notifier);
        });
        link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    tracing::info!(
        selector = %config.link_selector,
        links = links.len(),
        "payslip links installed"
    );
    Ok(links.len())
}
