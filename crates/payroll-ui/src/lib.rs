//! Payroll UI - page behaviours compiled to WASM
//!
//! One bundle is loaded on every page. On start it reads the page config
//! (see [`config`]), waits for the element tree, and installs whichever
//! behaviour the page asks for:
//!
//! ```text
//! add-employee        ──► form_guard   (submit)
//! admin-dashboard     ──► admin_links  (click on .view-link)
//! employee-dashboard  ──► edit_toggle  (click on #editBtn)
//! ```

pub mod admin_links;
pub mod config;
pub mod dom;
pub mod edit_toggle;
pub mod error;
pub mod form_guard;
pub mod page;

pub use error::UiError;

use payroll_ui_core::{LogLevel, PageConfig};
use page::{DomInstaller, InstallOutcome};
use std::cell::Cell;
use wasm_bindgen::prelude::*;
use web_sys::Document;

// Listeners go on once per page load (thread-local for WASM)
thread_local! {
    static INSTALLED: Cell<bool> = const { Cell::new(false) };
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            web_sys::console::error_1(&format!("payroll-ui: {err}").into());
            return;
        }
    };

    let config = config::from_document(&document);
    init_logging(config.as_ref().map(|c| c.log_level).unwrap_or_default());

    match config {
        Ok(config) if page::installs_on_start(&config) => schedule(&document, config),
        Ok(_) => tracing::debug!("manual install requested, waiting for install()"),
        Err(err) => tracing::error!(%err, "page config rejected, nothing installed"),
    }
}

/// Install with an explicit config object, for pages that drive setup from
/// their own script instead of a config block.
///
/// `start` has already run by the time JS can call this, so it only takes
/// effect when the markup names no page or sets `data-payroll-manual`.
#[wasm_bindgen]
pub fn install(config: JsValue) -> Result<(), JsValue> {
    let config = config::from_js(config)?;
    let document = dom::document()?;
    init_logging(config.log_level);
    schedule(&document, config);
    Ok(())
}

fn init_logging(level: LogLevel) {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(config::tracing_level(level))
            .build(),
    );
}

fn schedule(document: &Document, config: PageConfig) {
    let ready_document = document.clone();
    let scheduled = dom::on_structural_ready(document, move || {
        install_page(&ready_document, &config);
    });
    if let Err(err) = scheduled {
        tracing::error!(%err, "could not wait for DOMContentLoaded");
    }
}

/// Install every behaviour the page config names, once per page load
pub fn install_page(document: &Document, config: &PageConfig) -> InstallOutcome {
    let mut installer = DomInstaller { document };
    INSTALLED.with(|installed| page::install_components(config, &mut installer, installed))
}
