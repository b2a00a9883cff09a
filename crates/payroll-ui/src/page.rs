//! Installing a page's behaviours
//!
//! Dispatch over [`PageConfig::components`] goes through
//! [`ComponentInstaller`] so the once-per-page rule and failure handling do
//! not depend on a live document.

use crate::error::Result;
use crate::{admin_links, edit_toggle, form_guard};
use payroll_ui_core::{Component, PageConfig};
use std::cell::Cell;
use web_sys::Document;

pub trait ComponentInstaller {
    fn install(&mut self, component: &Component, config: &PageConfig) -> Result<()>;
}

/// Installs components into a real document
pub struct DomInstaller<'a> {
    pub document: &'a Document,
}

impl ComponentInstaller for DomInstaller<'_> {
    fn install(&mut self, component: &Component, config: &PageConfig) -> Result<()> {
        match component {
            Component::FormGuard { form_selector } => {
                form_guard::install(self.document, form_selector, &config.form_guard)
            }
            Component::PayslipLinks => {
                admin_links::install(self.document, &config.payslip_links).map(|_| ())
            }
            Component::EditToggle => edit_toggle::install(self.document, &config.edit_toggle),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The config names no page
    NoPage,
    /// Behaviours were already installed in this page load
    AlreadyInstalled,
    Installed { installed: usize, failed: usize },
}

/// Whether `start` installs from the markup config. When it does not, the
/// first `install(config)` call from the page wins.
pub fn installs_on_start(config: &PageConfig) -> bool {
    config.auto_install
}

/// Install every behaviour `config` names, at most once per `installed` flag.
///
/// A failing behaviour is logged and does not stop the others.
pub fn install_components(
    config: &PageConfig,
    installer: &mut impl ComponentInstaller,
    installed: &Cell<bool>,
) -> InstallOutcome {
    let Some(page) = config.page else {
        tracing::debug!("no page kind configured, nothing to install");
        return InstallOutcome::NoPage;
    };
    if installed.replace(true) {
        tracing::info!(page = page.as_str(), "behaviours already installed");
        return InstallOutcome::AlreadyInstalled;
    }

    tracing::info!(page = page.as_str(), "installing page behaviours");
    let (mut ok, mut failed) = (0, 0);
    for component in config.components() {
        match installer.install(&component, config) {
            Ok(()) => ok += 1,
            Err(err) => {
                failed += 1;
                tracing::error!(%err, ?component, "failed to install behaviour");
            }
        }
    }
    InstallOutcome::Installed {
        installed: ok,
        failed,
    }
}
