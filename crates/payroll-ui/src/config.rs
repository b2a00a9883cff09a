//! Where a page's config comes from
//!
//! The markup is read when the module starts: the JSON block
//! `<script type="application/json" id="payroll-ui-config">` if present,
//! otherwise `<body data-payroll-page="...">`. `start` installs from that
//! straight away, so a later `install(config)` call from JS only takes effect
//! when the markup names no page or opts out with `data-payroll-manual` (or
//! `"auto_install": false` in the block).

use crate::error::Result;
use payroll_ui_core::config::{CONFIG_ELEMENT_ID, MANUAL_ATTRIBUTE, PAGE_ATTRIBUTE};
use payroll_ui_core::{ConfigError, LogLevel, PageConfig};
use wasm_bindgen::JsValue;
use web_sys::Document;

/// Raw config sources found in the page markup
#[derive(Debug, Clone, Default)]
pub struct MarkupSources {
    pub config_block: Option<String>,
    pub page_attribute: Option<String>,
    /// `data-payroll-manual` is present on `<body>`
    pub manual: bool,
}

impl MarkupSources {
    pub fn read(document: &Document) -> Self {
        let body = document.body();
        Self {
            config_block: document
                .get_element_by_id(CONFIG_ELEMENT_ID)
                .and_then(|el| el.text_content()),
            page_attribute: body
                .as_ref()
                .and_then(|body| body.get_attribute(PAGE_ATTRIBUTE)),
            manual: body.is_some_and(|body| body.has_attribute(MANUAL_ATTRIBUTE)),
        }
    }

    /// The config block wins over the page attribute
    pub fn resolve(&self) -> std::result::Result<PageConfig, ConfigError> {
        let mut config = match (&self.config_block, &self.page_attribute) {
            (Some(text), _) => PageConfig::from_json(text)?,
            (None, Some(page)) => PageConfig::for_page(page)?,
            (None, None) => PageConfig::default(),
        };
        if self.manual {
            config.auto_install = false;
        }
        Ok(config)
    }
}

/// Read the config from the document's markup
pub fn from_document(document: &Document) -> Result<PageConfig> {
    Ok(MarkupSources::read(document).resolve()?)
}

/// Deserialize a config object handed over from JS. `undefined` and `null`
/// mean "all defaults".
pub fn from_js(value: JsValue) -> Result<PageConfig> {
    if value.is_undefined() || value.is_null() {
        return Ok(PageConfig::default());
    }
    let config: PageConfig = serde_wasm_bindgen::from_value(value)
        .map_err(|err| ConfigError::Invalid(err.to_string()))?;
    config.validate()?;
    Ok(config)
}

pub fn tracing_level(level: LogLevel) -> tracing::Level {
    match level {
        LogLevel::Trace => tracing::Level::TRACE,
        LogLevel::Debug => tracing::Level::DEBUG,
        LogLevel::Info => tracing::Level::INFO,
        LogLevel::Warn => tracing::Level::WARN,
        LogLevel::Error => tracing::Level::ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payroll_ui_core::PageKind;

    fn sources(block: Option<&str>, page: Option<&str>) -> MarkupSources {
        MarkupSources {
            config_block: block.map(str::to_string),
            page_attribute: page.map(str::to_string),
            manual: false,
        }
    }

    #[test]
    fn test_config_block_wins_over_body_attribute() {
        let config = sources(Some(r#"{ "page": "add-employee" }"#), Some("admin-dashboard"))
            .resolve()
            .unwrap();
        assert_eq!(config.page, Some(PageKind::AddEmployee));
        assert!(config.auto_install);
    }

    #[test]
    fn test_body_attribute_used_without_block() {
        let config = sources(None, Some("employee-dashboard")).resolve().unwrap();
        assert_eq!(config.page, Some(PageKind::EmployeeDashboard));
        assert!(!config.guard_profile_form);
    }

    #[test]
    fn test_no_sources_installs_nothing() {
        let config = MarkupSources::default().resolve().unwrap();
        assert!(config.components().is_empty());
    }

    #[test]
    fn test_bad_block_is_an_error() {
        assert!(sources(Some("{ not json"), Some("admin-dashboard"))
            .resolve()
            .is_err());
    }

    #[test]
    fn test_manual_attribute_disables_auto_install() {
        let config = MarkupSources {
            manual: true,
            ..sources(Some(r#"{ "page": "add-employee" }"#), None)
        }
        .resolve()
        .unwrap();
        assert!(!config.auto_install);
        assert_eq!(config.page, Some(PageKind::AddEmployee));
    }

    #[test]
    fn test_tracing_level() {
        assert_eq!(tracing_level(LogLevel::default()), tracing::Level::INFO);
        assert_eq!(tracing_level(LogLevel::Trace), tracing::Level::TRACE);
    }
}
