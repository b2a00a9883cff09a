//! Errors raised while wiring behaviours into the page

use payroll_ui_core::ConfigError;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("element not found: {selector}")]
    MissingElement { selector: String },

    #[error("element {selector} is not a {expected}")]
    WrongElementType {
        selector: String,
        expected: &'static str,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("DOM call failed: {0}")]
    Js(String),
}

impl UiError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement {
            selector: selector.into(),
        }
    }

    pub fn wrong_type(selector: impl Into<String>, expected: &'static str) -> Self {
        Self::WrongElementType {
            selector: selector.into(),
            expected,
        }
    }
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            UiError::missing("#editBtn").to_string(),
            "element not found: #editBtn"
        );
        assert_eq!(
            UiError::wrong_type("form", "form element").to_string(),
            "element form is not a form element"
        );
    }

    #[test]
    fn test_config_error_is_transparent() {
        let err: UiError = ConfigError::UnknownPage("reports".into()).into();
        assert_eq!(err.to_string(), "unknown page kind: \"reports\"");
    }
}
