//! Page configuration
//!
//! One WASM bundle is loaded on every page. The page tells it which behaviour
//! to install, either with a JSON config block or a `data-payroll-page`
//! attribute on `<body>`. Every field defaults to the markup conventions the
//! templates already follow, so `{}` is a valid config.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Id of the `<script type="application/json">` element holding the config
pub const CONFIG_ELEMENT_ID: &str = "payroll-ui-config";

/// `<body>` attribute naming the page when there is no config block
pub const PAGE_ATTRIBUTE: &str = "data-payroll-page";

/// `<body>` attribute that stops the bundle installing on load; the page
/// then calls `install(config)` itself
pub const MANUAL_ATTRIBUTE: &str = "data-payroll-manual";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid page config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown page kind: {0:?}")]
    UnknownPage(String),

    #[error("invalid page config: {0}")]
    Invalid(String),
}

/// Which template is being rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageKind {
    /// Admin form for adding an employee (account number guard)
    AddEmployee,
    /// Admin employee list (payslip links)
    AdminDashboard,
    /// Employee's own profile (edit toggle)
    EmployeeDashboard,
}

impl PageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AddEmployee => "add-employee",
            Self::AdminDashboard => "admin-dashboard",
            Self::EmployeeDashboard => "employee-dashboard",
        }
    }
}

/// Exact match only, same as the JSON config's `"page"` field
impl FromStr for PageKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add-employee" => Ok(Self::AddEmployee),
            "admin-dashboard" => Ok(Self::AdminDashboard),
            "employee-dashboard" => Ok(Self::EmployeeDashboard),
            other => Err(ConfigError::UnknownPage(other.to_string())),
        }
    }
}

/// A behaviour the bundle can install on a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    /// Account number guard on the form matched by the selector
    FormGuard { form_selector: String },
    PayslipLinks,
    EditToggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormGuardConfig {
    pub form_selector: String,
    /// `name` of the account number field inside the form
    pub field_name: String,
    pub invalid_message: String,
}

impl Default for FormGuardConfig {
    fn default() -> Self {
        Self {
            form_selector: "form".into(),
            field_name: "bank_account_number".into(),
            invalid_message: "Please enter a valid bank account number.".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayslipLinksConfig {
    pub link_selector: String,
    pub id_attribute: String,
}

impl Default for PayslipLinksConfig {
    fn default() -> Self {
        Self {
            link_selector: ".view-link".into(),
            id_attribute: "data-empid".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditToggleConfig {
    pub edit_button_id: String,
    pub save_button_id: String,
    /// Form whose `input` descendants are toggled
    pub form_selector: String,
    /// CSS `display` value used when the save control is shown
    pub save_display: String,
}

impl Default for EditToggleConfig {
    fn default() -> Self {
        Self {
            edit_button_id: "editBtn".into(),
            save_button_id: "saveBtn".into(),
            form_selector: "#edit-form".into(),
            save_display: "inline-block".into(),
        }
    }
}

impl EditToggleConfig {
    /// Selector for the tracked inputs
    pub fn inputs_selector(&self) -> String {
        format!("{} input", self.form_selector)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// `None` installs nothing
    pub page: Option<PageKind>,
    /// Install from the markup config as soon as the module starts. When
    /// false, only an explicit `install(config)` call installs anything.
    pub auto_install: bool,
    pub log_level: LogLevel,
    /// Also guard the account number on the employee's profile form
    pub guard_profile_form: bool,
    pub form_guard: FormGuardConfig,
    pub payslip_links: PayslipLinksConfig,
    pub edit_toggle: EditToggleConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page: None,
            auto_install: true,
            log_level: LogLevel::default(),
            guard_profile_form: false,
            form_guard: FormGuardConfig::default(),
            payslip_links: PayslipLinksConfig::default(),
            edit_toggle: EditToggleConfig::default(),
        }
    }
}

impl PageConfig {
    /// Parse the text of a JSON config block
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults for a page named by `data-payroll-page`
    pub fn for_page(page: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            page: Some(page.parse()?),
            ..Self::default()
        })
    }

    /// Behaviours to install, in installation order
    pub fn components(&self) -> Vec<Component> {
        match self.page {
            None => Vec::new(),
            Some(PageKind::AddEmployee) => vec![Component::FormGuard {
                form_selector: self.form_guard.form_selector.clone(),
            }],
            Some(PageKind::AdminDashboard) => vec![Component::PayslipLinks],
            Some(PageKind::EmployeeDashboard) => {
                let mut components = vec![Component::EditToggle];
                if self.guard_profile_form {
                    components.push(Component::FormGuard {
                        form_selector: self.edit_toggle.form_selector.clone(),
                    });
                }
                components
            }
        }
    }

    /// Reject configs whose selectors could never match anything
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("form_guard.form_selector", &self.form_guard.form_selector),
            ("form_guard.field_name", &self.form_guard.field_name),
            ("payslip_links.link_selector", &self.payslip_links.link_selector),
            ("edit_toggle.edit_button_id", &self.edit_toggle.edit_button_id),
            ("edit_toggle.save_button_id", &self.edit_toggle.save_button_id),
            ("edit_toggle.form_selector", &self.edit_toggle.form_selector),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{field} must not be empty")));
            }
        }
        Ok(())
    }
}
