//! Payroll UI page behaviours
//!
//! The decision logic behind the payroll web pages' client-side scripts,
//! kept free of any DOM dependency so it can be tested natively.
//!
//! | Page | Behaviour |
//! |------|-----------|
//! | add employee | [`FormGuard`] blocks submission of an invalid account number |
//! | admin dashboard | [`PayslipLinkStub`] replaces payslip navigation with a notice |
//! | employee dashboard | [`EditToggle`] unlocks the profile form |
//!
//! The WASM crate implements [`Notifier`], [`DefaultAction`] and
//! [`ToggleSurface`] against the real page and wires these into listeners.

pub mod account;
pub mod config;
pub mod guard;
pub mod notice;
pub mod payslip;
pub mod toggle;

pub use account::{is_valid_account_number, AccountNumberError, BankAccountNumber};
pub use config::{
    Component, ConfigError, EditToggleConfig, FormGuardConfig, LogLevel, PageConfig, PageKind,
    PayslipLinksConfig,
};
pub use guard::{FormGuard, SubmitDecision};
pub use notice::{DefaultAction, Notice, Notifier, ToggleSurface};
pub use payslip::{payslip_preview_notice, PayslipLinkStub};
pub use toggle::{ControlView, EditMode, EditToggle};
