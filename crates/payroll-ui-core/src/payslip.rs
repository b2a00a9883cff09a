//! Placeholder for the admin dashboard's "view payslip" links
//!
//! Payslip viewing is not built yet. Clicking a link stays on the page and
//! tells the admin which employee the payslip would have been for.

use crate::notice::{DefaultAction, Notice, Notifier};

/// Build the placeholder notice for an employee.
///
/// A link without an identifier attribute gets an empty identifier.
pub fn payslip_preview_notice(employee_id: Option<&str>) -> Notice {
    let employee_id = employee_id.unwrap_or_default();
    Notice::new(format!(
        "Payslip preview for Employee ID: {employee_id} (feature coming soon)"
    ))
}

/// Click handler for a payslip link
#[derive(Debug, Clone, Copy, Default)]
pub struct PayslipLinkStub;

impl PayslipLinkStub {
    /// Suppress navigation, then show the placeholder notice
    pub fn on_click(
        &self,
        employee_id: Option<&str>,
        event: impl DefaultAction,
        notifier: impl Notifier,
    ) -> Notice {
        event.prevent_default();
        if employee_id.is_none() {
            tracing::debug!("PayslipLinkStub: link has no employee id");
        }
        let notice = payslip_preview_notice(employee_id);
        notifier.notify(&notice);
        notice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_contains_employee_id() {
        let notice = payslip_preview_notice(Some("42"));
        assert_eq!(
            notice.message,
            "Payslip preview for Employee ID: 42 (feature coming soon)"
        );
    }

    #[test]
    fn test_missing_id_renders_empty() {
        let notice = payslip_preview_notice(None);
        assert_eq!(
            notice.message,
            "Payslip preview for Employee ID:  (feature coming soon)"
        );
    }

    #[test]
    fn test_id_is_not_validated() {
        let notice = payslip_preview_notice(Some("EMP-007"));
        assert!(notice.message.contains("EMP-007"));
    }
}
