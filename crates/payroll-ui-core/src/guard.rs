//! Submit-time guard for the bank account number field

use crate::account::{AccountNumberError, BankAccountNumber};
use crate::config::FormGuardConfig;
use crate::notice::{DefaultAction, Notice, Notifier};

/// What to do with a pending form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Let the browser submit the form
    Proceed,
    /// Stop the submission and show `notice`
    Block {
        notice: Notice,
        reason: AccountNumberError,
    },
}

impl SubmitDecision {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Block { .. })
    }
}

/// Validates the account number field when its form is submitted
#[derive(Debug, Clone)]
pub struct FormGuard {
    invalid_message: String,
}

impl Default for FormGuard {
    fn default() -> Self {
        Self::from_config(&FormGuardConfig::default())
    }
}

impl FormGuard {
    pub fn from_config(config: &FormGuardConfig) -> Self {
        Self {
            invalid_message: config.invalid_message.clone(),
        }
    }

    /// Decide on a submission given the field's raw value
    pub fn evaluate(&self, raw: &str) -> SubmitDecision {
        match BankAccountNumber::parse(raw) {
            Ok(_) => SubmitDecision::Proceed,
            Err(reason) => SubmitDecision::Block {
                notice: Notice::new(self.invalid_message.as_str()),
                reason,
            },
        }
    }

    /// Handle a submit event.
    ///
    /// `raw` is `None` when the form has no account number field; the
    /// submission then proceeds untouched. On a rejection the notice is shown
    /// and the default action suppressed; on acceptance neither surface is
    /// touched.
    pub fn on_submit(
        &self,
        raw: Option<&str>,
        event: impl DefaultAction,
        notifier: impl Notifier,
    ) -> SubmitDecision {
        let Some(raw) = raw else {
            tracing::warn!("FormGuard: account number field missing, submission not checked");
            return SubmitDecision::Proceed;
        };

        let decision = self.evaluate(raw);
        if let SubmitDecision::Block { notice, reason } = &decision {
            tracing::debug!(%reason, "FormGuard: submission blocked");
            notifier.notify(notice);
            event.prevent_default();
        }
        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct Recorder {
        notices: RefCell<Vec<Notice>>,
        prevented: Cell<bool>,
    }

    impl Notifier for Recorder {
        fn notify(&self, notice: &Notice) {
            self.notices.borrow_mut().push(notice.clone());
        }
    }

    impl DefaultAction for Recorder {
        fn prevent_default(&self) {
            self.prevented.set(true);
        }
    }

    #[test]
    fn test_valid_value_proceeds_silently() {
        let guard = FormGuard::default();
        let rec = Recorder::default();

        let decision = guard.on_submit(Some("  123456789  "), &rec, &rec);

        assert_eq!(decision, SubmitDecision::Proceed);
        assert!(rec.notices.borrow().is_empty());
        assert!(!rec.prevented.get());
    }

    #[test]
    fn test_invalid_value_blocks_and_notifies() {
        let guard = FormGuard::default();
        let rec = Recorder::default();

        let decision = guard.on_submit(Some("1234567"), &rec, &rec);

        assert!(decision.is_blocked());
        assert!(rec.prevented.get());
        assert_eq!(
            rec.notices.borrow().as_slice(),
            &[Notice::new("Please enter a valid bank account number.")]
        );
    }

    #[test]
    fn test_empty_value_blocks() {
        let guard = FormGuard::default();
        match guard.evaluate("") {
            SubmitDecision::Block { reason, .. } => {
                assert_eq!(reason, AccountNumberError::Empty)
            }
            other => panic!("expected block, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_field_proceeds() {
        let guard = FormGuard::default();
        let rec = Recorder::default();

        assert_eq!(guard.on_submit(None, &rec, &rec), SubmitDecision::Proceed);
        assert!(!rec.prevented.get());
        assert!(rec.notices.borrow().is_empty());
    }

    #[test]
    fn test_custom_message() {
        let config = FormGuardConfig {
            invalid_message: "Bad account".into(),
            ..FormGuardConfig::default()
        };
        let guard = FormGuard::from_config(&config);
        match guard.evaluate("abc") {
            SubmitDecision::Block { notice, .. } => assert_eq!(notice.message, "Bad account"),
            other => panic!("expected block, got {:?}", other),
        }
    }
}
