#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use crate::core::{
        ErrorLog, Notification, NotificationKind, Notifier, SignupError, SignupForm,
        SignupOutcome, SignupRequest, SignupStore, SubmitRejected,
    };

    /// Store that records every request and replays scripted responses
    #[derive(Default)]
    struct ScriptedStore {
        calls: RefCell<Vec<SignupRequest>>,
        responses: RefCell<VecDeque<Result<(), SignupError>>>,
    }

    impl ScriptedStore {
        fn replying(responses: impl IntoIterator<Item = Result<(), SignupError>>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                responses: RefCell::new(responses.into_iter().collect()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl SignupStore for ScriptedStore {
        async fn insert_signup(&self, request: &SignupRequest) -> Result<(), SignupError> {
            self.calls.borrow_mut().push(request.clone());
            self.responses.borrow_mut().pop_front().unwrap_or(Ok(()))
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        sent: RefCell<Vec<Notification>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.sent.borrow_mut().push(notification);
        }
    }

    #[derive(Default)]
    struct RecordingLog {
        entries: RefCell<Vec<(String, String)>>,
    }

    impl ErrorLog for RecordingLog {
        fn log_error(&self, context: &str, error: &dyn std::error::Error) {
            self.entries
                .borrow_mut()
                .push((context.to_string(), error.to_string()));
        }
    }

    type TestForm = SignupForm<ScriptedStore, RecordingNotifier, RecordingLog>;

    fn form_replying(responses: impl IntoIterator<Item = Result<(), SignupError>>) -> TestForm {
        SignupForm::new(
            ScriptedStore::replying(responses),
            RecordingNotifier::default(),
            RecordingLog::default(),
        )
    }

    #[tokio::test]
    async fn test_invalid_email_never_calls_store() {
        let mut form = form_replying([]);
        form.input("a@b");

        let result = form.submit("Slack").await;

        assert_eq!(result, Err(SubmitRejected::InvalidEmail));
        assert_eq!(form.store().call_count(), 0);
        assert!(form.notifier().sent.borrow().is_empty());
        assert!(!form.state().is_valid());
        assert!(!form.state().is_submitting());
    }

    #[tokio::test]
    async fn test_success_clears_email_and_notifies_once() {
        let mut form = form_replying([Ok(())]);
        form.input("new@example.com");

        let outcome = form.submit("Telegram").await.unwrap();

        assert_eq!(outcome, SignupOutcome::Success);
        assert_eq!(
            *form.store().calls.borrow(),
            vec![SignupRequest::new("new@example.com", "Telegram")]
        );
        let sent = form.notifier().sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].title, "Success");
        assert_eq!(
            sent[0].description,
            "Thanks for signing up! We'll keep you updated."
        );
        assert_eq!(form.state().email(), "");
        assert!(!form.state().is_submitting());
        assert!(form.log().entries.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_email_keeps_input() {
        let mut form = form_replying([Err(SignupError::UniqueViolation)]);
        form.input("dup@example.com");

        let outcome = form.submit("Slack").await.unwrap();

        assert_eq!(outcome, SignupOutcome::DuplicateEmail);
        assert_eq!(form.state().email(), "dup@example.com");
        assert!(!form.state().is_submitting());

        let sent = form.notifier().sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].kind, NotificationKind::Info);
        assert_eq!(sent[0].title, "Already signed up!");
        assert_eq!(sent[0].description, "This email is already on our list.");
        assert!(form.log().entries.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_other_error_is_logged_and_keeps_input() {
        let mut form = form_replying([Err(SignupError::Remote {
            code: "INTERNAL_ERROR".into(),
            message: "connection reset".into(),
        })]);
        form.input("user@example.com");

        let outcome = form.submit("Slack").await.unwrap();

        assert!(matches!(outcome, SignupOutcome::TransientFailure(_)));
        assert_eq!(form.state().email(), "user@example.com");
        assert!(!form.state().is_submitting());

        let sent = form.notifier().sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].kind, NotificationKind::Error);
        assert_eq!(sent[0].description, "Please try again later.");

        let entries = form.log().entries.borrow();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, "Error signing up");
        assert!(entries[0].1.contains("connection reset"));
    }

    #[tokio::test]
    async fn test_network_failure_collapses_to_transient() {
        let mut form = form_replying([Err(SignupError::Unknown("Failed to fetch".into()))]);
        form.input("user@example.com");

        let outcome = form.submit("Slack").await.unwrap();

        assert_eq!(
            outcome,
            SignupOutcome::TransientFailure("Failed to fetch".into())
        );
        assert_eq!(form.log().entries.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_end_to_end_correction_flow() {
        let mut form = form_replying([Ok(())]);

        form.input("not-an-email");
        assert_eq!(
            form.submit("Slack").await,
            Err(SubmitRejected::InvalidEmail)
        );
        assert!(!form.state().is_valid());
        assert_eq!(form.store().call_count(), 0);

        form.input("user@example.com");
        assert!(form.state().is_valid());

        let outcome = form.submit("Slack").await.unwrap();
        assert_eq!(outcome, SignupOutcome::Success);
        assert_eq!(form.store().call_count(), 1);
        assert_eq!(form.state().email(), "");
        assert_eq!(form.notifier().sent.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_form_is_reusable_after_failure() {
        let mut form = form_replying([
            Err(SignupError::Unknown("offline".into())),
            Ok(()),
        ]);
        form.input("retry@example.com");

        let first = form.submit("Slack").await.unwrap();
        assert!(matches!(first, SignupOutcome::TransientFailure(_)));
        assert_eq!(form.state().email(), "retry@example.com");

        let second = form.submit("Slack").await.unwrap();
        assert_eq!(second, SignupOutcome::Success);
        assert_eq!(form.store().call_count(), 2);
        assert_eq!(form.notifier().sent.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_blank_platform_falls_back_to_default() {
        let mut form = form_replying([Ok(())]);
        form.input("user@example.com");

        form.submit("   ").await.unwrap();

        assert_eq!(form.store().calls.borrow()[0].platform, "Slack");
    }
}
