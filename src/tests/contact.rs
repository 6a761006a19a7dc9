use crate::error::FormError;
use crate::utils::contact::{ DEMO_NOTICE, INCOMPLETE_NOTICE };
use crate::utils::ContactSubmission;

fn filled() -> ContactSubmission {
    ContactSubmission {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        message: "Hello there".to_string(),
    }
}

#[test]
fn test_complete_submission_is_accepted_and_cleared() {
    let mut submission = filled();
    assert_eq!(submission.validate(), Ok(()));
    assert_eq!(submission.submit(), DEMO_NOTICE);
    assert_eq!(submission, ContactSubmission::default());
}

#[test]
fn test_incomplete_submission_keeps_fields() {
    let mut submission = ContactSubmission { message: " ".to_string(), ..filled() };
    assert_eq!(submission.submit(), INCOMPLETE_NOTICE);
    assert_eq!(submission.name, "Ada");
    assert_eq!(submission.message, " ");
}

#[test]
fn test_notice_wording() {
    assert_eq!(INCOMPLETE_NOTICE, "Please fill out all fields.");
    assert_eq!(
        DEMO_NOTICE,
        "Thanks! This demo form does not send yet. Replace with your backend or mailto."
    );
}

#[test]
fn test_whitespace_only_fields_are_rejected() {
    let submission = ContactSubmission {
        email: "   ".to_string(),
        message: "\n\t".to_string(),
        ..filled()
    };
    assert_eq!(submission.validate(), Err(FormError::MissingFields(vec!["email", "message"])));
}

#[test]
fn test_empty_form_lists_every_field() {
    let err = ContactSubmission::default().validate().unwrap_err();
    assert_eq!(err.to_string(), "Missing fields: name, email, message");
}

#[test]
fn test_reset_clears_fields() {
    let mut submission = filled();
    submission.reset();
    assert_eq!(submission, ContactSubmission::default());
}
