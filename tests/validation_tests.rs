#[cfg(test)]
pub mod validation_tests {
    use uuid::Uuid;

    use robottrader::common::ValidationError;
    use robottrader::i18n::{Language, translations};
    use robottrader::models::{SupportForm, TicketCategory};
    use robottrader::routing::AuthMode;
    use robottrader::services::validation::*;

    fn support_form() -> SupportForm {
        SupportForm {
            name: "  Jens Hansen ".to_string(),
            email: "jens@example.dk".to_string(),
            subject: "Robot won't start".to_string(),
            category: "bug".to_string(),
            message: "It stops after the first trade.".to_string(),
        }
    }

    #[test]
    fn test_credentials_require_both_fields() {
        assert_eq!(
            validate_credentials(AuthMode::SignIn, "  ", "secret1", ""),
            Err(ValidationError::Required("email"))
        );
        assert_eq!(
            validate_credentials(AuthMode::SignIn, "a@b.dk", "", ""),
            Err(ValidationError::Required("password"))
        );
    }

    #[test]
    fn test_credentials_reject_malformed_email() {
        assert_eq!(
            validate_credentials(AuthMode::SignIn, "trader", "secret1", ""),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_sign_in_skips_length_and_confirmation() {
        assert_eq!(
            validate_credentials(AuthMode::SignIn, "a@b.dk", "abc", ""),
            Ok(())
        );
    }

    #[test]
    fn test_sign_up_enforces_length() {
        assert_eq!(
            validate_credentials(AuthMode::SignUp, "a@b.dk", "abc12", "abc12"),
            Err(ValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LEN
            })
        );
        assert_eq!(
            validate_credentials(AuthMode::SignUp, "a@b.dk", "abc123", "abc123"),
            Ok(())
        );
    }

    #[test]
    fn test_sign_up_enforces_confirmation() {
        assert_eq!(
            validate_credentials(AuthMode::SignUp, "a@b.dk", "abc123", "abc124"),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn test_validation_messages_follow_language() {
        let err = ValidationError::PasswordMismatch;
        assert_eq!(
            err.localized(translations(Language::Da)),
            translations(Language::Da).errors.passwords_mismatch
        );
        assert_eq!(
            err.message()(translations(Language::En)),
            translations(Language::En).errors.passwords_mismatch
        );
    }

    #[test]
    fn test_support_form_success() {
        let user_id = Uuid::new_v4();
        let ticket = validate_support_form(&support_form(), Some(user_id))
            .unwrap();

        assert_eq!(ticket.user_id, Some(user_id));
        assert_eq!(ticket.name, "Jens Hansen");
        assert_eq!(ticket.category, TicketCategory::Bug);
    }

    #[test]
    fn test_support_form_allows_visitors() {
        let ticket = validate_support_form(&support_form(), None).unwrap();
        assert!(ticket.user_id.is_none());
    }

    #[test]
    fn test_support_form_fails_on_missing_fields() {
        let mut form = support_form();
        form.subject = "   ".to_string();
        assert_eq!(
            validate_support_form(&form, None),
            Err(ValidationError::Required("subject"))
        );

        let mut form = support_form();
        form.message.clear();
        assert_eq!(
            validate_support_form(&form, None),
            Err(ValidationError::Required("message"))
        );
    }

    #[test]
    fn test_support_form_fails_on_bad_email() {
        let mut form = support_form();
        form.email = "jens.example.dk".to_string();
        assert_eq!(
            validate_support_form(&form, None),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_support_form_fails_on_unknown_category() {
        let mut form = support_form();
        form.category = "billing".to_string();
        assert!(matches!(
            validate_support_form(&form, None),
            Err(ValidationError::UnknownChoice {
                field: "category",
                ..
            })
        ));
    }

    #[test]
    fn test_support_form_fails_on_long_message() {
        let mut form = support_form();
        form.message = "x".repeat(MAX_MESSAGE_LEN + 1);
        assert_eq!(
            validate_support_form(&form, None),
            Err(ValidationError::TooLong {
                field: "message",
                max: MAX_MESSAGE_LEN
            })
        );
    }

    #[test]
    fn test_robot_name() {
        assert_eq!(validate_robot_name("  Scalper "), Ok("Scalper".to_string()));
        assert_eq!(
            validate_robot_name(""),
            Err(ValidationError::Required("name"))
        );
        assert!(validate_robot_name(&"r".repeat(MAX_ROBOT_NAME_LEN + 1)).is_err());
    }
}
