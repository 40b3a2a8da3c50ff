//! Tests for user registration and credential verification.

#[cfg(test)]
mod tests {
    use crate::errors::Error;
    use crate::users::{CredentialVerifier, InMemoryVerifier, NewUser, User};
    use rust_decimal::Decimal;

    fn new_user() -> NewUser {
        NewUser {
            name: "Maria Silva".to_string(),
            document: "123.456.789-00".to_string(),
            password: "s3nha".to_string(),
        }
    }

    #[test]
    fn test_register_starts_with_zero_balances() {
        let user = User::register(&new_user()).unwrap();

        assert_eq!(user.name, "Maria Silva");
        assert_eq!(user.document, "123.456.789-00");
        assert_eq!(user.bank.balance(), Decimal::ZERO);
        assert_eq!(user.investment.balance(), Decimal::ZERO);
        assert!(user.portfolio.is_empty());
        assert!(user.bank.ledger().is_empty());
        assert!(user.investment.ledger().is_empty());
    }

    #[test]
    fn test_register_trims_identity_fields() {
        let mut input = new_user();
        input.name = "  Maria Silva  ".to_string();
        input.document = " 123.456.789-00 ".to_string();

        let user = User::register(&input).unwrap();
        assert_eq!(user.name, "Maria Silva");
        assert_eq!(user.document, "123.456.789-00");
    }

    #[test]
    fn test_register_rejects_blank_fields() {
        for field in ["name", "document", "password"] {
            let mut input = new_user();
            match field {
                "name" => input.name = "   ".to_string(),
                "document" => input.document = String::new(),
                _ => input.password = String::new(),
            }
            assert!(
                matches!(User::register(&input), Err(Error::Validation(_))),
                "blank {field} should be rejected"
            );
        }
    }

    #[test]
    fn test_verifier_matches_enrolled_pair_only() {
        let mut verifier = InMemoryVerifier::new();
        verifier.enroll("123.456.789-00", "s3nha");

        assert!(verifier.verify("123.456.789-00", "s3nha"));
        assert!(!verifier.verify("123.456.789-00", "wrong"));
        assert!(!verifier.verify("000.000.000-00", "s3nha"));
    }

    #[test]
    fn test_verifier_rejects_before_enrollment() {
        let verifier = InMemoryVerifier::new();
        assert!(!verifier.verify("123.456.789-00", "s3nha"));
    }

    #[test]
    fn test_enroll_replaces_previous_credentials() {
        let mut verifier = InMemoryVerifier::new();
        verifier.enroll("123.456.789-00", "old");
        verifier.enroll("123.456.789-00", "new");

        assert!(!verifier.verify("123.456.789-00", "old"));
        assert!(verifier.verify("123.456.789-00", "new"));
    }
}
