use phone_forward::errors::{Operator, PhoneForwardError, Result};
use std::error::Error;

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_invalid_argument_error() {
        let error = PhoneForwardError::invalid_argument("not a number");

        assert!(matches!(error, PhoneForwardError::InvalidArgument(_)));
        assert!(error.to_string().contains("Invalid Argument"));
        assert!(error.to_string().contains("not a number"));
    }

    #[test]
    fn test_resource_exhausted_error() {
        let error = PhoneForwardError::resource_exhausted("base limit of 2 reached");

        assert!(matches!(error, PhoneForwardError::ResourceExhausted(_)));
        assert!(error.to_string().contains("Resource Exhausted"));
        assert!(error.to_string().contains("base limit of 2 reached"));
    }

    #[test]
    fn test_not_found_error() {
        let error = PhoneForwardError::not_found("no base named x");

        assert!(matches!(error, PhoneForwardError::NotFound(_)));
        assert!(error.to_string().contains("Not Found"));
    }

    #[test]
    fn test_syntax_error() {
        let error = PhoneForwardError::syntax(17);

        assert_eq!(error, PhoneForwardError::Syntax { offset: 17 });
        assert_eq!(error.code(), "E004");
        assert!(error.to_string().contains("17"));
    }

    #[test]
    fn test_operation_error() {
        let error = PhoneForwardError::operation(Operator::Count, 3);

        assert_eq!(
            error,
            PhoneForwardError::Operation {
                op: Operator::Count,
                offset: 3
            }
        );
        assert!(error.to_string().contains("@"));
    }

    #[test]
    fn test_error_codes_are_distinct() {
        let errors = [
            PhoneForwardError::invalid_argument(""),
            PhoneForwardError::resource_exhausted(""),
            PhoneForwardError::not_found(""),
            PhoneForwardError::syntax(1),
            PhoneForwardError::UnexpectedEof,
            PhoneForwardError::operation(Operator::New, 1),
            PhoneForwardError::file_operation(""),
            PhoneForwardError::config(""),
            PhoneForwardError::inconsistent(""),
        ];
        let mut codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }
}

#[cfg(test)]
mod diagnostic_tests {
    use super::*;

    #[test]
    fn test_syntax_diagnostic() {
        assert_eq!(PhoneForwardError::syntax(5).diagnostic(), "ERROR 5");
    }

    #[test]
    fn test_eof_diagnostic() {
        assert_eq!(PhoneForwardError::UnexpectedEof.diagnostic(), "ERROR EOF");
    }

    #[test]
    fn test_operation_diagnostics() {
        let cases = [
            (Operator::New, "ERROR NEW 1"),
            (Operator::Del, "ERROR DEL 1"),
            (Operator::Get, "ERROR ? 1"),
            (Operator::Reverse, "ERROR ? 1"),
            (Operator::Add, "ERROR > 1"),
            (Operator::Count, "ERROR @ 1"),
        ];
        for (op, expected) in cases {
            assert_eq!(PhoneForwardError::operation(op, 1).diagnostic(), expected);
        }
    }

    #[test]
    fn test_other_errors_still_start_with_error() {
        let error = PhoneForwardError::file_operation("disk gone");
        assert!(error.diagnostic().starts_with("ERROR "));
        assert!(error.diagnostic().contains("disk gone"));
    }

    #[test]
    fn test_format_colored_contains_code() {
        let error = PhoneForwardError::config("bad level");
        let formatted = error.format_colored();
        assert!(formatted.contains("E008"));
        assert!(formatted.contains("bad level"));
    }
}

#[cfg(test)]
mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing input");
        let error: PhoneForwardError = io_error.into();

        assert!(matches!(error, PhoneForwardError::FileOperation(_)));
        assert!(error.to_string().contains("missing input"));
    }

    #[test]
    fn test_config_error_conversion() {
        let config_error = config::ConfigError::Message("broken".to_string());
        let error: PhoneForwardError = config_error.into();

        assert!(matches!(error, PhoneForwardError::Config(_)));
        assert!(error.to_string().contains("broken"));
    }
}

#[cfg(test)]
mod error_trait_tests {
    use super::*;

    #[test]
    fn test_error_trait_implementation() {
        let error = PhoneForwardError::invalid_argument("test");

        let error_trait: &dyn Error = &error;
        assert!(!error_trait.to_string().is_empty());
        assert!(error_trait.source().is_none());
    }

    #[test]
    fn test_send_sync_traits() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<PhoneForwardError>();
        assert_sync::<PhoneForwardError>();
    }

    #[test]
    fn test_result_alias() {
        let result: Result<u64> = Err(PhoneForwardError::UnexpectedEof);
        assert_eq!(result.unwrap_err().code(), "E005");
    }
}
