//! Input validation helpers.
//!
//! DTOs derive [`validator::Validate`]; the helpers here summarise the
//! field-level report produced by a failed check.

use validator::ValidationErrors;

/// Names of the fields that failed validation, sorted for stable output.
pub fn invalid_fields(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort();
    fields
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;

    #[derive(Validate)]
    struct Named {
        #[validate(length(min = 1))]
        name: String,
        #[validate(length(min = 1))]
        label: String,
    }

    #[test]
    fn valid_input_has_no_report() {
        let input = Named {
            name: "a".to_string(),
            label: "b".to_string(),
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn invalid_fields_are_sorted() {
        let input = Named {
            name: String::new(),
            label: String::new(),
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(invalid_fields(&errors), vec!["label", "name"]);
    }

    #[test]
    fn only_failing_fields_are_reported() {
        let input = Named {
            name: "a".to_string(),
            label: String::new(),
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(invalid_fields(&errors), vec!["label"]);
    }
}
