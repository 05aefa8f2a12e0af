//! Bike validation engine — pure logic, no database access.
//!
//! Three dependent catalog checks (brand, then model given brand, then year
//! given brand+model) plus an independent email check, evaluated against a
//! candidate record. Every check receives the whole candidate, so dependent
//! checks read the sibling fields directly. All four checks always run;
//! errors accumulate per field and never short-circuit each other.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::catalog;

/// Local-part `@` domain, with at least one dot in the domain.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex must compile")
});

/// A candidate bike submission, prior to persistence.
///
/// Borrowed views of the four user-supplied fields; the storage identity is
/// irrelevant to validation.
#[derive(Debug, Clone, Copy)]
pub struct BikeCandidate<'a> {
    pub email: &'a str,
    pub brand: &'a str,
    pub model: &'a str,
    pub year: &'a str,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Aggregated result of validating one candidate.
///
/// At most one error per field, in check order (email, brand, model, year).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub errors: Vec<FieldError>,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The message for `field`, if that field failed.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

/// Validate a candidate against the compatibility table.
pub fn validate(candidate: &BikeCandidate<'_>) -> ValidationOutcome {
    let checks = [
        ("email", check_email(candidate)),
        ("brand", check_brand(candidate)),
        ("model", check_model(candidate)),
        ("year", check_year(candidate)),
    ];

    let errors = checks
        .into_iter()
        .filter_map(|(field, message)| message.map(|message| FieldError { field, message }))
        .collect();

    ValidationOutcome { errors }
}

fn check_email(candidate: &BikeCandidate<'_>) -> Option<String> {
    if EMAIL_RE.is_match(candidate.email) {
        None
    } else {
        Some("Email must be a valid email address.".to_string())
    }
}

fn is_known_brand(brand: &str) -> bool {
    catalog::brands().iter().any(|&b| b == brand)
}

fn check_brand(candidate: &BikeCandidate<'_>) -> Option<String> {
    if is_known_brand(candidate.brand) {
        None
    } else {
        Some(format!(
            "Brand must be one of: {}",
            catalog::brands().join(", ")
        ))
    }
}

fn check_model(candidate: &BikeCandidate<'_>) -> Option<String> {
    // The model table can only be consulted once the brand resolves; report
    // the dependency rather than enumerating against a wrong brand.
    let brand = candidate.brand;
    if brand.is_empty() || !is_known_brand(brand) {
        return Some("Invalid or missing brand.".to_string());
    }

    let models = catalog::models_for(brand);
    if models.iter().any(|&m| m == candidate.model) {
        None
    } else {
        Some(format!(
            "Model for brand '{brand}' must be one of: {}",
            models.join(", ")
        ))
    }
}

fn check_year(candidate: &BikeCandidate<'_>) -> Option<String> {
    let (brand, model) = (candidate.brand, candidate.model);
    let years = catalog::years_for(brand, model);
    if brand.is_empty() || model.is_empty() || years.is_empty() {
        return Some("Invalid brand or model for year validation.".to_string());
    }

    if years.iter().any(|&y| y == candidate.year) {
        None
    } else {
        Some(format!(
            "Year for {brand} {model} must be one of: {}",
            years.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate<'a>(
        email: &'a str,
        brand: &'a str,
        model: &'a str,
        year: &'a str,
    ) -> BikeCandidate<'a> {
        BikeCandidate {
            email,
            brand,
            model,
            year,
        }
    }

    #[test]
    fn fully_valid_record() {
        let outcome = validate(&candidate("a@b.com", "Trek", "Boone", "2020"));
        assert!(outcome.is_valid(), "unexpected errors: {:?}", outcome.errors);
    }

    #[test]
    fn bad_email_is_the_only_error() {
        let outcome = validate(&candidate("not-an-email", "Trek", "Boone", "2020"));
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(
            outcome.message_for("email"),
            Some("Email must be a valid email address.")
        );
    }

    #[test]
    fn empty_email_fails() {
        let outcome = validate(&candidate("", "Trek", "Boone", "2020"));
        assert!(outcome.message_for("email").is_some());
    }

    #[test]
    fn email_requires_dot_in_domain() {
        let outcome = validate(&candidate("user@localhost", "Trek", "Boone", "2020"));
        assert!(outcome.message_for("email").is_some());
    }

    #[test]
    fn unknown_brand_fails_with_brand_enumeration() {
        let outcome = validate(&candidate("a@b.com", "Specialized", "Boone", "2020"));
        assert_eq!(
            outcome.message_for("brand"),
            Some("Brand must be one of: Canyon, Giant, Trek")
        );
    }

    #[test]
    fn unknown_model_cites_the_brands_model_list() {
        let outcome = validate(&candidate("a@b.com", "Trek", "Dude", "2020"));
        assert!(outcome.message_for("brand").is_none());
        assert_eq!(
            outcome.message_for("model"),
            Some("Model for brand 'Trek' must be one of: Boone, District")
        );
    }

    #[test]
    fn unknown_year_cites_the_pairs_year_list() {
        let outcome = validate(&candidate("a@b.com", "Trek", "Boone", "2021"));
        assert!(outcome.message_for("brand").is_none());
        assert!(outcome.message_for("model").is_none());
        assert_eq!(
            outcome.message_for("year"),
            Some("Year for Trek Boone must be one of: 2020, 2024")
        );
    }

    #[test]
    fn empty_brand_with_model_reports_dependency_not_a_model_list() {
        let outcome = validate(&candidate("a@b.com", "", "Boone", "2020"));
        assert!(outcome.message_for("brand").is_some());
        assert_eq!(
            outcome.message_for("model"),
            Some("Invalid or missing brand.")
        );
        assert_eq!(
            outcome.message_for("year"),
            Some("Invalid brand or model for year validation.")
        );
    }

    #[test]
    fn invalid_brand_never_enumerates_another_brands_models() {
        let outcome = validate(&candidate("a@b.com", "Specialized", "Boone", "2020"));
        assert_eq!(
            outcome.message_for("model"),
            Some("Invalid or missing brand.")
        );
        assert_eq!(
            outcome.message_for("year"),
            Some("Invalid brand or model for year validation.")
        );
    }

    #[test]
    fn year_check_requires_both_brand_and_model() {
        let outcome = validate(&candidate("a@b.com", "Trek", "", "2020"));
        assert_eq!(
            outcome.message_for("year"),
            Some("Invalid brand or model for year validation.")
        );
    }

    #[test]
    fn errors_accumulate_across_fields() {
        let outcome = validate(&candidate("", "", "", ""));
        assert_eq!(outcome.errors.len(), 4);
        let fields: Vec<_> = outcome.errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["email", "brand", "model", "year"]);
    }

    #[test]
    fn perturbing_one_field_yields_exactly_one_error() {
        let base = ("a@b.com", "Trek", "Boone", "2020");
        let perturbed = [
            candidate("nope", base.1, base.2, base.3),
            candidate(base.0, "Nope", base.2, base.3),
            candidate(base.0, base.1, "Nope", base.3),
            candidate(base.0, base.1, base.2, "1999"),
        ];
        let expected_fields = ["email", "brand", "model", "year"];

        for (c, field) in perturbed.iter().zip(expected_fields) {
            let outcome = validate(c);
            // brand perturbation also breaks the dependent model/year checks
            assert!(
                outcome.message_for(field).is_some(),
                "expected {field} error for {c:?}"
            );
            if field == "email" || field == "year" {
                assert_eq!(outcome.errors.len(), 1, "extra errors for {c:?}");
            }
        }
    }

    #[test]
    fn validate_is_idempotent() {
        let c = candidate("a@b.com", "Giant", "Nope", "2024");
        assert_eq!(validate(&c), validate(&c));
    }
}
