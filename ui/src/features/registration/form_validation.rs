use chrono::{Datelike, NaiveDate};

use crate::features::registration::rules::{FieldRule, FormRules, Rule};
use crate::features::registration::types::*;

/// Date format produced by `<input type="date">`
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), BIRTH_DATE_FORMAT).ok()
}

/// Age as the difference of calendar years; month and day are ignored
pub fn age_in_years(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    today.year() - birth_date.year()
}

/// Runs the field's active rules in stage order and returns the first failing message
pub fn validate_field(
    field: FieldName,
    values: &FormValues,
    rules: &FormRules,
    today: NaiveDate,
) -> Option<String> {
    let field_rules = rules.rules_for(field, values);
    let required = field_rules
        .iter()
        .any(|field_rule| matches!(field_rule.rule, Rule::Required));

    if !required && is_empty(field, values) {
        return None;
    }

    field_rules
        .into_iter()
        .find(|field_rule| !rule_passes(field_rule, field, values, today))
        .map(|field_rule| field_rule.message)
}

/// One validation pass over every active field
pub fn validate_all(values: &FormValues, rules: &FormRules, today: NaiveDate) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in FieldName::ALL {
        if rules.is_active(field, values) {
            errors.set(field, validate_field(field, values, rules, today));
        }
    }
    errors
}

fn is_empty(field: FieldName, values: &FormValues) -> bool {
    match values.flag(field) {
        Some(flag) => !flag,
        None => values.text(field).unwrap_or_default().is_empty(),
    }
}

fn rule_passes(field_rule: &FieldRule, field: FieldName, values: &FormValues, today: NaiveDate) -> bool {
    let text = values.text(field).unwrap_or_default();

    match &field_rule.rule {
        Rule::Required => !is_empty(field, values),
        Rule::MinLength(min) => text.chars().count() >= *min,
        Rule::MaxLength(max) => text.chars().count() <= *max,
        Rule::Pattern(pattern) => pattern.is_match(text),
        Rule::Date => parse_birth_date(text).is_some(),
        // Unparsable dates are reported by `Rule::Date`
        Rule::MinimumAge(minimum) => parse_birth_date(text)
            .map(|birth_date| age_in_years(birth_date, today) >= *minimum)
            .unwrap_or(true),
        Rule::MatchesField(other) => values.text(*other) == Some(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::config::RegistrationConfig;

    fn rules() -> FormRules {
        FormRules::from_config(&RegistrationConfig::default()).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    fn check(field: FieldName, values: &FormValues) -> Option<String> {
        validate_field(field, values, &rules(), today())
    }

    #[test]
    fn test_name_length_bounds() {
        let mut values = FormValues::default();

        values.name = "A".to_string();
        assert_eq!(
            check(FieldName::Name, &values).as_deref(),
            Some("Name must be at least 2 characters")
        );

        for len in 2..=20 {
            values.name = "n".repeat(len);
            assert_eq!(check(FieldName::Name, &values), None, "length {}", len);
        }

        values.name = "n".repeat(21);
        assert_eq!(
            check(FieldName::Name, &values).as_deref(),
            Some("Name must not exceed 20 characters")
        );
    }

    #[test]
    fn test_name_length_counts_characters_not_bytes() {
        let mut values = FormValues::default();
        values.name = "Ñá".to_string();
        assert_eq!(check(FieldName::Name, &values), None);
    }

    #[test]
    fn test_required_short_circuits() {
        let values = FormValues::default();
        assert_eq!(check(FieldName::Name, &values).as_deref(), Some("Name is required"));
        assert_eq!(
            check(FieldName::ConfirmPassword, &values).as_deref(),
            Some("Password confirmation is required")
        );
        assert_eq!(
            check(FieldName::BirthDate, &values).as_deref(),
            Some("Birth date is required")
        );
    }

    #[test]
    fn test_whitespace_is_not_missing() {
        let mut values = FormValues::default();
        values.name = "  ".to_string();
        assert_eq!(check(FieldName::Name, &values), None);

        values.password = "      ".to_string();
        assert_eq!(check(FieldName::Password, &values), None);

        values.name = " ".to_string();
        assert_eq!(
            check(FieldName::Name, &values).as_deref(),
            Some("Name must be at least 2 characters")
        );
    }

    #[test]
    fn test_email_pattern() {
        let mut values = FormValues::default();

        for valid in ["a@b.com", "first.last+tag@mail-host.co.uk", "x_y@d.io"] {
            values.email = valid.to_string();
            assert_eq!(check(FieldName::Email, &values), None, "{}", valid);
        }

        for invalid in ["plain", "a@b", "a@@b.com", "a b@c.com", "@b.com", "a@b.c om"] {
            values.email = invalid.to_string();
            assert_eq!(
                check(FieldName::Email, &values).as_deref(),
                Some("Email is not valid"),
                "{}",
                invalid
            );
        }
    }

    #[test]
    fn test_age_uses_calendar_years_only() {
        let mut values = FormValues::default();

        // Turns 18 in December 2026; already counts as of age in March
        values.birth_date = "2008-12-31".to_string();
        assert_eq!(check(FieldName::BirthDate, &values), None);

        values.birth_date = "2009-01-01".to_string();
        assert_eq!(
            check(FieldName::BirthDate, &values).as_deref(),
            Some("You must be of age")
        );

        values.birth_date = "1990-06-01".to_string();
        assert_eq!(check(FieldName::BirthDate, &values), None);
    }

    #[test]
    fn test_unparsable_birth_date() {
        let mut values = FormValues::default();
        values.birth_date = "2008-02-30".to_string();
        assert_eq!(
            check(FieldName::BirthDate, &values).as_deref(),
            Some("Birth date is not a valid date")
        );
    }

    #[test]
    fn test_age_in_years() {
        let birth = NaiveDate::from_ymd_opt(2000, 12, 31).unwrap();
        let today = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
        assert_eq!(age_in_years(birth, today), 18);
    }

    #[test]
    fn test_confirm_password_reads_live_password() {
        let mut values = FormValues::default();
        values.password = "secret1".to_string();
        values.confirm_password = "secret1".to_string();
        assert_eq!(check(FieldName::ConfirmPassword, &values), None);

        values.password = "secret2".to_string();
        assert_eq!(
            check(FieldName::ConfirmPassword, &values).as_deref(),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn test_confirm_length_checked_before_match() {
        let mut values = FormValues::default();
        values.password = "secret1".to_string();
        values.confirm_password = "abc".to_string();
        assert_eq!(
            check(FieldName::ConfirmPassword, &values).as_deref(),
            Some("Password confirmation must be at least 6 characters")
        );
    }

    #[test]
    fn test_terms_must_be_accepted() {
        let mut values = FormValues::default();
        assert_eq!(
            check(FieldName::AcceptedTerms, &values).as_deref(),
            Some("You must accept the terms and conditions")
        );
        values.accepted_terms = true;
        assert_eq!(check(FieldName::AcceptedTerms, &values), None);
    }

    #[test]
    fn test_validate_all_skips_inactive_province() {
        let mut values = FormValues::default();
        let errors = validate_all(&values, &rules(), today());
        assert_eq!(errors.get(FieldName::Province), None);
        assert_eq!(errors.get(FieldName::FileName), None);
        assert_eq!(errors.len(), 6);

        values.country = Country::Ar;
        let errors = validate_all(&values, &rules(), today());
        assert_eq!(errors.get(FieldName::Province), Some("Province is required"));
    }
}
