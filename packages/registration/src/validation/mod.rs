//! Ordered field validation
//!
//! A [`RuleSet`] first rejects any empty required field, then walks its
//! rules in order and stops at the first one that fails. Every length bound
//! applies to the trimmed value, counted in UTF-16 code units as a browser
//! input reports it.

mod patterns;

use regex::Regex;

use crate::error::{ValidationFailure, Violation};
use crate::fields::{Field, RegistrationFields};

pub const MISSING_FIELDS_MESSAGE: &str = "Veuillez remplir tout les champs obligatoires !";

/// One check on one field
#[derive(Debug, Clone)]
pub struct Rule {
    pub field: Field,
    pub message: &'static str,
    max_len: Option<usize>,
    pattern: Option<&'static Regex>,
    skip_when_empty: bool,
}

impl Rule {
    pub fn new(field: Field, message: &'static str) -> Self {
        Self {
            field,
            message,
            max_len: None,
            pattern: None,
            skip_when_empty: false,
        }
    }

    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn pattern(mut self, pattern: &'static Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Empty values pass without being checked
    pub fn optional(mut self) -> Self {
        self.skip_when_empty = true;
        self
    }

    /// Check a trimmed value against this rule.
    pub fn check(&self, value: &str) -> Result<(), Violation> {
        if self.skip_when_empty && value.is_empty() {
            return Ok(());
        }

        if let Some(max_len) = self.max_len {
            if value.encode_utf16().count() > max_len {
                return Err(Violation::TooLong);
            }
        }

        match self.pattern {
            Some(pattern) if !pattern.is_match(value) => Err(Violation::BadFormat),
            _ => Ok(()),
        }
    }
}

/// The ordered checks run on every submit attempt
#[derive(Debug, Clone)]
pub struct RuleSet {
    required: Vec<Field>,
    missing_message: &'static str,
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build a rule set from its parts.
    pub fn new(required: Vec<Field>, missing_message: &'static str, rules: Vec<Rule>) -> Self {
        Self {
            required,
            missing_message,
            rules,
        }
    }

    /// Rules of the member registration form
    pub fn standard() -> Self {
        let rules = vec![
            Rule::new(Field::Username, "Le pseudonyme est trop grand").max_len(50),
            Rule::new(Field::LastName, "Le nom est trop grand ou est invalide")
                .max_len(50)
                .pattern(&patterns::LETTERS),
            Rule::new(Field::FirstName, "Le prénom est trop grand ou est invalide")
                .max_len(50)
                .pattern(&patterns::LETTERS),
            Rule::new(Field::PhoneNumber, "Le numéro de téléphone est invalide")
                .pattern(&patterns::PHONE_NUMBER)
                .optional(),
            Rule::new(
                Field::UnitNumber,
                "Le numéro de boite est trop grand ou est invalide",
            )
            .max_len(15)
            .pattern(&patterns::UNIT_NUMBER)
            .optional(),
            Rule::new(
                Field::BuildingNumber,
                "Le numéro de maison est trop grand ou est invalide",
            )
            .max_len(8)
            .pattern(&patterns::HOUSE_NUMBER),
            Rule::new(Field::Street, "Le nom de rue est trop grand ou est invalide")
                .max_len(50)
                .pattern(&patterns::LETTERS_AND_DASH),
            Rule::new(
                Field::Postcode,
                "Le numéro de code postal est trop grand ou est invalide",
            )
            .max_len(15)
            .pattern(&patterns::NUMBERS_AND_DASH),
            Rule::new(Field::Commune, "Le nom de commune est trop grand ou est invalide")
                .max_len(50)
                .pattern(&patterns::LETTERS_AND_DASH),
            Rule::new(Field::Country, "Le nom de pays est trop grand ou est invalide")
                .max_len(50)
                .pattern(&patterns::LETTERS_AND_DASH),
        ];

        Self::new(Field::required().to_vec(), MISSING_FIELDS_MESSAGE, rules)
    }

    /// Validate the form, stopping at the first failure.
    pub fn validate(&self, fields: &RegistrationFields) -> Result<(), ValidationFailure> {
        let missing: Vec<Field> = self
            .required
            .iter()
            .copied()
            .filter(|field| fields.trimmed(*field).is_empty())
            .collect();

        if !missing.is_empty() {
            return Err(ValidationFailure {
                fields: missing,
                violation: Violation::Missing,
                message: self.missing_message,
            });
        }

        for rule in &self.rules {
            if let Err(violation) = rule.check(fields.trimmed(rule.field)) {
                return Err(ValidationFailure {
                    fields: vec![rule.field],
                    violation,
                    message: rule.message,
                });
            }
        }

        Ok(())
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}
