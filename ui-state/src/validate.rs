//! Declarative per-field form validation.
//!
//! A [`FormValidator`] is built once from a rule set and applied to the raw
//! string values of a form as often as needed. Rules compose left-to-right
//! per field; the first failing rule supplies that field's message.

/// A single validation requirement for one field.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Non-empty after trimming, with a message derived from the field label.
    Required,
    /// Non-empty after trimming, with a custom message.
    RequiredMsg(&'static str),
    /// At least this many characters.
    MinLength(usize),
    /// At least this many characters, with a custom message.
    MinLengthMsg(usize, &'static str),
}

impl Rule {
    /// The message for a failed check, or `None` if the value passes.
    fn check(&self, label: &str, value: &str) -> Option<String> {
        match self {
            Rule::Required => (value.trim().is_empty())
                .then(|| format!("{label} is required")),
            Rule::RequiredMsg(message) => {
                (value.trim().is_empty()).then(|| (*message).to_string())
            }
            Rule::MinLength(min) => (value.chars().count() < *min).then(|| {
                format!("{label} must be at least {min} characters")
            }),
            Rule::MinLengthMsg(min, message) => {
                (value.chars().count() < *min).then(|| (*message).to_string())
            }
        }
    }
}

/// Raw form values keyed by field name. Missing fields validate as empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldValues(Vec<(&'static str, String)>);

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(
        mut self,
        field: &'static str,
        value: impl Into<String>,
    ) -> Self {
        self.0.push((field, value.into()));
        self
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value.as_str())
    }
}

/// Messages for the fields that failed validation, in rule-set order.
/// Empty means the whole record is valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors(Vec<(&'static str, String)>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(name, message)| (*name, message.as_str()))
    }
}

struct FieldRules {
    name: &'static str,
    label: &'static str,
    rules: Vec<Rule>,
}

/// A reusable validator over a record of raw field values.
#[derive(Default)]
pub struct FormValidator {
    fields: Vec<FieldRules>,
}

impl FormValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field with its requirements. The label feeds the default
    /// messages of rules without a custom one.
    pub fn field(
        mut self,
        name: &'static str,
        label: &'static str,
        rules: Vec<Rule>,
    ) -> Self {
        self.fields.push(FieldRules { name, label, rules });
        self
    }

    /// Check every registered field, reporting the first failing rule per
    /// field. Fields absent from `values` are treated as empty, so this is
    /// safe to call on partial input.
    pub fn validate(&self, values: &FieldValues) -> ValidationErrors {
        let mut errors = Vec::new();
        for field in &self.fields {
            let value = values.get(field.name).unwrap_or_default();
            if let Some(message) = field
                .rules
                .iter()
                .find_map(|rule| rule.check(field.label, value))
            {
                errors.push((field.name, message));
            }
        }
        ValidationErrors(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> FormValidator {
        FormValidator::new()
            .field("name", "Name", vec![Rule::Required])
            .field(
                "bio",
                "Bio",
                vec![
                    Rule::RequiredMsg("Tell us about yourself"),
                    Rule::MinLength(5),
                ],
            )
            .field("nickname", "Nickname", vec![])
    }

    #[test]
    fn empty_record_fails_every_required_field() {
        let errors = validator().validate(&FieldValues::new());
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("bio"), Some("Tell us about yourself"));
        assert_eq!(errors.get("nickname"), None);
    }

    #[test]
    fn passing_fields_are_absent_from_the_result() {
        let values = FieldValues::new()
            .set("name", "Ada")
            .set("bio", "Writes programs");
        let errors = validator().validate(&values);
        assert!(errors.is_empty());
    }

    #[test]
    fn first_failing_rule_wins() {
        // Empty bio fails Required before MinLength sees it.
        let values = FieldValues::new().set("name", "Ada").set("bio", "");
        let errors = validator().validate(&values);
        assert_eq!(errors.get("bio"), Some("Tell us about yourself"));

        // Short bio passes Required, fails MinLength.
        let values = FieldValues::new().set("name", "Ada").set("bio", "hey");
        let errors = validator().validate(&values);
        assert_eq!(errors.get("bio"), Some("Bio must be at least 5 characters"));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let values = FieldValues::new().set("name", "   ");
        let errors = validator().validate(&values);
        assert_eq!(errors.get("name"), Some("Name is required"));
    }

    #[test]
    fn custom_min_length_message() {
        let validator = FormValidator::new().field(
            "code",
            "Code",
            vec![Rule::MinLengthMsg(4, "Code is too short")],
        );
        let values = FieldValues::new().set("code", "abc");
        assert_eq!(
            validator.validate(&values).get("code"),
            Some("Code is too short")
        );
    }
}
