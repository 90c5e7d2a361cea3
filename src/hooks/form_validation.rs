use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use regex::Regex;
use yew::prelude::*;

use crate::utils::security::strip_scripts;

pub type FormValues = BTreeMap<String, String>;
pub type Validator = Rc<dyn Fn(&str) -> bool>;

/// Declarative checks for one field. Evaluated in the order
/// required, pattern, min_length, max_length, min, max, custom.
#[derive(Clone, Default)]
pub struct Rule {
    pub required: bool,
    pub pattern: Option<Regex>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub custom: Option<Validator>,
    pub message: Option<String>,
}

impl Rule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn pattern(mut self, pattern: &Regex) -> Self {
        self.pattern = Some(pattern.clone());
        self
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn custom<F>(mut self, check: F) -> Self
    where
        F: Fn(&str) -> bool + 'static,
    {
        self.custom = Some(Rc::new(check));
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// First failing check's message, or `None` when `value` passes.
    pub fn check(&self, field: &str, value: &str) -> Option<String> {
        let fail = |default: String| Some(self.message.clone().unwrap_or(default));
        let len = value.chars().count();

        if self.required && value.trim().is_empty() {
            return fail(format!("{} es requerido", field));
        }
        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(value) {
                return fail(format!("{} tiene un formato inválido", field));
            }
        }
        if let Some(min_length) = self.min_length {
            if len < min_length {
                return fail(format!("{} debe tener al menos {} caracteres", field, min_length));
            }
        }
        if let Some(max_length) = self.max_length {
            if len > max_length {
                return fail(format!("{} no puede exceder {} caracteres", field, max_length));
            }
        }
        if let Some(min) = self.min {
            if !parse_number(value).map_or(false, |n| n >= min) {
                return fail(format!("{} debe ser al menos {}", field, min));
            }
        }
        if let Some(max) = self.max {
            if !parse_number(value).map_or(false, |n| n <= max) {
                return fail(format!("{} no puede ser mayor a {}", field, max));
            }
        }
        if let Some(custom) = &self.custom {
            if !custom(value) {
                return fail(format!("{} no es válido", field));
            }
        }
        None
    }
}

/// Non-numeric text fails `min`/`max` instead of slipping through, so a
/// numeric rule also rejects letters.
fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

pub type ValidationRules = BTreeMap<String, Rule>;

/// Form state machine: values, per-field errors and touched flags.
#[derive(Clone)]
pub struct FormValidator {
    rules: Rc<ValidationRules>,
    initial: FormValues,
    values: FormValues,
    errors: BTreeMap<String, String>,
    touched: BTreeSet<String>,
}

impl FormValidator {
    pub fn new(initial: FormValues, rules: ValidationRules) -> Self {
        Self {
            rules: Rc::new(rules),
            values: initial.clone(),
            initial,
            errors: BTreeMap::new(),
            touched: BTreeSet::new(),
        }
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    fn validate_field(&self, field: &str) -> Option<String> {
        let rule = self.rules.get(field)?;
        // A field with rules but no value slot in the form is not checked
        let value = self.values.get(field)?;
        rule.check(field, value)
    }

    fn store_error(&mut self, field: &str) {
        match self.validate_field(field) {
            Some(message) => {
                self.errors.insert(field.to_string(), message);
            }
            None => {
                self.errors.remove(field);
            }
        }
    }

    pub fn handle_change(&mut self, field: &str, value: &str) {
        self.values.insert(field.to_string(), strip_scripts(value));
        if self.touched.contains(field) {
            self.store_error(field);
        }
    }

    pub fn handle_blur(&mut self, field: &str) {
        self.touched.insert(field.to_string());
        self.store_error(field);
    }

    pub fn validate_all(&mut self) -> bool {
        let errors: BTreeMap<String, String> = self
            .rules
            .keys()
            .filter_map(|field| self.validate_field(field).map(|e| (field.clone(), e)))
            .collect();

        self.touched = self.rules.keys().cloned().collect();
        let valid = errors.is_empty();
        self.errors = errors;
        valid
    }

    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.errors.clear();
        self.touched.clear();
    }

    /// Overwrites the given fields without sanitizing, for text the app
    /// generated itself. Fields not in `values` keep their current value.
    pub fn set_values(&mut self, values: FormValues) {
        for (field, value) in values {
            let touched = self.touched.contains(&field);
            self.values.insert(field.clone(), value);
            if touched {
                self.store_error(&field);
            }
        }
    }
}

#[derive(Clone)]
pub struct UseFormValidationHandle {
    inner: Rc<RefCell<FormValidator>>,
    force_update: UseForceUpdateHandle,
}

impl UseFormValidationHandle {
    fn mutate<R>(&self, f: impl FnOnce(&mut FormValidator) -> R) -> R {
        let result = {
            let mut form = self.inner.borrow_mut();
            f(&mut *form)
        };
        self.force_update.force_update();
        result
    }

    pub fn value(&self, field: &str) -> String {
        self.inner.borrow().value(field).to_string()
    }

    pub fn values(&self) -> FormValues {
        self.inner.borrow().values().clone()
    }

    pub fn error(&self, field: &str) -> Option<String> {
        self.inner.borrow().error(field).map(str::to_string)
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.inner.borrow().is_touched(field)
    }

    pub fn handle_change(&self, field: &str, value: &str) {
        self.mutate(|form| form.handle_change(field, value));
    }

    pub fn handle_blur(&self, field: &str) {
        self.mutate(|form| form.handle_blur(field));
    }

    pub fn validate_all(&self) -> bool {
        self.mutate(FormValidator::validate_all)
    }

    pub fn reset(&self) {
        self.mutate(FormValidator::reset);
    }

    pub fn set_values(&self, values: FormValues) {
        self.mutate(move |form| form.set_values(values));
    }
}

/// Form state that survives re-renders; every mutation schedules one.
#[hook]
pub fn use_form_validation<I, R>(initial: I, rules: R) -> UseFormValidationHandle
where
    I: FnOnce() -> FormValues + 'static,
    R: FnOnce() -> ValidationRules + 'static,
{
    let inner = use_mut_ref(move || FormValidator::new(initial(), rules()));
    let force_update = use_force_update();
    UseFormValidationHandle { inner, force_update }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::security::EMAIL_PATTERN;

    fn values(pairs: &[(&str, &str)]) -> FormValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn contact_form() -> FormValidator {
        let mut rules = ValidationRules::new();
        rules.insert("nombre".into(), Rule::new().required());
        rules.insert(
            "email".into(),
            Rule::new().required().pattern(&EMAIL_PATTERN).message("Email inválido"),
        );
        rules.insert("pasajeros".into(), Rule::new().min(1.0).max(50.0));
        FormValidator::new(
            values(&[("nombre", ""), ("email", ""), ("pasajeros", "1"), ("notas", "")]),
            rules,
        )
    }

    #[test]
    fn required_error_clears_once_touched_field_is_filled() {
        let mut form = contact_form();
        form.handle_blur("nombre");
        assert_eq!(form.error("nombre"), Some("nombre es requerido"));

        form.handle_change("nombre", "x");
        assert_eq!(form.error("nombre"), None);
    }

    #[test]
    fn untouched_field_is_not_revalidated_on_change() {
        let mut form = contact_form();
        form.handle_change("email", "not-an-email");
        assert_eq!(form.error("email"), None);

        form.handle_blur("email");
        assert_eq!(form.error("email"), Some("Email inválido"));
    }

    #[test]
    fn whitespace_only_fails_required() {
        let rule = Rule::new().required();
        assert!(rule.check("nombre", "   ").is_some());
    }

    #[test]
    fn rule_order_reports_first_failure_only() {
        let rule = Rule::new().required().min_length(3).max_length(5);
        assert_eq!(rule.check("c", ""), Some("c es requerido".into()));
        assert_eq!(rule.check("c", "ab"), Some("c debe tener al menos 3 caracteres".into()));
        assert_eq!(rule.check("c", "abcdef"), Some("c no puede exceder 5 caracteres".into()));
        assert_eq!(rule.check("c", "abcd"), None);
    }

    #[test]
    fn numeric_bounds() {
        let rule = Rule::new().min(1.0).max(50.0);
        assert_eq!(rule.check("p", "0"), Some("p debe ser al menos 1".into()));
        assert_eq!(rule.check("p", "51"), Some("p no puede ser mayor a 50".into()));
        assert_eq!(rule.check("p", "12"), None);
        assert!(rule.check("p", "doce").is_some());
    }

    #[test]
    fn custom_check_runs_last() {
        let rule = Rule::new().max_length(2).custom(|v| v == "ok");
        assert_eq!(rule.check("f", "toolong"), Some("f no puede exceder 2 caracteres".into()));
        assert_eq!(rule.check("f", "no"), Some("f no es válido".into()));
        assert_eq!(rule.check("f", "ok"), None);
    }

    #[test]
    fn change_strips_script_blocks() {
        let mut form = contact_form();
        form.handle_change("notas", "hola<script>alert('x')</script>");
        assert_eq!(form.value("notas"), "hola");
    }

    #[test]
    fn validate_all_touches_every_rule_field() {
        let mut form = contact_form();
        assert!(!form.validate_all());
        assert!(form.is_touched("nombre"));
        assert!(form.is_touched("email"));
        assert!(form.is_touched("pasajeros"));
        assert!(!form.is_touched("notas"));
        assert!(form.error("nombre").is_some());
        assert!(form.error("pasajeros").is_none());

        form.handle_change("nombre", "Juan");
        form.handle_change("email", "juan@example.com");
        assert!(form.validate_all());
        assert!(form.error("email").is_none());
    }

    #[test]
    fn rule_without_value_slot_passes() {
        let mut rules = ValidationRules::new();
        rules.insert("fantasma".into(), Rule::new().required());
        let mut form = FormValidator::new(values(&[("nombre", "")]), rules);
        assert!(form.validate_all());
        assert_eq!(form.error("fantasma"), None);
    }

    #[test]
    fn fields_without_rules_are_never_validated() {
        let mut form = contact_form();
        form.handle_blur("notas");
        assert_eq!(form.error("notas"), None);
    }

    #[test]
    fn set_values_merges_and_revalidates_touched_fields() {
        let mut form = contact_form();
        form.handle_blur("email");
        assert!(form.error("email").is_some());

        form.set_values(values(&[("email", "ana@example.com"), ("notas", "<b>hola</b>")]));
        assert_eq!(form.error("email"), None);
        assert_eq!(form.value("notas"), "<b>hola</b>");
        assert_eq!(form.value("pasajeros"), "1");
    }

    #[test]
    fn non_numeric_text_fails_range_rules() {
        let rule = Rule::new().min(1.0).max(50.0);
        assert_eq!(rule.check("pasajeros", "abc"), Some("pasajeros debe ser al menos 1".to_string()));
        assert_eq!(rule.check("pasajeros", "7"), None);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut form = contact_form();
        form.handle_change("nombre", "Ana");
        form.handle_blur("email");
        form.validate_all();

        form.reset();
        let first = (form.values().clone(), form.error("email").map(str::to_string), form.is_touched("email"));
        form.reset();
        let second = (form.values().clone(), form.error("email").map(str::to_string), form.is_touched("email"));

        assert_eq!(first, second);
        assert_eq!(form.value("nombre"), "");
        assert_eq!(first.1, None);
        assert!(!first.2);
    }
}
