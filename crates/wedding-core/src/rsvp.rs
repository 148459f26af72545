//! RSVP Form Step Controller
//!
//! Three ordered steps, each gated by validation, ending in a submitted phase
//! that tracks whether the RSVP sink acknowledged the payload.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

pub const TOTAL_STEPS: u8 = 3;
pub const MIN_GUESTS: u32 = 1;
pub const MAX_GUESTS: u32 = 6;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email";
pub const SELECT_OPTION_MESSAGE: &str = "Please select an option";

/// Field names, shared with the form markup and the submitted payload.
pub mod field {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const ATTENDING: &str = "attending";
    pub const GUESTS: &str = "guests";
    pub const DIETARY: &str = "dietary";
    pub const ALLERGIES: &str = "allergies";
    pub const SONG: &str = "song";
    pub const MESSAGE: &str = "message";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Number,
    Choice,
    Select,
    TextArea,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub step: u8,
    pub kind: FieldKind,
    pub required: bool,
}

pub const RSVP_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: field::NAME, label: "Full name", step: 1, kind: FieldKind::Text, required: true },
    FieldSpec { name: field::EMAIL, label: "Email", step: 1, kind: FieldKind::Email, required: true },
    FieldSpec { name: field::PHONE, label: "Phone", step: 1, kind: FieldKind::Tel, required: false },
    FieldSpec { name: field::ATTENDING, label: "Will you attend?", step: 2, kind: FieldKind::Choice, required: false },
    FieldSpec { name: field::GUESTS, label: "Number of guests", step: 2, kind: FieldKind::Number, required: false },
    FieldSpec { name: field::DIETARY, label: "Dietary requirements", step: 3, kind: FieldKind::Select, required: false },
    FieldSpec { name: field::ALLERGIES, label: "Please describe the allergy", step: 3, kind: FieldKind::Text, required: false },
    FieldSpec { name: field::SONG, label: "A song that gets you dancing", step: 3, kind: FieldKind::Text, required: false },
    FieldSpec { name: field::MESSAGE, label: "Message for the couple", step: 3, kind: FieldKind::TextArea, required: false },
];

/// Mutually exclusive attendance answers (value, label).
pub const ATTENDING_CHOICES: &[(&str, &str)] = &[
    ("yes", "Joyfully accepts"),
    ("no", "Regretfully declines"),
];

/// Dietary select options (value, label).
pub const DIETARY_OPTIONS: &[(&str, &str)] = &[
    ("none", "No restrictions"),
    ("vegetarian", "Vegetarian"),
    ("vegan", "Vegan"),
    ("gluten-free", "Gluten-free"),
    ("allergy", "Allergy"),
];

pub fn fields_for_step(step: u8) -> impl Iterator<Item = &'static FieldSpec> {
    RSVP_FIELDS.iter().filter(move |spec| spec.step == step)
}

pub fn field_spec(name: &str) -> Option<&'static FieldSpec> {
    RSVP_FIELDS.iter().find(|spec| spec.name == name)
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

/// `local@domain.tld` with no whitespace and a single `@`.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"))
        .is_match(value)
}

/// Result of validating one step.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Validation {
    pub valid: bool,
    pub errors: BTreeMap<String, String>,
}

/// Why the RSVP sink did not acknowledge a payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    #[error("the RSVP service answered with status {0}")]
    Rejected(u16),
    #[error("could not reach the RSVP service: {0}")]
    Network(String),
    #[error("could not encode the RSVP: {0}")]
    Encode(String),
}

/// Immutable copy of the collected answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RsvpPayload(BTreeMap<String, String>);

impl RsvpPayload {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_attending(&self) -> bool {
        self.get(field::ATTENDING) == Some("yes")
    }

    pub fn thank_you_message(&self) -> String {
        let name = self.get(field::NAME).unwrap_or_default();
        if self.is_attending() {
            format!("Thank you, {name}! We're thrilled you'll be joining us. See you at the wedding!")
        } else {
            format!("Thank you, {name}, for letting us know. We'll miss you, but we appreciate your response!")
        }
    }
}

/// Delivery state of a submitted payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Pending,
    Confirmed,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitted { payload: RsvpPayload, delivery: Delivery },
}

/// Progress indicator state for one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
    Upcoming,
}

/// Owns the whole RSVP form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsvpController {
    current_step: u8,
    values: BTreeMap<String, String>,
    errors: BTreeMap<String, String>,
    phase: FormPhase,
}

impl Default for RsvpController {
    fn default() -> Self {
        Self::new()
    }
}

impl RsvpController {
    pub fn new() -> Self {
        let mut values = BTreeMap::new();
        values.insert(field::GUESTS.to_string(), MIN_GUESTS.to_string());
        values.insert(field::DIETARY.to_string(), DIETARY_OPTIONS[0].0.to_string());
        Self {
            current_step: 1,
            values,
            errors: BTreeMap::new(),
            phase: FormPhase::Editing,
        }
    }

    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.phase, FormPhase::Submitted { .. })
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or_default()
    }

    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    pub fn step_status(&self, step: u8) -> StepStatus {
        if step < self.current_step {
            StepStatus::Completed
        } else if step == self.current_step {
            StepStatus::Active
        } else {
            StepStatus::Upcoming
        }
    }

    /// Guest count is only asked for when the guest is attending.
    pub fn guests_visible(&self) -> bool {
        self.value(field::ATTENDING) == "yes"
    }

    pub fn allergies_visible(&self) -> bool {
        self.value(field::DIETARY) == "allergy"
    }

    pub fn guests(&self) -> u32 {
        self.value(field::GUESTS).trim().parse().unwrap_or(MIN_GUESTS)
    }

    pub fn increment_guests(&mut self) {
        let guests = self.guests();
        if guests < MAX_GUESTS {
            self.set_value(field::GUESTS, (guests + 1).to_string());
        }
    }

    pub fn decrement_guests(&mut self) {
        let guests = self.guests();
        if guests > MIN_GUESTS {
            self.set_value(field::GUESTS, (guests - 1).to_string());
        }
    }

    /// Check one step against the current values. Does not record anything.
    pub fn validate(&self, step: u8) -> Validation {
        let mut errors = BTreeMap::new();

        for spec in fields_for_step(step).filter(|spec| spec.required) {
            let value = self.value(spec.name).trim();
            if value.is_empty() {
                errors.insert(spec.name.to_string(), REQUIRED_MESSAGE.to_string());
            } else if spec.kind == FieldKind::Email && !is_valid_email(value) {
                errors.insert(spec.name.to_string(), INVALID_EMAIL_MESSAGE.to_string());
            }
        }

        if step == 2 {
            let selected = ATTENDING_CHOICES
                .iter()
                .filter(|(choice, _)| self.value(field::ATTENDING) == *choice)
                .count();
            if selected != 1 {
                errors.insert(field::ATTENDING.to_string(), SELECT_OPTION_MESSAGE.to_string());
            }
        }

        Validation { valid: errors.is_empty(), errors }
    }

    /// Replace the recorded errors for `step` with a fresh validation.
    fn record_validation(&mut self, step: u8) -> bool {
        let validation = self.validate(step);
        for spec in fields_for_step(step) {
            self.errors.remove(spec.name);
        }
        self.errors.extend(validation.errors);
        validation.valid
    }

    /// Move to the next step if the current one validates. Returns whether the step changed.
    pub fn advance(&mut self) -> bool {
        if self.is_submitted() || !self.record_validation(self.current_step) {
            return false;
        }
        if self.current_step < TOTAL_STEPS {
            self.current_step += 1;
            return true;
        }
        false
    }

    pub fn retreat(&mut self) {
        if !self.is_submitted() && self.current_step > 1 {
            self.current_step -= 1;
        }
    }

    /// Validate the final step and capture the payload.
    ///
    /// Returns `None` when not on the last step, already submitted, or invalid.
    pub fn submit(&mut self) -> Option<RsvpPayload> {
        if self.is_submitted() || self.current_step != TOTAL_STEPS {
            return None;
        }
        if !self.record_validation(self.current_step) {
            return None;
        }

        let payload: BTreeMap<String, String> = RSVP_FIELDS
            .iter()
            .map(|spec| (spec.name.to_string(), self.value(spec.name).trim().to_string()))
            .collect();
        let payload = RsvpPayload(payload);
        self.phase = FormPhase::Submitted { payload: payload.clone(), delivery: Delivery::Pending };
        Some(payload)
    }

    /// Record what the sink said about the submitted payload.
    pub fn record_delivery(&mut self, outcome: Result<(), SinkError>) {
        if let FormPhase::Submitted { delivery, .. } = &mut self.phase {
            *delivery = match outcome {
                Ok(()) => Delivery::Confirmed,
                Err(e) => Delivery::Failed(e.to_string()),
            };
        }
    }

    /// Payload to resend after a failed delivery. Marks delivery pending again.
    pub fn retry(&mut self) -> Option<RsvpPayload> {
        match &mut self.phase {
            FormPhase::Submitted { payload, delivery } if matches!(delivery, Delivery::Failed(_)) => {
                *delivery = Delivery::Pending;
                Some(payload.clone())
            }
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_controller() -> RsvpController {
        let mut form = RsvpController::new();
        form.set_value(field::NAME, "Ada Lovelace");
        form.set_value(field::EMAIL, "ada@example.com");
        assert!(form.advance());
        form.set_value(field::ATTENDING, "yes");
        assert!(form.advance());
        form
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("guest@example.com"));
        assert!(is_valid_email("a.b@c.d.e"));
        assert!(!is_valid_email("guest@example"));
        assert!(!is_valid_email("guest example@x.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("a@@b.com"));
    }

    #[test]
    fn required_fields_block_advance() {
        let mut form = RsvpController::new();
        form.set_value(field::NAME, "   ");
        assert!(!form.advance());
        assert_eq!(form.current_step(), 1);
        assert_eq!(form.error(field::NAME), Some(REQUIRED_MESSAGE));
        assert_eq!(form.error(field::EMAIL), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn invalid_email_reports_its_own_message() {
        let mut form = RsvpController::new();
        form.set_value(field::NAME, "Ada");
        form.set_value(field::EMAIL, "not-an-email");
        assert!(!form.advance());
        assert_eq!(form.error(field::EMAIL), Some(INVALID_EMAIL_MESSAGE));
        assert_eq!(form.error(field::NAME), None);
    }

    #[test]
    fn fixing_a_field_clears_its_error_on_next_advance() {
        let mut form = RsvpController::new();
        form.set_value(field::NAME, "Ada");
        assert!(!form.advance());
        form.set_value(field::EMAIL, "ada@example.com");
        assert!(form.advance());
        assert!(form.errors().is_empty());
        assert_eq!(form.current_step(), 2);
    }

    #[test]
    fn step_two_needs_attendance() {
        let mut form = RsvpController::new();
        form.set_value(field::NAME, "Ada");
        form.set_value(field::EMAIL, "ada@example.com");
        form.advance();
        assert!(!form.advance());
        assert_eq!(form.error(field::ATTENDING), Some(SELECT_OPTION_MESSAGE));

        form.set_value(field::ATTENDING, "maybe");
        assert!(!form.validate(2).valid);
    }

    #[test]
    fn validate_is_pure() {
        let form = RsvpController::new();
        let first = form.validate(1);
        let second = form.validate(1);
        assert_eq!(first, second);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn retreat_clamps_at_first_step_and_skips_validation() {
        let mut form = RsvpController::new();
        form.retreat();
        assert_eq!(form.current_step(), 1);

        let mut form = filled_controller();
        form.set_value(field::NAME, "");
        form.retreat();
        assert_eq!(form.current_step(), 2);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn advance_clamps_at_last_step() {
        let mut form = filled_controller();
        assert_eq!(form.current_step(), TOTAL_STEPS);
        assert!(!form.advance());
        assert_eq!(form.current_step(), TOTAL_STEPS);
    }

    #[test]
    fn progress_statuses() {
        let form = filled_controller();
        assert_eq!(form.step_status(1), StepStatus::Completed);
        assert_eq!(form.step_status(3), StepStatus::Active);
        assert_eq!(RsvpController::new().step_status(2), StepStatus::Upcoming);
    }

    #[test]
    fn submit_only_from_last_step() {
        let mut form = RsvpController::new();
        assert!(form.submit().is_none());
        assert!(!form.is_submitted());
    }

    #[test]
    fn submit_captures_payload_and_waits_for_delivery() {
        let mut form = filled_controller();
        form.set_value(field::SONG, "  September  ");
        let payload = form.submit().expect("valid form submits");

        assert_eq!(payload.get(field::NAME), Some("Ada Lovelace"));
        assert_eq!(payload.get(field::SONG), Some("September"));
        assert_eq!(payload.get(field::GUESTS), Some("1"));
        assert!(payload.is_attending());
        assert_eq!(
            form.phase(),
            &FormPhase::Submitted { payload: payload.clone(), delivery: Delivery::Pending }
        );

        // Further edits do not leak into the captured payload.
        form.set_value(field::NAME, "Someone Else");
        let FormPhase::Submitted { payload: kept, .. } = form.phase() else { panic!("not submitted") };
        assert_eq!(kept.get(field::NAME), Some("Ada Lovelace"));
    }

    #[test]
    fn failed_delivery_can_be_retried() {
        let mut form = filled_controller();
        let payload = form.submit().unwrap();
        assert!(form.retry().is_none());

        form.record_delivery(Err(SinkError::Rejected(500)));
        assert!(matches!(form.phase(), FormPhase::Submitted { delivery: Delivery::Failed(_), .. }));

        assert_eq!(form.retry(), Some(payload));
        form.record_delivery(Ok(()));
        assert!(matches!(form.phase(), FormPhase::Submitted { delivery: Delivery::Confirmed, .. }));
    }

    #[test]
    fn reset_returns_to_a_blank_first_step() {
        let mut form = filled_controller();
        form.submit();
        form.reset();
        assert_eq!(form, RsvpController::new());
        assert_eq!(form.value(field::NAME), "");
    }

    #[test]
    fn untouched_dietary_submits_the_shown_default() {
        let mut form = filled_controller();
        let payload = form.submit().expect("valid form submits");
        assert_eq!(payload.get(field::DIETARY), Some("none"));
        assert!(!form.allergies_visible());
    }

    #[test]
    fn guest_counter_is_clamped() {
        let mut form = RsvpController::new();
        form.decrement_guests();
        assert_eq!(form.guests(), MIN_GUESTS);
        for _ in 0..10 {
            form.increment_guests();
        }
        assert_eq!(form.guests(), MAX_GUESTS);

        form.set_value(field::GUESTS, "lots");
        form.increment_guests();
        assert_eq!(form.guests(), 2);
    }

    #[test]
    fn conditional_fields() {
        let mut form = RsvpController::new();
        assert!(!form.guests_visible());
        form.set_value(field::ATTENDING, "yes");
        assert!(form.guests_visible());
        form.set_value(field::DIETARY, "allergy");
        assert!(form.allergies_visible());
    }

    #[test]
    fn thank_you_depends_on_attendance() {
        let mut form = filled_controller();
        let payload = form.submit().unwrap();
        assert!(payload.thank_you_message().starts_with("Thank you, Ada Lovelace! We're thrilled"));

        let mut form = RsvpController::new();
        form.set_value(field::NAME, "Bob");
        form.set_value(field::EMAIL, "bob@example.com");
        form.advance();
        form.set_value(field::ATTENDING, "no");
        form.advance();
        let payload = form.submit().unwrap();
        assert!(payload.thank_you_message().contains("We'll miss you"));
    }
}
