use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{
    RegistrationDraft, RegistrationField, RegistrationPathway, DISTRICTS, EXAM_YEARS,
    GENDER_OPTIONS,
};

/// Structurally complete registration. Produced only by
/// [`IntakePolicy::validate`], so downstream collaborators never see a partial
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedRegistration {
    pub pathway: RegistrationPathway,
    pub full_name: String,
    pub national_id: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub address_line1: String,
    pub city: String,
    pub district: String,
    pub postal_code: String,
    pub program: String,
    pub school: Option<String>,
    pub exam_year: Option<String>,
}

/// Missing or invalid fields keeping a draft from submission. Recoverable: the
/// caller re-prompts for exactly these fields and tries again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncompleteDraft {
    pub fields: Vec<RegistrationField>,
}

impl IncompleteDraft {
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|field| field.name()).collect()
    }
}

impl fmt::Display for IncompleteDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "registration draft incomplete: {}",
            self.field_names().join(", ")
        )
    }
}

impl std::error::Error for IncompleteDraft {}

/// Intake validation rules. The only dial is whether the exam-prep pathway
/// must also carry school and exam year; by default they stay optional,
/// matching the live registration form.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntakePolicy {
    require_exam_details: bool,
}

impl IntakePolicy {
    pub fn new(require_exam_details: bool) -> Self {
        Self {
            require_exam_details,
        }
    }

    pub fn require_exam_details(&self) -> bool {
        self.require_exam_details
    }

    /// Check a draft for submission. Every required field must be non-empty,
    /// enumerated fields must hold a known option, and the program must come
    /// from the current pathway's list. All problems are reported at once.
    pub fn validate(
        &self,
        draft: &RegistrationDraft,
    ) -> Result<ValidatedRegistration, IncompleteDraft> {
        let mut problems = Vec::new();

        let full_name = required(draft, RegistrationField::FullName, &mut problems);
        let national_id = required(draft, RegistrationField::NationalId, &mut problems);
        let phone = required(draft, RegistrationField::Phone, &mut problems);
        let email = required(draft, RegistrationField::Email, &mut problems);
        let address_line1 = required(draft, RegistrationField::AddressLine1, &mut problems);
        let city = required(draft, RegistrationField::City, &mut problems);
        let postal_code = required(draft, RegistrationField::PostalCode, &mut problems);

        let date_of_birth = required(draft, RegistrationField::DateOfBirth, &mut problems)
            .and_then(|raw| match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    problems.push(RegistrationField::DateOfBirth);
                    None
                }
            });

        let gender = required(draft, RegistrationField::Gender, &mut problems).and_then(|value| {
            if GENDER_OPTIONS.contains(&value.as_str()) {
                Some(value)
            } else {
                problems.push(RegistrationField::Gender);
                None
            }
        });

        let district =
            required(draft, RegistrationField::District, &mut problems).and_then(|value| {
                if DISTRICTS.contains(&value.as_str()) {
                    Some(value)
                } else {
                    problems.push(RegistrationField::District);
                    None
                }
            });

        let program = required(draft, RegistrationField::Program, &mut problems).and_then(|value| {
            if draft.program_options().contains(&value.as_str()) {
                Some(value)
            } else {
                problems.push(RegistrationField::Program);
                None
            }
        });

        let exam_prep = draft.pathway == RegistrationPathway::ExamPrep;

        let school = if exam_prep {
            let value = trimmed(draft, RegistrationField::School);
            if value.is_none() && self.require_exam_details {
                problems.push(RegistrationField::School);
            }
            value
        } else {
            None
        };

        let exam_year = if exam_prep {
            let value = trimmed(draft, RegistrationField::ExamYear);
            match &value {
                Some(year) if !EXAM_YEARS.contains(&year.as_str()) => {
                    problems.push(RegistrationField::ExamYear);
                }
                None if self.require_exam_details => {
                    problems.push(RegistrationField::ExamYear);
                }
                _ => {}
            }
            value
        } else {
            None
        };

        if !problems.is_empty() {
            return Err(IncompleteDraft { fields: problems });
        }

        // Reaching here means every required Option above is Some.
        Ok(ValidatedRegistration {
            pathway: draft.pathway,
            full_name: full_name.unwrap_or_default(),
            national_id: national_id.unwrap_or_default(),
            date_of_birth: date_of_birth.unwrap_or_default(),
            gender: gender.unwrap_or_default(),
            phone: phone.unwrap_or_default(),
            email: email.unwrap_or_default(),
            address_line1: address_line1.unwrap_or_default(),
            city: city.unwrap_or_default(),
            district: district.unwrap_or_default(),
            postal_code: postal_code.unwrap_or_default(),
            program: program.unwrap_or_default(),
            school,
            exam_year,
        })
    }
}

fn trimmed(draft: &RegistrationDraft, field: RegistrationField) -> Option<String> {
    draft
        .value_of(field)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn required(
    draft: &RegistrationDraft,
    field: RegistrationField,
    problems: &mut Vec<RegistrationField>,
) -> Option<String> {
    let value = trimmed(draft, field);
    if value.is_none() {
        problems.push(field);
    }
    value
}
