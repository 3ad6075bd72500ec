use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Top-level registration category. The pathway drives which supplemental
/// fields are collected and which program choices are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationPathway {
    ExamPrep,
    ProfessionalCourse,
    Membership,
    Degree,
}

impl RegistrationPathway {
    pub const ALL: [RegistrationPathway; 4] = [
        RegistrationPathway::ExamPrep,
        RegistrationPathway::ProfessionalCourse,
        RegistrationPathway::Membership,
        RegistrationPathway::Degree,
    ];

    pub const fn title(self) -> &'static str {
        match self {
            RegistrationPathway::ExamPrep => "A/L ICT",
            RegistrationPathway::ProfessionalCourse => "Professional Courses",
            RegistrationPathway::Membership => "IVTC Membership",
            RegistrationPathway::Degree => "BIT Programs",
        }
    }

    pub const fn tags(self) -> &'static [&'static str] {
        match self {
            RegistrationPathway::ExamPrep => &["Local", "Cambridge"],
            RegistrationPathway::ProfessionalCourse => &["CCNA", "CompTIA"],
            RegistrationPathway::Membership => &["Network", "Community"],
            RegistrationPathway::Degree => &["Moratuwa", "Colombo"],
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            RegistrationPathway::ExamPrep => {
                "Master the syllabus with highest-ranked instructors."
            }
            RegistrationPathway::ProfessionalCourse => {
                "Accelerated industry programs for immediate impact."
            }
            RegistrationPathway::Membership => {
                "Join Sri Lanka's premier IT professional network."
            }
            RegistrationPathway::Degree => "University-affiliated degree pathways.",
        }
    }

    /// Program choices valid for this pathway. The option set is a static
    /// lookup keyed by variant; a draft's program must always come from the
    /// list of its current pathway.
    pub const fn programs(self) -> &'static [&'static str] {
        match self {
            RegistrationPathway::ExamPrep => &[
                "A/L ICT Regular",
                "A/L ICT Revision",
                "Practical Sessions",
                "Cambridge Syllabus",
            ],
            RegistrationPathway::ProfessionalCourse => &[
                "Software Engineering",
                "Data Science",
                "Cyber Security",
                "Cloud Computing",
                "Web Development",
                "Mobile App Development",
            ],
            RegistrationPathway::Membership => &[
                "General Membership",
                "Student Membership",
                "Professional Membership",
            ],
            RegistrationPathway::Degree => &[
                "BIT - University of Moratuwa",
                "BIT - University of Colombo",
                "Foundation Program",
                "Diploma Programs",
            ],
        }
    }

    /// Fields collected only for this pathway, on top of the core field set.
    pub const fn supplemental_fields(self) -> &'static [RegistrationField] {
        match self {
            RegistrationPathway::ExamPrep => {
                &[RegistrationField::School, RegistrationField::ExamYear]
            }
            _ => &[],
        }
    }
}

/// Form fields collected by the registration flow.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationField {
    FullName,
    NationalId,
    DateOfBirth,
    Gender,
    Phone,
    Email,
    AddressLine1,
    City,
    District,
    PostalCode,
    Program,
    School,
    ExamYear,
}

impl RegistrationField {
    /// Fields required for every pathway. School and exam year are pathway
    /// supplemental and governed by the intake policy.
    pub const REQUIRED: [RegistrationField; 11] = [
        RegistrationField::FullName,
        RegistrationField::NationalId,
        RegistrationField::DateOfBirth,
        RegistrationField::Gender,
        RegistrationField::Phone,
        RegistrationField::Email,
        RegistrationField::AddressLine1,
        RegistrationField::City,
        RegistrationField::District,
        RegistrationField::PostalCode,
        RegistrationField::Program,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            RegistrationField::FullName => "full_name",
            RegistrationField::NationalId => "national_id",
            RegistrationField::DateOfBirth => "date_of_birth",
            RegistrationField::Gender => "gender",
            RegistrationField::Phone => "phone",
            RegistrationField::Email => "email",
            RegistrationField::AddressLine1 => "address_line1",
            RegistrationField::City => "city",
            RegistrationField::District => "district",
            RegistrationField::PostalCode => "postal_code",
            RegistrationField::Program => "program",
            RegistrationField::School => "school",
            RegistrationField::ExamYear => "exam_year",
        }
    }
}

/// Administrative districts accepted by the address section.
pub const DISTRICTS: [&str; 25] = [
    "Colombo",
    "Gampaha",
    "Kalutara",
    "Kandy",
    "Matale",
    "Nuwara Eliya",
    "Galle",
    "Matara",
    "Hambantota",
    "Jaffna",
    "Mannar",
    "Vavuniya",
    "Mullaitivu",
    "Kilinochchi",
    "Batticaloa",
    "Ampara",
    "Trincomalee",
    "Kurunegala",
    "Puttalam",
    "Anuradhapura",
    "Polonnaruwa",
    "Badulla",
    "Moneragala",
    "Ratnapura",
    "Kegalle",
];

pub const GENDER_OPTIONS: [&str; 3] = ["Male", "Female", "Other"];

/// Exam sittings accepted for the exam-prep pathway.
pub const EXAM_YEARS: [&str; 3] = ["2024", "2025", "2026"];

/// In-progress, not-yet-submitted registration form state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationDraft {
    pub pathway: RegistrationPathway,
    #[serde(default)]
    pub fields: BTreeMap<RegistrationField, String>,
}

impl Default for RegistrationDraft {
    fn default() -> Self {
        Self::new(RegistrationPathway::ProfessionalCourse)
    }
}

impl RegistrationDraft {
    pub fn new(pathway: RegistrationPathway) -> Self {
        Self {
            pathway,
            fields: BTreeMap::new(),
        }
    }

    /// Replace the pathway discriminator. The chosen program is always
    /// discarded because option sets differ between pathways; every other
    /// entered field is preserved.
    pub fn select_pathway(&mut self, pathway: RegistrationPathway) {
        self.pathway = pathway;
        self.fields.remove(&RegistrationField::Program);
    }

    /// Set a single field. No cross-field derivation happens here; pathway
    /// transitions go through [`Self::select_pathway`].
    pub fn set(&mut self, field: RegistrationField, value: impl Into<String>) {
        self.fields.insert(field, value.into());
    }

    pub fn clear(&mut self, field: RegistrationField) {
        self.fields.remove(&field);
    }

    pub fn value_of(&self, field: RegistrationField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn program_options(&self) -> &'static [&'static str] {
        self.pathway.programs()
    }

    pub fn supplemental_fields(&self) -> &'static [RegistrationField] {
        self.pathway.supplemental_fields()
    }
}
