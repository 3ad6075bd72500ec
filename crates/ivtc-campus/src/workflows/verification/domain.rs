use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Base address echoed back with every verified credential.
pub const VERIFICATION_BASE_URL: &str = "https://ivtc.lk/verify";

/// Facts attested by a successful certificate lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub reference: String,
    pub holder_name: String,
    pub course_title: String,
    pub issue_date: NaiveDate,
    pub standing: GradeStanding,
}

impl CredentialRecord {
    /// Canonical form used for matching: trimmed, uppercase. Lookups are
    /// case-insensitive by policy.
    pub fn normalize_reference(raw: &str) -> String {
        raw.trim().to_ascii_uppercase()
    }

    pub fn view(&self) -> CredentialView {
        CredentialView {
            reference: self.reference.clone(),
            holder_name: self.holder_name.clone(),
            course_title: self.course_title.clone(),
            issue_date: self.issue_date.format("%B %-d, %Y").to_string(),
            standing: self.standing.label(),
            verification_url: format!("{VERIFICATION_BASE_URL}/{}", self.reference),
        }
    }
}

/// Academic standing printed on the certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradeStanding {
    Distinction,
    Merit,
    Credit,
    Pass,
}

impl GradeStanding {
    pub const fn label(self) -> &'static str {
        match self {
            GradeStanding::Distinction => "Distinction",
            GradeStanding::Merit => "Merit",
            GradeStanding::Credit => "Credit",
            GradeStanding::Pass => "Pass",
        }
    }
}

/// Presentation payload for a verified credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CredentialView {
    pub reference: String,
    pub holder_name: String,
    pub course_title: String,
    pub issue_date: String,
    pub standing: &'static str,
    pub verification_url: String,
}
