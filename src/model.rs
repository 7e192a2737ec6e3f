use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LeadError;

/// One sales prospect tracked through the pipeline. `id` is unique within a
/// collection and never changes after creation; categorical fields hold a
/// value from their domain (`sdr_owner` may also be empty, meaning
/// unassigned).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub company_name: String,
    pub person_name: String,
    pub position: String,
    pub email: String,
    pub phone: String,
    pub lead_date: String,
    pub meeting_date: String,
    pub status: String,
    pub solution: String,
    pub geo: String,
    pub sdr_owner: String,
    pub lead_rating: u8,
    pub notes: String,
    pub person_linkedin: String,
    pub company_website: String,
    pub company_linkedin: String,
}

pub const STATUS_VALUES: &[&str] = &["lead", "warm", "hot", "meeting_schedule", "meeting_done"];
pub const SOLUTION_VALUES: &[&str] = &["GRC", "VAPT", "CISOasaService"];
pub const GEO_VALUES: &[&str] = &["UAE", "Saudi", "Kuwait"];
pub const SDR_OWNER_VALUES: &[&str] = &["SDR 1", "SDR 2", "SDR 3"];

pub const MAX_RATING: u8 = 5;

/// A mutable field of a [`Lead`]. The four categorical fields carry a value
/// domain; the rest are free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Status,
    Solution,
    Geo,
    SdrOwner,
    CompanyName,
    PersonName,
    Position,
    Email,
    Phone,
    LeadDate,
    MeetingDate,
    Notes,
    PersonLinkedin,
    CompanyWebsite,
    CompanyLinkedin,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Status => "status",
            Field::Solution => "solution",
            Field::Geo => "geo",
            Field::SdrOwner => "sdr_owner",
            Field::CompanyName => "company_name",
            Field::PersonName => "person_name",
            Field::Position => "position",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::LeadDate => "lead_date",
            Field::MeetingDate => "meeting_date",
            Field::Notes => "notes",
            Field::PersonLinkedin => "person_linkedin",
            Field::CompanyWebsite => "company_website",
            Field::CompanyLinkedin => "company_linkedin",
        }
    }

    pub fn is_categorical(&self) -> bool {
        matches!(
            self,
            Field::Status | Field::Solution | Field::Geo | Field::SdrOwner
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = LeadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "status" => Ok(Field::Status),
            "solution" => Ok(Field::Solution),
            "geo" => Ok(Field::Geo),
            "sdr_owner" => Ok(Field::SdrOwner),
            "company_name" => Ok(Field::CompanyName),
            "person_name" => Ok(Field::PersonName),
            "position" => Ok(Field::Position),
            "email" => Ok(Field::Email),
            "phone" => Ok(Field::Phone),
            "lead_date" => Ok(Field::LeadDate),
            "meeting_date" => Ok(Field::MeetingDate),
            "notes" => Ok(Field::Notes),
            "person_linkedin" => Ok(Field::PersonLinkedin),
            "company_website" => Ok(Field::CompanyWebsite),
            "company_linkedin" => Ok(Field::CompanyLinkedin),
            other => Err(LeadError::UnknownField(other.to_string())),
        }
    }
}

/// Ordered domain of a categorical field. Fails for free-text fields, which
/// have no declared enumeration.
pub fn domain_for(field: Field) -> Result<&'static [&'static str], LeadError> {
    match field {
        Field::Status => Ok(STATUS_VALUES),
        Field::Solution => Ok(SOLUTION_VALUES),
        Field::Geo => Ok(GEO_VALUES),
        Field::SdrOwner => Ok(SDR_OWNER_VALUES),
        other => Err(LeadError::UnknownField(other.name().to_string())),
    }
}

/// Whether `candidate` may be stored in `field`. The empty string is valid
/// only for `sdr_owner` among the categorical fields; free-text fields accept
/// anything.
pub fn is_valid_value(field: Field, candidate: &str) -> bool {
    match domain_for(field) {
        Ok(domain) => {
            (field == Field::SdrOwner && candidate.is_empty())
                || domain.contains(&candidate)
        }
        Err(_) => true,
    }
}

/// Display grouping for status values. Grouping only; status transitions are
/// not ordered by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    Todo,
    InProgress,
    Complete,
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusCategory::Todo => "todo",
            StatusCategory::InProgress => "inprogress",
            StatusCategory::Complete => "complete",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSummary {
    pub status: String,
    pub count: usize,
    pub percent: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdrPerformance {
    pub sdr: String,
    pub total: usize,
    pub hot: usize,
    pub meetings: usize,
}

pub fn status_category(status: &str) -> Option<StatusCategory> {
    match status {
        "lead" => Some(StatusCategory::Todo),
        "warm" | "hot" | "meeting_schedule" => Some(StatusCategory::InProgress),
        "meeting_done" => Some(StatusCategory::Complete),
        _ => None,
    }
}
