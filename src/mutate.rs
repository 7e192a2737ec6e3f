use crate::error::LeadError;
use crate::model::{is_valid_value, Field, Lead, MAX_RATING};

/// Returns a new collection identical to `leads` except that the lead with
/// `lead_id` has `field` set to `candidate`. The inputs are never mutated;
/// on any error the caller's collection is still exactly what it was.
pub fn update_field(
    leads: &[Lead],
    lead_id: &str,
    field: Field,
    candidate: &str,
) -> Result<Vec<Lead>, LeadError> {
    if !leads.iter().any(|lead| lead.id == lead_id) {
        return Err(LeadError::LeadNotFound(lead_id.to_string()));
    }

    if field.is_categorical() && !is_valid_value(field, candidate) {
        return Err(LeadError::InvalidFieldValue {
            field: field.name().to_string(),
            value: candidate.to_string(),
        });
    }

    let updated = leads
        .iter()
        .map(|lead| {
            if lead.id == lead_id {
                with_field(lead, field, candidate)
            } else {
                lead.clone()
            }
        })
        .collect();

    Ok(updated)
}

fn with_field(lead: &Lead, field: Field, value: &str) -> Lead {
    let mut next = lead.clone();
    let slot = match field {
        Field::Status => &mut next.status,
        Field::Solution => &mut next.solution,
        Field::Geo => &mut next.geo,
        Field::SdrOwner => &mut next.sdr_owner,
        Field::CompanyName => &mut next.company_name,
        Field::PersonName => &mut next.person_name,
        Field::Position => &mut next.position,
        Field::Email => &mut next.email,
        Field::Phone => &mut next.phone,
        Field::LeadDate => &mut next.lead_date,
        Field::MeetingDate => &mut next.meeting_date,
        Field::Notes => &mut next.notes,
        Field::PersonLinkedin => &mut next.person_linkedin,
        Field::CompanyWebsite => &mut next.company_website,
        Field::CompanyLinkedin => &mut next.company_linkedin,
    };
    *slot = value.to_string();
    next
}

pub fn rating_of(lead: &Lead) -> u8 {
    lead.lead_rating
}

/// Returns a copy of `lead` with the rating set to `n`. Ratings render as a
/// star count, so anything outside 0..=5 is rejected.
pub fn with_rating(lead: &Lead, n: i64) -> Result<Lead, LeadError> {
    if n < 0 || n > i64::from(MAX_RATING) {
        return Err(LeadError::InvalidFieldValue {
            field: "lead_rating".to_string(),
            value: n.to_string(),
        });
    }

    let mut next = lead.clone();
    next.lead_rating = n as u8;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_lead(id: &str, status: &str, geo: &str, sdr_owner: &str) -> Lead {
        Lead {
            id: id.to_string(),
            company_name: format!("Company {id}"),
            person_name: format!("Person {id}"),
            position: "CISO".to_string(),
            email: format!("person{id}@example.com"),
            phone: "+971 50 000 0000".to_string(),
            lead_date: "2026-01-05".to_string(),
            meeting_date: String::new(),
            status: status.to_string(),
            solution: "GRC".to_string(),
            geo: geo.to_string(),
            sdr_owner: sdr_owner.to_string(),
            lead_rating: 3,
            notes: String::new(),
            person_linkedin: String::new(),
            company_website: String::new(),
            company_linkedin: String::new(),
        }
    }

    fn sample_collection() -> Vec<Lead> {
        vec![
            sample_lead("1", "lead", "UAE", "SDR 1"),
            sample_lead("2", "warm", "Saudi", "SDR 2"),
            sample_lead("3", "hot", "Kuwait", ""),
        ]
    }

    #[test]
    fn valid_update_changes_only_the_target_field() {
        let leads = sample_collection();
        let updated = update_field(&leads, "1", Field::Status, "hot").unwrap();

        assert_eq!(updated[0].id, "1");
        assert_eq!(updated[0].status, "hot");
        assert_eq!(updated[0].geo, leads[0].geo);
        assert_eq!(updated[0].sdr_owner, leads[0].sdr_owner);
        assert_eq!(updated[0].lead_rating, leads[0].lead_rating);
    }

    #[test]
    fn other_leads_are_untouched() {
        let leads = sample_collection();
        let updated = update_field(&leads, "2", Field::Geo, "UAE").unwrap();

        assert_eq!(updated[0], leads[0]);
        assert_eq!(updated[2], leads[2]);
        assert_eq!(updated[1].geo, "UAE");
    }

    #[test]
    fn input_collection_is_not_mutated() {
        let leads = sample_collection();
        let _ = update_field(&leads, "1", Field::Status, "warm").unwrap();
        assert_eq!(leads[0].status, "lead");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let leads = sample_collection();
        let err = update_field(&leads, "99", Field::Status, "hot").unwrap_err();
        assert_eq!(err, LeadError::LeadNotFound("99".to_string()));
    }

    #[test]
    fn out_of_domain_value_is_rejected() {
        let leads = sample_collection();
        let err = update_field(&leads, "1", Field::Geo, "Germany").unwrap_err();
        assert_eq!(
            err,
            LeadError::InvalidFieldValue {
                field: "geo".to_string(),
                value: "Germany".to_string(),
            }
        );
    }

    #[test]
    fn clearing_is_allowed_only_for_sdr_owner() {
        let leads = sample_collection();

        let cleared = update_field(&leads, "1", Field::SdrOwner, "").unwrap();
        assert_eq!(cleared[0].sdr_owner, "");

        let err = update_field(&leads, "1", Field::Geo, "").unwrap_err();
        assert!(matches!(err, LeadError::InvalidFieldValue { .. }));
    }

    #[test]
    fn free_text_fields_skip_domain_checks() {
        let leads = sample_collection();
        let updated = update_field(&leads, "3", Field::Notes, "called twice").unwrap();
        assert_eq!(updated[2].notes, "called twice");
    }

    #[test]
    fn repeated_update_with_same_value_is_idempotent() {
        let leads = sample_collection();
        let once = update_field(&leads, "1", Field::Status, "hot").unwrap();
        let twice = update_field(&once, "1", Field::Status, "hot").unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn rating_bounds_are_enforced() {
        let lead = sample_lead("1", "lead", "UAE", "SDR 1");

        assert!(with_rating(&lead, -1).is_err());
        assert!(with_rating(&lead, 6).is_err());
        assert_eq!(with_rating(&lead, 0).unwrap().lead_rating, 0);
        assert_eq!(with_rating(&lead, 5).unwrap().lead_rating, 5);
        assert_eq!(rating_of(&lead), 3);
    }

    #[test]
    fn rating_update_preserves_everything_else() {
        let lead = sample_lead("2", "warm", "Saudi", "SDR 2");
        let rated = with_rating(&lead, 4).unwrap();
        assert_eq!(rated.id, lead.id);
        assert_eq!(rated.status, lead.status);
        assert_eq!(rated.lead_rating, 4);
    }
}
