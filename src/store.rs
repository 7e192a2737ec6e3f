use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context};
use tracing::debug;

use crate::model::{is_valid_value, Field, Lead};

/// Builtin seed fixture: seven leads spanning every status, solution, and geo.
pub fn seed_leads() -> Vec<Lead> {
    let rows = vec![
        (
            "1",
            "Falcon Logistics",
            "Omar Haddad",
            "IT Director",
            "omar.haddad@falconlogistics.ae",
            "+971 50 123 4501",
            "2026-01-12",
            "",
            "lead",
            "GRC",
            "UAE",
            "SDR 1",
            3,
            "Inbound from the Dubai expo booth.",
        ),
        (
            "2",
            "Gulf Retail Group",
            "Sara Al-Mutairi",
            "CISO",
            "sara.almutairi@gulfretail.com.kw",
            "+965 9900 4502",
            "2026-01-15",
            "",
            "warm",
            "VAPT",
            "Kuwait",
            "SDR 2",
            4,
            "Asked for a scoping call after the webinar.",
        ),
        (
            "3",
            "Desert Rose Hotels",
            "Faisal Al-Qahtani",
            "Head of IT",
            "faisal.q@desertrosehotels.sa",
            "+966 55 210 4503",
            "2026-01-18",
            "",
            "hot",
            "CISOasaService",
            "Saudi",
            "SDR 3",
            5,
            "Budget approved for this quarter.",
        ),
        (
            "4",
            "Pearl Finance House",
            "Leila Nasser",
            "COO",
            "leila.nasser@pearlfinance.com.kw",
            "+965 9900 4504",
            "2026-01-22",
            "2026-02-18",
            "meeting_schedule",
            "GRC",
            "Kuwait",
            "SDR 1",
            4,
            "",
        ),
        (
            "5",
            "Oasis Healthcare",
            "Yusuf Karim",
            "CTO",
            "yusuf.karim@oasishealth.ae",
            "+971 50 123 4505",
            "2026-01-08",
            "2026-02-03",
            "meeting_done",
            "VAPT",
            "UAE",
            "SDR 2",
            5,
            "Follow up with the pentest proposal.",
        ),
        (
            "6",
            "Red Dune Energy",
            "Hind Al-Shammari",
            "Security Manager",
            "hind.shammari@reddune.sa",
            "+966 55 210 4506",
            "2026-02-01",
            "",
            "warm",
            "CISOasaService",
            "Saudi",
            "",
            2,
            "Waiting on owner assignment.",
        ),
        (
            "7",
            "Marina Telecom",
            "Tariq Boulos",
            "VP Engineering",
            "tariq.boulos@marinatelecom.ae",
            "+971 50 123 4507",
            "2026-02-05",
            "",
            "lead",
            "VAPT",
            "UAE",
            "SDR 3",
            1,
            "",
        ),
    ];

    rows.into_iter()
        .map(
            |(
                id,
                company_name,
                person_name,
                position,
                email,
                phone,
                lead_date,
                meeting_date,
                status,
                solution,
                geo,
                sdr_owner,
                lead_rating,
                notes,
            )| Lead {
                id: id.to_string(),
                company_name: company_name.to_string(),
                person_name: person_name.to_string(),
                position: position.to_string(),
                email: email.to_string(),
                phone: phone.to_string(),
                lead_date: lead_date.to_string(),
                meeting_date: meeting_date.to_string(),
                status: status.to_string(),
                solution: solution.to_string(),
                geo: geo.to_string(),
                sdr_owner: sdr_owner.to_string(),
                lead_rating,
                notes: notes.to_string(),
                person_linkedin: format!("https://linkedin.com/in/{}", id),
                company_website: String::new(),
                company_linkedin: String::new(),
            },
        )
        .collect()
}

/// Reads a lead collection from a CSV fixture. Rejects duplicate ids and
/// out-of-domain categorical values so the invariants hold before any
/// mutation runs.
pub fn load_leads(path: &Path) -> anyhow::Result<Vec<Lead>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut leads = Vec::new();
    let mut seen = HashSet::new();

    for result in reader.deserialize::<Lead>() {
        let lead = result.with_context(|| format!("malformed row in {}", path.display()))?;

        if !seen.insert(lead.id.clone()) {
            bail!("duplicate lead id `{}` in {}", lead.id, path.display());
        }
        for field in [Field::Status, Field::Solution, Field::Geo, Field::SdrOwner] {
            let value = match field {
                Field::Status => &lead.status,
                Field::Solution => &lead.solution,
                Field::Geo => &lead.geo,
                _ => &lead.sdr_owner,
            };
            if !is_valid_value(field, value) {
                bail!(
                    "lead `{}` has invalid {} value `{}` in {}",
                    lead.id,
                    field,
                    value,
                    path.display()
                );
            }
        }

        leads.push(lead);
    }

    debug!(count = leads.len(), path = %path.display(), "loaded leads");
    Ok(leads)
}

pub fn save_leads(path: &Path, leads: &[Lead]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    for lead in leads {
        writer.serialize(lead)?;
    }
    writer.flush()?;

    debug!(count = leads.len(), path = %path.display(), "saved leads");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GEO_VALUES, SOLUTION_VALUES, STATUS_VALUES};

    #[test]
    fn seed_spans_every_domain() {
        let leads = seed_leads();
        assert_eq!(leads.len(), 7);

        for status in STATUS_VALUES {
            assert!(
                leads.iter().any(|lead| lead.status == *status),
                "missing status {status}"
            );
        }
        for solution in SOLUTION_VALUES {
            assert!(leads.iter().any(|lead| lead.solution == *solution));
        }
        for geo in GEO_VALUES {
            assert!(leads.iter().any(|lead| lead.geo == *geo));
        }
    }

    #[test]
    fn seed_lead_one_matches_expected_shape() {
        let leads = seed_leads();
        let first = leads.iter().find(|lead| lead.id == "1").unwrap();
        assert_eq!(first.status, "lead");
        assert_eq!(first.geo, "UAE");
        assert_eq!(first.sdr_owner, "SDR 1");
        assert_eq!(first.lead_rating, 3);
    }

    #[test]
    fn marking_seed_lead_hot_moves_it_to_in_progress() {
        use crate::model::{status_category, Field, StatusCategory};
        use crate::mutate::update_field;

        let seed = seed_leads();
        let updated = update_field(&seed, "1", Field::Status, "hot").unwrap();

        let first = updated.iter().find(|lead| lead.id == "1").unwrap();
        assert_eq!(first.status, "hot");
        assert_eq!(first.geo, "UAE");
        assert_eq!(first.sdr_owner, "SDR 1");
        assert_eq!(first.lead_rating, 3);
        assert_eq!(
            status_category(&first.status),
            Some(StatusCategory::InProgress)
        );
    }

    #[test]
    fn seed_ids_are_unique() {
        let leads = seed_leads();
        let ids: HashSet<_> = leads.iter().map(|lead| lead.id.as_str()).collect();
        assert_eq!(ids.len(), leads.len());
    }

    #[test]
    fn csv_round_trip_preserves_every_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leads.csv");

        let leads = seed_leads();
        save_leads(&path, &leads).unwrap();
        let loaded = load_leads(&path).unwrap();

        assert_eq!(loaded, leads);
    }

    #[test]
    fn duplicate_ids_are_rejected_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leads.csv");

        let mut leads = seed_leads();
        let mut copy = leads[0].clone();
        copy.company_name = "Different Company".to_string();
        leads.push(copy);
        save_leads(&path, &leads).unwrap();

        let err = load_leads(&path).unwrap_err();
        assert!(err.to_string().contains("duplicate lead id"));
    }

    #[test]
    fn out_of_domain_fixture_values_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leads.csv");

        let mut leads = seed_leads();
        leads[0].geo = "Germany".to_string();
        save_leads(&path, &leads).unwrap();

        let err = load_leads(&path).unwrap_err();
        assert!(err.to_string().contains("invalid geo value"));
    }
}
