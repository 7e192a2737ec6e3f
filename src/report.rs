use std::fmt::Write;

use chrono::NaiveDate;

use crate::model::{
    status_category, Lead, SdrPerformance, StatusCategory, StatusSummary, STATUS_VALUES,
};

/// Presentation label for a status value. Display metadata lives here, apart
/// from the domain definitions in the model.
pub fn status_label(status: &str) -> &str {
    match status {
        "lead" => "Lead",
        "warm" => "Warm",
        "hot" => "Hot",
        "meeting_schedule" => "Meeting Schedule",
        "meeting_done" => "Meeting Done",
        other => other,
    }
}

fn category_label(category: StatusCategory) -> &'static str {
    match category {
        StatusCategory::Todo => "To-do",
        StatusCategory::InProgress => "In progress",
        StatusCategory::Complete => "Complete",
    }
}

/// Count and share of each status value, in domain order. Statuses with no
/// leads still appear with a zero count.
pub fn status_breakdown(leads: &[Lead]) -> Vec<StatusSummary> {
    let total = leads.len();

    STATUS_VALUES
        .iter()
        .map(|status| {
            let count = leads.iter().filter(|lead| lead.status == *status).count();
            let percent = if total == 0 {
                0
            } else {
                ((count as f64 / total as f64) * 100.0).round() as u32
            };
            StatusSummary {
                status: (*status).to_string(),
                count,
                percent,
            }
        })
        .collect()
}

/// Per-owner totals: leads held, hot leads, and meetings (scheduled or done).
/// Unassigned leads are skipped. Sorted by meetings, busiest first.
pub fn sdr_performance(leads: &[Lead]) -> Vec<SdrPerformance> {
    let mut map: std::collections::HashMap<String, (usize, usize, usize)> =
        std::collections::HashMap::new();

    for lead in leads {
        if lead.sdr_owner.is_empty() {
            continue;
        }
        let entry = map.entry(lead.sdr_owner.clone()).or_insert((0, 0, 0));
        entry.0 += 1;
        if lead.status == "hot" {
            entry.1 += 1;
        }
        if lead.status == "meeting_schedule" || lead.status == "meeting_done" {
            entry.2 += 1;
        }
    }

    let mut performance: Vec<SdrPerformance> = map
        .into_iter()
        .map(|(sdr, (total, hot, meetings))| SdrPerformance {
            sdr,
            total,
            hot,
            meetings,
        })
        .collect();

    performance.sort_by(|a, b| b.meetings.cmp(&a.meetings).then(a.sdr.cmp(&b.sdr)));
    performance
}

pub fn build_report(leads: &[Lead], generated_on: NaiveDate) -> String {
    let breakdown = status_breakdown(leads);
    let performance = sdr_performance(leads);

    let mut output = String::new();

    let _ = writeln!(output, "# Lead Pipeline Report");
    let _ = writeln!(
        output,
        "Generated on {} across {} leads",
        generated_on,
        leads.len()
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Status Mix");

    if leads.is_empty() {
        let _ = writeln!(output, "No leads in the pipeline.");
    } else {
        for summary in breakdown.iter() {
            let _ = writeln!(
                output,
                "- {}: {} leads ({}%)",
                status_label(&summary.status),
                summary.count,
                summary.percent
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Top Performing SDRs");

    if performance.is_empty() {
        let _ = writeln!(output, "No leads are assigned to an SDR.");
    } else {
        for sdr in performance.iter().take(3) {
            let _ = writeln!(
                output,
                "- {}: {} leads, {} hot, {} meetings",
                sdr.sdr, sdr.total, sdr.hot, sdr.meetings
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Pipeline");

    for category in [
        StatusCategory::Todo,
        StatusCategory::InProgress,
        StatusCategory::Complete,
    ] {
        let in_category: Vec<&Lead> = leads
            .iter()
            .filter(|lead| status_category(&lead.status) == Some(category))
            .collect();

        let _ = writeln!(output);
        let _ = writeln!(output, "### {}", category_label(category));

        if in_category.is_empty() {
            let _ = writeln!(output, "Nothing here.");
        } else {
            for lead in in_category {
                let _ = writeln!(
                    output,
                    "- {} ({}, {}) {} via {}",
                    lead.company_name,
                    lead.person_name,
                    lead.geo,
                    status_label(&lead.status),
                    if lead.sdr_owner.is_empty() {
                        "unassigned"
                    } else {
                        &lead.sdr_owner
                    }
                );
            }
        }
    }

    output
}
