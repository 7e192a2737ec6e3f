use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod error;
mod model;
mod mutate;
mod report;
mod store;

use model::{Field, Lead};

#[derive(Parser)]
#[command(name = "lead-pipeline-tracker")]
#[command(about = "Sales lead pipeline tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the builtin seed fixture to a CSV file
    Seed {
        #[arg(long, default_value = "leads.csv")]
        out: PathBuf,
    },
    /// List all leads
    List {
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Show one lead in full
    Show {
        #[arg(long)]
        id: String,
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Set one field on one lead (pass an empty value to clear sdr_owner)
    Set {
        #[arg(long)]
        id: String,
        #[arg(long)]
        field: String,
        #[arg(long)]
        value: String,
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Set the star rating on one lead
    Rate {
        #[arg(long)]
        id: String,
        #[arg(long)]
        stars: i64,
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print status breakdown and SDR performance
    Stats {
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Generate a markdown report
    Report {
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
}

fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("lead_pipeline_tracker=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

fn load_collection(csv: Option<&PathBuf>) -> anyhow::Result<Vec<Lead>> {
    match csv {
        Some(path) => store::load_leads(path),
        None => Ok(store::seed_leads()),
    }
}

fn print_lead_line(lead: &Lead) {
    println!(
        "{:>3}  {:<24} {:<20} {:<16} {:<14} {:<8} {:<6} stars {}",
        lead.id,
        lead.company_name,
        lead.person_name,
        report::status_label(&lead.status),
        lead.solution,
        lead.geo,
        if lead.sdr_owner.is_empty() {
            "-"
        } else {
            &lead.sdr_owner
        },
        lead.lead_rating
    );
}

fn main() -> anyhow::Result<()> {
    init_logger();
    let cli = Cli::parse();

    match cli.command {
        Commands::Seed { out } => {
            let leads = store::seed_leads();
            store::save_leads(&out, &leads)?;
            println!("Wrote {} seed leads to {}.", leads.len(), out.display());
        }
        Commands::List { csv } => {
            let leads = load_collection(csv.as_ref())?;
            for lead in &leads {
                print_lead_line(lead);
            }
            println!("Showing {} leads.", leads.len());
        }
        Commands::Show { id, csv, json } => {
            let leads = load_collection(csv.as_ref())?;
            let lead = leads
                .iter()
                .find(|lead| lead.id == id)
                .with_context(|| format!("no lead with id `{id}`"))?;

            if json {
                println!("{}", serde_json::to_string_pretty(lead)?);
            } else {
                print_lead_line(lead);
                if !lead.notes.is_empty() {
                    println!("     notes: {}", lead.notes);
                }
                if !lead.meeting_date.is_empty() {
                    println!("     meeting: {}", lead.meeting_date);
                }
            }
        }
        Commands::Set {
            id,
            field,
            value,
            csv,
            out,
        } => {
            let leads = load_collection(csv.as_ref())?;
            let field: Field = field.parse()?;
            let updated = mutate::update_field(&leads, &id, field, &value)?;

            let lead = updated
                .iter()
                .find(|lead| lead.id == id)
                .with_context(|| format!("updated lead `{id}` missing from collection"))?;
            print_lead_line(lead);

            if let Some(path) = out.or(csv) {
                store::save_leads(&path, &updated)?;
                println!("Saved to {}.", path.display());
            }
        }
        Commands::Rate {
            id,
            stars,
            csv,
            out,
        } => {
            let leads = load_collection(csv.as_ref())?;
            let target = leads
                .iter()
                .find(|lead| lead.id == id)
                .ok_or_else(|| error::LeadError::LeadNotFound(id.clone()))?;

            let rated = mutate::with_rating(target, stars)?;
            print_lead_line(&rated);

            if let Some(path) = out.or(csv) {
                let updated: Vec<Lead> = leads
                    .iter()
                    .map(|lead| if lead.id == id { rated.clone() } else { lead.clone() })
                    .collect();
                store::save_leads(&path, &updated)?;
                println!("Saved to {}.", path.display());
            }
        }
        Commands::Stats { csv } => {
            let leads = load_collection(csv.as_ref())?;

            println!("Status mix:");
            for summary in report::status_breakdown(&leads) {
                println!(
                    "- {}: {} leads ({}%)",
                    report::status_label(&summary.status),
                    summary.count,
                    summary.percent
                );
            }

            println!();
            println!("SDR performance:");
            let performance = report::sdr_performance(&leads);
            if performance.is_empty() {
                println!("- no leads assigned");
            }
            for sdr in performance {
                println!(
                    "- {}: {} leads, {} hot, {} meetings",
                    sdr.sdr, sdr.total, sdr.hot, sdr.meetings
                );
            }
        }
        Commands::Report { csv, out } => {
            let leads = load_collection(csv.as_ref())?;
            let report = report::build_report(&leads, Utc::now().date_naive());
            std::fs::write(&out, report)?;
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}
