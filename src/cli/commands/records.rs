use crate::cli::parser::{Commands, OutputFormat};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::record::{AttendanceRecord, get_headers, record_to_row};
use crate::nav::Screen;
use crate::records::export::ExportRequest;
use crate::records::{RecordsFlow, RecordsQuery, RecordsView};
use crate::store::FirestoreStore;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_count;
use crate::utils::date;
use crate::utils::table::{Column, Table};
use std::io;

use super::selection_from;

/// Handle the `records` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Records {
        class,
        slot,
        date: date_arg,
        format,
    } = cmd
    {
        let selection = selection_from(class, *slot)?;
        let identity = selection.require_identity()?;
        let day = date::resolve_date(date_arg.as_deref())?;

        let query = RecordsQuery {
            identity,
            time_slot: *slot,
            date: day,
        };

        let flow = RecordsFlow::new(FirestoreStore::from_config(cfg)?);
        let view = flow.load(&query)?;

        match format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(view.records())?);
            }
            OutputFormat::Csv => write_csv(view.records())?,
            OutputFormat::Table => {
                header(Screen::Records);
                info(format!(
                    "{} on {}",
                    query.identity.display_name(),
                    query.date
                ));
                match &view {
                    RecordsView::Empty => println!("\nNo attendance records found."),
                    RecordsView::Records(records) => {
                        print_table(records);
                        print_export_links(records, &cfg.recognition_url)?;
                    }
                }
            }
        }
    }
    Ok(())
}

fn print_table(records: &[AttendanceRecord]) {
    let mut table = Table::new(vec![
        Column::new("Date", 10),
        Column::new("Slot", 9),
        Column::new("Present", 7),
        Column::new("Absent", 6),
        Column::new("Collection", 40),
    ]);
    for r in records {
        table.add_row(vec![
            r.date.to_string(),
            r.time_slot.to_string(),
            r.present_count.to_string(),
            r.absent_count.to_string(),
            r.id.clone(),
        ]);
    }
    println!("\n{}", table.render());

    let present: u64 = records.iter().map(|r| r.present_count).sum();
    let absent: u64 = records.iter().map(|r| r.absent_count).sum();
    println!(
        "Total: {} Present | {} Absent",
        colorize_count(present, true),
        colorize_count(absent, false)
    );
}

fn print_export_links(records: &[AttendanceRecord], recognition_url: &str) -> AppResult<()> {
    println!("\nExport:");
    for r in records {
        let url = ExportRequest::from_record(r).url(recognition_url)?;
        println!("  {:<9} {}", r.time_slot.label(), url);
    }
    Ok(())
}

/// CSV on stdout; the header row is written even for an empty list.
fn write_csv(records: &[AttendanceRecord]) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(io::stdout());
    wtr.write_record(get_headers())?;
    for r in records {
        wtr.write_record(record_to_row(r))?;
    }
    wtr.flush()?;
    Ok(())
}
