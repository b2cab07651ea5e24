use std::path::Path;

use tracing::{debug, info, warn};

use crate::catalog::load_catalog;
use crate::cli::{Cli, Commands};
use crate::core::{DateWindow, FixtureGenerator, summarize_categories, verify_records};
use crate::error::AppError;
use crate::output::{
    STDOUT_PATH, output_summary_json, print_summary_table, print_violations, read_records,
    write_records,
};

/// Run the selected command
pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    match cli.command() {
        Commands::Generate => handle_generate(cli),
        Commands::Verify { records } => handle_verify(cli, &records),
        Commands::Summary { records } => handle_summary(cli, &records),
    }
}

fn handle_generate(cli: &Cli) -> Result<(), AppError> {
    let catalog = load_catalog(&cli.catalog_path())?;
    let window = DateWindow::ending_at(cli.end_date()?, cli.days())?;
    let seed = cli.seed();
    info!(
        start = %window.start,
        end = %window.end,
        seed,
        categories = catalog.categories.len(),
        "generating records"
    );

    let doc = FixtureGenerator::new(&catalog, seed).generate(window)?;

    let output = cli.output_path();
    write_records(&doc, &output)?;

    if cli.summary {
        if output.as_os_str() == STDOUT_PATH {
            warn!("--summary is ignored when writing records to stdout");
        } else {
            print_summary_table(&doc, &summarize_categories(&doc), cli.use_color());
        }
    }
    Ok(())
}

fn handle_verify(cli: &Cli, records: &Path) -> Result<(), AppError> {
    let catalog = load_catalog(&cli.catalog_path())?;
    let doc = read_records(records)?;
    let window = match cli.pinned_end_date()? {
        Some(end) => Some(DateWindow::ending_at(end, cli.days())?),
        None => {
            if cli.days.is_some() {
                debug!("--days has no effect on verify without --end-date; window check skipped");
            }
            None
        }
    };

    let violations = verify_records(&doc, &catalog, window);
    if violations.is_empty() {
        println!(
            "  ✓ {} records, {} workouts verified",
            doc.records.len(),
            doc.workout_count()
        );
        return Ok(());
    }

    print_violations(&violations, cli.use_color());
    Err(AppError::VerificationFailed {
        violations: violations.len(),
    })
}

fn handle_summary(cli: &Cli, records: &Path) -> Result<(), AppError> {
    let doc = read_records(records)?;
    let summary = summarize_categories(&doc);
    if cli.json {
        println!("{}", output_summary_json(&summary)?);
    } else {
        print_summary_table(&doc, &summary, cli.use_color());
    }
    Ok(())
}
