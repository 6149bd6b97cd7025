//! CLI entrypoint for the tamelibc conformance harness.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Conformance tooling for tamelibc.
#[derive(Debug, Parser)]
#[command(name = "tamelibc-harness")]
#[command(about = "Conformance testing harness for tamelibc")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Verify the implementation against fixture files, or against the
    /// builtin set when no directory is given.
    Verify {
        /// Directory containing fixture JSON files.
        #[arg(long)]
        fixture: Option<PathBuf>,
        /// Output report path (markdown; a sibling .json is written too).
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Print the builtin fixture set as JSON.
    ShowFixtures,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Verify { fixture, report } => {
            let mut fixture_sets = Vec::new();
            if let Some(dir) = fixture {
                eprintln!("Verifying against fixtures in {}", dir.display());
                for entry in std::fs::read_dir(&dir)? {
                    let entry = entry?;
                    let path = entry.path();
                    if path.extension().and_then(|s| s.to_str()) != Some("json") {
                        continue;
                    }
                    match tamelibc_harness::FixtureSet::from_file(&path) {
                        Ok(set) => fixture_sets.push(set),
                        Err(err) => {
                            eprintln!("Skipping {}: {}", path.display(), err);
                        }
                    }
                }
                if fixture_sets.is_empty() {
                    return Err(
                        format!("No fixture JSON files found in {}", dir.display()).into()
                    );
                }
            } else {
                eprintln!("Verifying against the builtin fixture set");
                fixture_sets.push(tamelibc_harness::builtin_fixtures());
            }

            let mut results = Vec::new();
            for set in &fixture_sets {
                results.extend(tamelibc_harness::run_set(set));
            }

            let summary = tamelibc_harness::ConformanceSummary::from_results(results);
            let report_doc = tamelibc_harness::ConformanceReport {
                title: String::from("tamelibc Conformance Report"),
                timestamp: format!("{:?}", std::time::SystemTime::now()),
                summary,
            };

            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
            );

            if let Some(report_path) = report {
                eprintln!("Writing report to {}", report_path.display());
                std::fs::write(&report_path, report_doc.to_markdown())?;
                let json_path = report_path.with_extension("json");
                std::fs::write(&json_path, report_doc.to_json())?;
            }

            if !report_doc.summary.all_passed() {
                return Err("Conformance verification failed".into());
            }
        }
        Command::ShowFixtures => {
            println!("{}", tamelibc_harness::builtin_fixtures().to_json()?);
        }
    }

    Ok(())
}
