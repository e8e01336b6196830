//! paperlens CLI - evaluate research papers from the command line
//!
//! Usage: paperlens [OPTIONS] <COMMAND>
//!
//! `evaluate` prints the evaluation in the same section order as the
//! exported reports and can write the Word/PDF/CSV artifacts next to it.
//! Supports JSON output for scripting.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Datelike, Utc};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};

use paperlens::analysis::style::WritingStyle;
use paperlens::analysis::Detected;
use paperlens::report::{self, csv, docx, pdf};
use paperlens::{evaluate_document, extract_text, DocumentFormat, Evaluation, Lexicon};

#[derive(Parser)]
#[command(name = "paperlens")]
#[command(version, about = "Heuristic quality screening for research papers", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON for scripting
    #[arg(long, global = true)]
    json: bool,

    /// Suppress progress output
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a paper and optionally export summary artifacts
    Evaluate {
        /// Input document (.docx or .pdf)
        input: PathBuf,

        /// Directory for exported artifacts
        #[arg(long, short, default_value = ".")]
        output_dir: PathBuf,

        /// Write Evaluation_Summary.docx
        #[arg(long)]
        docx: bool,

        /// Write Evaluation_Summary.pdf
        #[arg(long)]
        pdf: bool,

        /// Write journals_list.csv (skipped when no journals were found)
        #[arg(long)]
        csv: bool,

        /// Write all three artifacts
        #[arg(long, short)]
        all: bool,
    },
    /// Print the extracted plain text of a document
    Extract {
        /// Input document (.docx or .pdf)
        input: PathBuf,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run_cli(cli) {
        eprintln!("[paperlens] Error: {e}");
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> Result<(), String> {
    // Completions need no input file.
    if let Commands::Completions { shell } = &cli.command {
        generate(*shell, &mut Cli::command(), "paperlens", &mut std::io::stdout());
        return Ok(());
    }

    match cli.command {
        Commands::Evaluate {
            input,
            output_dir,
            docx,
            pdf,
            csv,
            all,
        } => handle_evaluate(input, output_dir, docx, pdf, csv, all, cli.json, cli.quiet),
        Commands::Extract { input } => handle_extract(input),
        Commands::Completions { .. } => unreachable!(),
    }
}

fn read_document(input: &Path) -> Result<(Vec<u8>, DocumentFormat), String> {
    let format = DocumentFormat::from_path(input).map_err(|e| e.to_string())?;
    let bytes =
        fs::read(input).map_err(|e| format!("Failed to read {}: {}", input.display(), e))?;
    Ok((bytes, format))
}

#[allow(clippy::too_many_arguments)]
fn handle_evaluate(
    input: PathBuf,
    output_dir: PathBuf,
    write_docx: bool,
    write_pdf: bool,
    write_csv: bool,
    all: bool,
    json: bool,
    quiet: bool,
) -> Result<(), String> {
    let (bytes, format) = read_document(&input)?;
    if !quiet && !json {
        println!("[paperlens] Analyzing {} ({} format)...", input.display(), format);
    }

    let evaluation = evaluate_document(&bytes, format, &Lexicon::STANDARD, Utc::now().year())
        .map_err(|e| e.to_string())?;

    if json {
        let rendered = serde_json::to_string_pretty(&evaluation)
            .map_err(|e| format!("Failed to serialize evaluation: {}", e))?;
        println!("{rendered}");
    } else {
        print_evaluation(&evaluation);
    }

    // Progress notices stay off stdout in JSON mode so output stays parseable.
    let notice = |message: String| {
        if quiet {
            return;
        }
        if json {
            eprintln!("{message}");
        } else {
            println!("{message}");
        }
    };

    let (write_docx, write_pdf, write_csv) = if all {
        (true, true, true)
    } else {
        (write_docx, write_pdf, write_csv)
    };
    if write_docx || write_pdf || write_csv {
        fs::create_dir_all(&output_dir)
            .map_err(|e| format!("Failed to create {}: {}", output_dir.display(), e))?;
    }

    if write_docx {
        let rendered = docx::render_docx(&evaluation.summary).map_err(|e| e.to_string())?;
        let path = output_dir.join(report::DOCX_FILE_NAME);
        fs::write(&path, rendered)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
        notice(format!("[paperlens] Wrote {}", path.display()));
    }

    if write_pdf {
        let rendered = pdf::render_pdf(&evaluation.summary).map_err(|e| e.to_string())?;
        let path = output_dir.join(report::PDF_FILE_NAME);
        fs::write(&path, rendered)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
        notice(format!("[paperlens] Wrote {}", path.display()));
    }

    if write_csv {
        match &evaluation.summary.journals {
            Detected::Found(journals) => {
                let path = output_dir.join(report::CSV_FILE_NAME);
                fs::write(&path, csv::journals_csv(journals))
                    .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
                notice(format!("[paperlens] Wrote {}", path.display()));
            }
            Detected::NotFound => {
                notice(format!(
                    "[paperlens] No journal candidates found; skipping {}",
                    report::CSV_FILE_NAME
                ));
            }
        }
    }

    Ok(())
}

fn handle_extract(input: PathBuf) -> Result<(), String> {
    let (bytes, format) = read_document(&input)?;
    let text = extract_text(&bytes, format).map_err(|e| e.to_string())?;
    println!("{text}");
    Ok(())
}

fn print_evaluation(evaluation: &Evaluation) {
    let summary = &evaluation.summary;

    println!();
    println!("==============================================");
    println!("  Evaluation Summary");
    println!("==============================================");

    section("AI Writing Style Check");
    match evaluation.writing_style.style {
        WritingStyle::Flagged => println!(
            "WARNING: Writing style appears partially AI-generated. \
             Consider rephrasing or humanizing some sections."
        ),
        WritingStyle::Natural => println!("Writing style seems natural."),
    }

    section("Methodology & Data Type");
    println!("Methodology: {}", join_or_not_found(&summary.methodology));
    println!("Data type:   {}", summary.data_type.as_str());

    section("Data Analysis Techniques");
    println!("{}", join_or_not_found(&summary.analysis_tools));

    section("Theoretical Frameworks");
    println!("{}", join_or_not_found(&summary.frameworks));

    section("Journals Used in Citations");
    match &summary.journals {
        Detected::Found(journals) => {
            for journal in journals {
                println!("  - {journal}");
            }
        }
        Detected::NotFound => println!("Not Found"),
    }

    section("Recent References (Last 5 Years)");
    if summary.recent_references.is_empty() {
        println!("No recent references found");
    } else {
        for (year, count) in summary.recent_references.iter().rev() {
            println!("  {year}: {count}");
        }
    }

    section("Key Findings / Usefulness of Study");
    match &summary.key_findings {
        Detected::Found(findings) => {
            for finding in findings {
                println!("  - {}", capitalize_first(finding));
            }
        }
        Detected::NotFound => println!("Not clearly mentioned"),
    }
    println!();
}

fn section(title: &str) {
    println!();
    println!("{title}");
    println!("{}", "-".repeat(title.len()));
}

fn join_or_not_found(items: &[String]) -> String {
    if items.is_empty() {
        "Not Found".to_string()
    } else {
        items.join(", ")
    }
}

/// Uppercase the first letter for display, leaving the rest as written so
/// acronyms and proper nouns survive.
fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
