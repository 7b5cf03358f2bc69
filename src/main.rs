use clap::{Parser, Subcommand};
use scribe::cli;
use scribe::error::ScribeResult;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scribe")]
#[command(about = "Monthly drug & supplies expenditure report from the accounting workbook.")]
#[command(long_about = "Scribe - Monthly expenditure report generator

Reads the accounting office's monthly Excel workbook, extracts the 34
drug/supplies expenditure figures for one period, and fills the fixed
report template.

COMMANDS:
  generate - Extract, format, and write the report as a Word (.docx) file
  preview  - Same pipeline, but print the filled report to the terminal
  fields   - List every extracted field with its source cell and value

PERIOD:
  Years are ROC calendar (民國). When --year/--month are omitted, the
  previous calendar month is used - reports cover the month that just
  closed.

EXAMPLES:
  scribe generate 113年5月報表.xlsx                 # previous month
  scribe generate monthly.xlsx -y 113 -m 5 -o 報表.docx
  scribe preview monthly.xlsx -y 113 -m 5
  scribe fields monthly.xlsx -y 113 -m 5           # debug the extraction")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Generate the monthly report as a Word (.docx) document.

Extracts the 34 expenditure figures for the period, formats them
(thousands-grouped integers, two-decimal percentages), fills the report
template, and writes one paragraph per line to the output document.

Any missing worksheet, missing year/month row, or missing month column
aborts the run with the exact location that failed - fix the workbook
and rerun. No partial report is ever written.

OUTPUT:
  Defaults to 報表_<year>_<month>.docx in the current directory.

STRICT MODE:
  --strict fails when the template's placeholder count and the token
  count disagree instead of silently truncating.")]
    /// Generate the monthly report as a Word (.docx) document
    Generate {
        /// Path to the monthly Excel workbook (.xlsx)
        workbook: PathBuf,

        /// ROC year of the report period (default: previous month's year)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=9999))]
        year: Option<u32>,

        /// Month of the report period, 1-12 (default: previous month)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        /// Output document path (.docx)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail on placeholder/token count mismatch
        #[arg(long)]
        strict: bool,

        /// Show pipeline steps
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the filled report to the terminal instead of writing a file
    Preview {
        /// Path to the monthly Excel workbook (.xlsx)
        workbook: PathBuf,

        /// ROC year of the report period (default: previous month's year)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=9999))]
        year: Option<u32>,

        /// Month of the report period, 1-12 (default: previous month)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        /// Fail on placeholder/token count mismatch
        #[arg(long)]
        strict: bool,

        /// Show pipeline steps
        #[arg(short, long)]
        verbose: bool,
    },

    #[command(long_about = "List every extracted field with its source location.

Shows, in report order, each field's worksheet and address (or key-scan /
month-column location), the raw cell text, and the formatted value that
would be substituted into the report. Use this to track down a wrong
figure before it reaches the document.")]
    /// List every extracted field with its source cell and value
    Fields {
        /// Path to the monthly Excel workbook (.xlsx)
        workbook: PathBuf,

        /// ROC year of the report period (default: previous month's year)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=9999))]
        year: Option<u32>,

        /// Month of the report period, 1-12 (default: previous month)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
    },
}

fn main() -> ScribeResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            workbook,
            year,
            month,
            output,
            strict,
            verbose,
        } => {
            let (year, month) = resolve_period(year, month);
            cli::generate(workbook, year, month, output, strict, verbose)
        }

        Commands::Preview {
            workbook,
            year,
            month,
            strict,
            verbose,
        } => {
            let (year, month) = resolve_period(year, month);
            cli::preview(workbook, year, month, strict, verbose)
        }

        Commands::Fields {
            workbook,
            year,
            month,
        } => {
            let (year, month) = resolve_period(year, month);
            cli::fields(workbook, year, month)
        }
    }
}

/// Fill in missing period parts from the previous calendar month
fn resolve_period(year: Option<u32>, month: Option<u32>) -> (u32, u32) {
    let (default_year, default_month) = cli::default_period();
    (year.unwrap_or(default_year), month.unwrap_or(default_month))
}
