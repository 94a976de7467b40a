//! Validate command implementation.
//!
//! Parses every discovered stadium, then runs the lints over the ones that
//! load.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::{discover, discover_paths};
use crate::error::{HbsError, Result};
use crate::output::{display_path, plural, Printer};
use crate::parser::load;
use crate::validation::{validate_stadium, Severity, ValidationResult};

/// Parse stadium files and report problems
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Files or directories to check (default: the project in the current directory)
    pub files: Vec<PathBuf>,

    /// Treat lint warnings as failures
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let discovery = if args.files.is_empty() {
        discover(".")?
    } else {
        discover_paths(&args.files)?
    };

    let total = discovery.scan.total();
    let mut failed = 0;
    let mut warnings = 0;

    for path in &discovery.scan.files {
        let shown = display_path(path);

        let stadium = match load(path) {
            Ok(stadium) => stadium,
            Err(e) => {
                printer.error("Failed", &format!("{}: {}", shown, e));
                failed += 1;
                continue;
            }
        };

        let result = validate_stadium(&stadium);
        warnings += result.count(Severity::Warning);

        if result.has_errors() || (args.strict && result.has_warnings()) {
            printer.error("Failed", &format!("{} ({})", shown, stadium.name));
            failed += 1;
        } else if result.has_warnings() {
            printer.warning("Checked", &format!("{} ({})", shown, stadium.name));
        } else {
            printer.status("Checked", &format!("{} ({})", shown, stadium.name));
        }
        print_diagnostics(&result, printer);
    }

    let summary = format!(
        "{}, {}",
        plural(total, "stadium", "stadiums"),
        plural(warnings, "warning", "warnings")
    );

    if failed > 0 {
        printer.error("Finished", &summary);
        return Err(HbsError::ValidationFailed { failed, total });
    }

    printer.status("Finished", &summary);
    Ok(())
}

fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        eprintln!("  {}[{}]: {}", printer.severity(d.severity), d.lint, d);
        if let Some(help) = &d.help {
            eprintln!("    {}", printer.dim(&format!("help: {}", help)));
        }
    }
}
