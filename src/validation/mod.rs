//! Lints for parsed stadiums.
//!
//! Parsing already rejects anything structurally wrong. These checks look for
//! stadiums that load but probably do not behave as intended. Used by
//! `hbs validate`.

mod checks;
mod lint;

pub use lint::{Diagnostic, Lint, Severity, ValidationResult};

use crate::types::Stadium;

/// Run all lints against a stadium.
pub fn validate_stadium(stadium: &Stadium) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.extend(checks::check_degenerate_segments(stadium));
    result.extend(checks::check_joints(stadium));
    result.extend(checks::check_goals(stadium));
    result.extend(checks::check_plane_normals(stadium));
    result.extend(checks::check_disc_radius(stadium));

    result
}
