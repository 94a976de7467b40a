//! Lint codes, diagnostics and the per-stadium result.

use std::fmt;

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        })
    }
}

/// Every lint `hbs validate` knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lint {
    DegenerateSegment,
    SelfJoint,
    JointRange,
    ZeroGoal,
    PlaneNormal,
    DiscRadius,
}

impl Lint {
    /// Stable code printed next to each finding.
    pub fn code(self) -> &'static str {
        match self {
            Lint::DegenerateSegment => "hbs::lint::degenerate-segment",
            Lint::SelfJoint => "hbs::lint::self-joint",
            Lint::JointRange => "hbs::lint::joint-range",
            Lint::ZeroGoal => "hbs::lint::zero-goal",
            Lint::PlaneNormal => "hbs::lint::plane-normal",
            Lint::DiscRadius => "hbs::lint::disc-radius",
        }
    }
}

impl fmt::Display for Lint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single lint finding against one entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub lint: Lint,
    pub severity: Severity,
    /// Entity the finding is about, e.g. `joints[2]` or `ball`.
    pub target: String,
    pub message: String,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(lint: Lint, target: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(lint, Severity::Error, target.into(), message.into())
    }

    pub fn warning(lint: Lint, target: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(lint, Severity::Warning, target.into(), message.into())
    }

    fn new(lint: Lint, severity: Severity, target: String, message: String) -> Self {
        Self {
            lint,
            severity,
            target,
            message,
            help: None,
        }
    }

    /// Attach a hint on how to fix the finding.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.target, self.message)
    }
}

/// Diagnostics from every lint over one stadium, in check order.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Number of findings at the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.count(Severity::Error) > 0
    }

    pub fn has_warnings(&self) -> bool {
        self.count(Severity::Warning) > 0
    }

    /// True when no lint fired at all.
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Findings raised by one lint.
    pub fn of(&self, lint: Lint) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.lint == lint)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }
}

impl Extend<Diagnostic> for ValidationResult {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        self.diagnostics.extend(iter);
    }
}

impl IntoIterator for ValidationResult {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}
