use miette::Diagnostic;
use thiserror::Error;

/// Main error type for hbs operations.
///
/// Decode errors carry the path of the offending field (e.g. `segments[3].v1`)
/// so callers can report where a stadium went wrong without a source span.
#[derive(Error, Diagnostic, Debug)]
pub enum HbsError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(hbs::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Malformed JSON: {message}")]
    #[diagnostic(code(hbs::json), help("Check the file is a single valid JSON object"))]
    MalformedJson { message: String },

    #[error("Type mismatch at {field}: expected {expected}, got {found}")]
    #[diagnostic(code(hbs::type_mismatch))]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Missing required field {field}")]
    #[diagnostic(code(hbs::missing))]
    MissingRequired { field: String },

    #[error("Invalid value '{value}' at {field}")]
    #[diagnostic(code(hbs::invalid_enum))]
    InvalidEnumValue {
        field: String,
        value: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid colour at {field}: {value}")]
    #[diagnostic(
        code(hbs::invalid_colour),
        help("Use \"RRGGBB\", \"AARRGGBB\", \"transparent\" or [R, G, B]")
    )]
    InvalidColor { field: String, value: String },

    #[error("Index {index} at {field} is out of range (length {len})")]
    #[diagnostic(code(hbs::index_out_of_range))]
    IndexOutOfRange {
        field: String,
        index: i64,
        len: usize,
    },

    #[error("Unknown trait '{name}' referenced at {field}")]
    #[diagnostic(
        code(hbs::unknown_trait),
        help("Declare the trait in the stadium's \"traits\" object")
    )]
    UnknownTraitReference { field: String, name: String },

    #[error("Invalid team '{team}' at {field}")]
    #[diagnostic(code(hbs::invalid_team), help("Goals must belong to \"red\" or \"blue\""))]
    InvalidTeam { field: String, team: String },

    #[error("Preview of {width} x {height} at scale {scale} exceeds {max} pixels per side")]
    #[diagnostic(code(hbs::render::too_large), help("Render at a smaller --scale"))]
    PreviewTooLarge {
        width: f64,
        height: f64,
        scale: u32,
        max: u32,
    },

    #[error("{failed} of {total} stadium(s) failed validation")]
    #[diagnostic(code(hbs::validate))]
    ValidationFailed { failed: usize, total: usize },

    #[error("Config error: {message}")]
    #[diagnostic(code(hbs::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

/// The category of an [`HbsError`], for callers that branch on failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    MalformedJson,
    TypeMismatch,
    MissingRequired,
    InvalidEnumValue,
    InvalidColor,
    IndexOutOfRange,
    UnknownTraitReference,
    InvalidTeam,
    PreviewTooLarge,
    ValidationFailed,
    Config,
}

impl HbsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            HbsError::Io { .. } => ErrorKind::Io,
            HbsError::MalformedJson { .. } => ErrorKind::MalformedJson,
            HbsError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            HbsError::MissingRequired { .. } => ErrorKind::MissingRequired,
            HbsError::InvalidEnumValue { .. } => ErrorKind::InvalidEnumValue,
            HbsError::InvalidColor { .. } => ErrorKind::InvalidColor,
            HbsError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            HbsError::UnknownTraitReference { .. } => ErrorKind::UnknownTraitReference,
            HbsError::InvalidTeam { .. } => ErrorKind::InvalidTeam,
            HbsError::PreviewTooLarge { .. } => ErrorKind::PreviewTooLarge,
            HbsError::ValidationFailed { .. } => ErrorKind::ValidationFailed,
            HbsError::Config { .. } => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, HbsError>;
