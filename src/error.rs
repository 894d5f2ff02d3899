use miette::Diagnostic;
use thiserror::Error;

/// Main error type for ged operations.
///
/// Every fatal parse condition gets its own variant so callers can match
/// on the failure kind; messages carry the offending token and the
/// 1-based source line.
#[derive(Error, Diagnostic, Debug)]
pub enum GedError {
    #[error("IO error: {0}")]
    #[diagnostic(code(ged::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {}: {message}", path.display())]
    #[diagnostic(code(ged::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid level {token} in line {line}")]
    #[diagnostic(code(ged::parse::invalid_level))]
    InvalidLevel { token: String, line: usize },

    #[error("Invalid cross reference id {token} in line {line}")]
    #[diagnostic(code(ged::parse::invalid_cross_reference))]
    InvalidCrossReference { token: String, line: usize },

    #[error("Duplicate cross reference id {id} in line {line}")]
    #[diagnostic(code(ged::parse::duplicate_cross_reference))]
    DuplicateCrossReference { id: String, line: usize },

    #[error("Invalid tag {token} in line {line}")]
    #[diagnostic(code(ged::parse::invalid_tag))]
    InvalidTag { token: String, line: usize },

    #[error("Duplicate cross reference and pointer in line {line}")]
    #[diagnostic(code(ged::parse::duplicate_pointer))]
    DuplicatePointerAndReference { line: usize },

    #[error("The record '{record}' references a record which does not exist")]
    #[diagnostic(
        code(ged::resolve::unresolved_pointer),
        help("Every pointer must match a top-level record defined with @...@")
    )]
    UnresolvedPointer { record: String },

    #[error("The record '{record}' references an individual which does not exist")]
    #[diagnostic(
        code(ged::resolve::not_an_individual),
        help("HUSB, WIFE and CHIL must point at INDI records")
    )]
    PointerNotIndividual { record: String },

    #[error("Malformed calendar escape in date '{value}' in line {line}")]
    #[diagnostic(code(ged::date::malformed_calendar))]
    MalformedCalendar { value: String, line: usize },

    #[error("Unknown calendar '{marker}' in line {line}")]
    #[diagnostic(code(ged::date::unknown_calendar))]
    UnknownCalendar { marker: String, line: usize },

    #[error("Date range '{value}' in line {line} is missing AND")]
    #[diagnostic(code(ged::date::incomplete_range))]
    IncompleteRange { value: String, line: usize },

    #[error("Unbalanced parenthesis in date phrase '{value}' in line {line}")]
    #[diagnostic(code(ged::date::unbalanced_phrase))]
    UnbalancedDatePhrase { value: String, line: usize },

    #[error("Unterminated surname in name '{value}' in line {line}")]
    #[diagnostic(code(ged::name::unterminated_surname))]
    UnterminatedSurname { value: String, line: usize },

    #[error("Unrecognized tag {tag} in {context} in line {line}")]
    #[diagnostic(code(ged::parse::unrecognized_tag))]
    UnrecognizedTag {
        tag: String,
        context: &'static str,
        line: usize,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(ged::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, GedError>;
