use thiserror::Error;

/// A problem with how options or name tables were declared.
///
/// These are programmer errors in the embedding program, not user input
/// errors, but they are still reported as values so nothing panics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationError {
    #[error("option declared without a short or long name (help: {help:?})")]
    Unnamed { help: &'static str },

    #[error("option name {name} is registered more than once")]
    DuplicateName { name: String },

    #[error("name table maps {name:?} more than once")]
    DuplicateEnumName { name: &'static str },

    #[error("name table maps one value to both {first:?} and {second:?}")]
    DuplicateEnumValue {
        first: &'static str,
        second: &'static str,
    },
}

/// Why a matched option could not take its value(s).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsumeError {
    #[error("missing value")]
    MissingValue,

    #[error("value is empty")]
    EmptyValue,

    #[error("does not accept the name=value form")]
    InlineNotAccepted,

    #[error("requires the name=value form")]
    InlineRequired,

    #[error("invalid value '{value}': {reason}")]
    InvalidValue { value: String, reason: String },

    #[error("expected at least {min} value(s), found {found}")]
    TooFewValues { min: usize, found: usize },

    #[error("unknown choice '{value}'")]
    UnknownChoice { value: String },
}

/// Outcome of a failed [`Parser::parse`](crate::Parser::parse).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("arguments were already parsed")]
    AlreadyParsed,

    #[error(transparent)]
    Declaration(#[from] DeclarationError),

    #[error("{option}: {source}")]
    Consume {
        option: String,
        #[source]
        source: ConsumeError,
    },

    #[error("{0}")]
    Validation(String),
}

pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consume_error_names_the_option() {
        let err = ParseError::Consume {
            option: "--count".to_string(),
            source: ConsumeError::TooFewValues { min: 2, found: 1 },
        };
        assert_eq!(
            err.to_string(),
            "--count: expected at least 2 value(s), found 1"
        );
    }

    #[test]
    fn declaration_errors_convert_into_parse_errors() {
        let err: ParseError = DeclarationError::DuplicateName {
            name: "-v".to_string(),
        }
        .into();
        assert!(matches!(err, ParseError::Declaration(_)));
        assert!(err.to_string().contains("-v"));
    }
}
