use std::fmt;
use std::path::PathBuf;

/// Error produced by rule construction from text or by path queries.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// A query was made with an empty candidate path.
    #[error("candidate path must not be empty")]
    EmptyPath,
    /// Rule text could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A rules file could not be read.
    #[error("failed to read filter rules from '{}': {source}", .path.display())]
    Io {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Reason a line of rule text was rejected.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseErrorKind {
    /// The rule prefix was present but no pattern followed it.
    MissingPattern,
    /// The line did not start with a known rule prefix.
    UnknownRule(String),
    /// An unrecognised modifier letter followed the rule prefix.
    UnknownModifier(char),
    /// Both files-only and directories-only were requested.
    ConflictingModifiers,
    /// The pattern cannot be written as rule text: it is empty, has
    /// surrounding whitespace, ends with `/` or contains a newline.
    UnrepresentablePattern,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPattern => f.write_str("missing pattern"),
            Self::UnknownRule(rule) => write!(f, "unknown rule '{rule}'"),
            Self::UnknownModifier(modifier) => write!(f, "unknown modifier '{modifier}'"),
            Self::ConflictingModifiers => {
                f.write_str("rule cannot be both files-only and directories-only")
            }
            Self::UnrepresentablePattern => f.write_str("pattern cannot be written as rule text"),
        }
    }
}

/// Error produced when a line of rule text cannot be parsed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseError {
    line: Option<usize>,
    text: String,
    kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(text: impl Into<String>, kind: ParseErrorKind) -> Self {
        Self {
            line: None,
            text: text.into(),
            kind,
        }
    }

    pub(crate) fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Returns the 1-based line number, when parsing multi-line text.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        self.line
    }

    /// Returns the offending rule text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns what was wrong with the rule.
    #[must_use]
    pub const fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(
                f,
                "invalid filter rule on line {line} '{}': {}",
                self.text, self.kind
            ),
            None => write!(f, "invalid filter rule '{}': {}", self.text, self.kind),
        }
    }
}

impl std::error::Error for ParseError {}
