use std::fmt;

/// A parse error from a `.shader` bundle file.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    /// 1-based source line number where the error occurred.
    pub line: usize,
}

impl ParseError {
    pub(crate) fn new(msg: impl Into<String>, line: usize) -> Self {
        Self { message: msg.into(), line }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shader bundle parse error at line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ParseError {}
