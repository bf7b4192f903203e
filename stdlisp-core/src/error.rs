// stdlisp-core - Error types for the stdlisp builtins
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Error types for builtin operations.

use std::fmt;

/// Result type for builtin operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that a builtin can report to the evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Operand kind outside the operation's accepted set
    TypeError {
        expected: &'static str,
        got: &'static str,
        context: Option<String>,
    },
    /// Wrong number of arguments
    ArgumentError {
        expected: AritySpec,
        got: usize,
        name: Option<String>,
    },
    /// Exact zero divisor
    DivisionByZero,
    /// No builtin registered under this name
    UnknownBuiltin(String),
}

/// Discriminant of [`Error`], for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    TypeError,
    ArgumentError,
    DivisionByZero,
    UnknownBuiltin,
}

/// Specification for expected arity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AritySpec {
    Exact(usize),
    AtLeast(usize),
}

impl fmt::Display for AritySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AritySpec::Exact(n) => write!(f, "{}", n),
            AritySpec::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TypeError {
                expected,
                got,
                context,
            } => {
                if let Some(ctx) = context {
                    write!(f, "{}: expected {}, got {}", ctx, expected, got)
                } else {
                    write!(f, "Type error: expected {}, got {}", expected, got)
                }
            }
            Error::ArgumentError {
                expected,
                got,
                name,
            } => {
                if let Some(name) = name {
                    write!(
                        f,
                        "Wrong number of arguments to '{}': expected {}, got {}",
                        name, expected, got
                    )
                } else {
                    write!(
                        f,
                        "Wrong number of arguments: expected {}, got {}",
                        expected, got
                    )
                }
            }
            Error::DivisionByZero => {
                write!(f, "Division by zero")
            }
            Error::UnknownBuiltin(name) => {
                write!(f, "No builtin named '{}'", name)
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// The kind of this error, without its payload.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::TypeError { .. } => ErrorKind::TypeError,
            Error::ArgumentError { .. } => ErrorKind::ArgumentError,
            Error::DivisionByZero => ErrorKind::DivisionByZero,
            Error::UnknownBuiltin(_) => ErrorKind::UnknownBuiltin,
        }
    }

    /// Create an arity error for exact arity with function name.
    pub fn arity_named(name: impl Into<String>, expected: usize, got: usize) -> Self {
        Error::ArgumentError {
            expected: AritySpec::Exact(expected),
            got,
            name: Some(name.into()),
        }
    }

    /// Create an arity error for minimum arity with function name.
    pub fn arity_at_least(name: impl Into<String>, expected: usize, got: usize) -> Self {
        Error::ArgumentError {
            expected: AritySpec::AtLeast(expected),
            got,
            name: Some(name.into()),
        }
    }

    /// Create a type error.
    pub fn type_error(expected: &'static str, got: &'static str) -> Self {
        Error::TypeError {
            expected,
            got,
            context: None,
        }
    }

    /// Create a type error with context.
    pub fn type_error_in(
        context: impl Into<String>,
        expected: &'static str,
        got: &'static str,
    ) -> Self {
        Error::TypeError {
            expected,
            got,
            context: Some(context.into()),
        }
    }
}
