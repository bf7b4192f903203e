// stdlisp-core - I/O built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! I/O operations: format, display
//!
//! Rendering is the `Display` impl of `LispVal`, so output respects the
//! thread's print-length setting.

use std::io::{self, Write};

use stdlisp_data::LispVal;

use crate::error::{Error, Result};

// ============================================================================
// Print Output
// ============================================================================

/// Write the rendering of `val` to `writer`.
pub fn display_to<W: Write>(val: &LispVal, writer: &mut W) -> io::Result<()> {
    write!(writer, "{}", val)
}

/// (format & args) - renderings joined by single spaces
pub fn builtin_format(args: &[LispVal]) -> Result<LispVal> {
    let parts: Vec<String> = args.iter().map(|a| format!("{}", a)).collect();
    Ok(LispVal::string(parts.join(" ")))
}

/// (display x) - print x to standard output
pub fn builtin_display(args: &[LispVal]) -> Result<LispVal> {
    if args.len() != 1 {
        return Err(Error::arity_named("display", 1, args.len()));
    }
    print!("{}", args[0]);
    Ok(LispVal::Nil)
}
