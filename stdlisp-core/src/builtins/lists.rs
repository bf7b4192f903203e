// stdlisp-core - List built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! List operations: car, cdr, cons, list, append, reverse, length
//!
//! Results share structure with their inputs wherever possible: `cdr`
//! returns the tail itself, `append` links its last argument in without
//! copying it, and `reverse` reuses the original elements.

use stdlisp_data::LispVal;

use crate::error::{Error, Result};

/// Kind name for type errors on list arguments, calling out improper chains.
fn list_type_name(val: &LispVal) -> &'static str {
    match val {
        LispVal::Pair(_) if !val.is_proper_list() => "improper list",
        other => other.type_name(),
    }
}

// ============================================================================
// Pair Access
// ============================================================================

pub fn builtin_car(args: &[LispVal]) -> Result<LispVal> {
    if args.len() != 1 {
        return Err(Error::arity_named("car", 1, args.len()));
    }
    match &args[0] {
        LispVal::Pair(p) => Ok(p.first().clone()),
        other => Err(Error::type_error_in("car", "pair", other.type_name())),
    }
}

pub fn builtin_cdr(args: &[LispVal]) -> Result<LispVal> {
    if args.len() != 1 {
        return Err(Error::arity_named("cdr", 1, args.len()));
    }
    match &args[0] {
        LispVal::Nil => Ok(LispVal::Nil),
        LispVal::Pair(p) => Ok(p.rest().clone()),
        other => Err(Error::type_error_in("cdr", "pair", other.type_name())),
    }
}

// ============================================================================
// Construction
// ============================================================================

pub fn builtin_cons(args: &[LispVal]) -> Result<LispVal> {
    if args.len() != 2 {
        return Err(Error::arity_named("cons", 2, args.len()));
    }
    Ok(LispVal::cons(args[0].clone(), args[1].clone()))
}

pub fn builtin_list(args: &[LispVal]) -> Result<LispVal> {
    Ok(LispVal::list(args.iter().cloned()))
}

/// Concatenate lists at the top level.
///
/// Every argument but the last is copied spine-first; the last argument is
/// linked in as-is and may be any value, which gives a dotted result.
pub fn builtin_append(args: &[LispVal]) -> Result<LispVal> {
    let Some((last, init)) = args.split_last() else {
        return Ok(LispVal::Nil);
    };

    if init.is_empty() {
        return match last {
            LispVal::Nil | LispVal::Pair(_) => Ok(last.clone()),
            other => Err(Error::type_error_in("append", "list", other.type_name())),
        };
    }

    if let Some(bad) = init.iter().find(|arg| !arg.is_proper_list()) {
        return Err(Error::type_error_in(
            "append",
            "proper list",
            list_type_name(bad),
        ));
    }

    let elements: Vec<LispVal> = init.iter().flat_map(LispVal::iter).cloned().collect();
    Ok(LispVal::list_with_tail(elements, last.clone()))
}

// ============================================================================
// Traversal
// ============================================================================

pub fn builtin_reverse(args: &[LispVal]) -> Result<LispVal> {
    if args.len() != 1 {
        return Err(Error::arity_named("reverse", 1, args.len()));
    }
    let list = &args[0];
    match list {
        // Nil and one-element lists are their own reverse
        LispVal::Nil => Ok(list.clone()),
        LispVal::Pair(p) if p.rest().is_nil() => Ok(list.clone()),
        LispVal::Pair(_) if list.is_proper_list() => Ok(list
            .iter()
            .fold(LispVal::Nil, |acc, item| LispVal::cons(item.clone(), acc))),
        other => Err(Error::type_error_in(
            "reverse",
            "proper list",
            list_type_name(other),
        )),
    }
}

pub fn builtin_length(args: &[LispVal]) -> Result<LispVal> {
    if args.len() != 1 {
        return Err(Error::arity_named("length", 1, args.len()));
    }
    args[0]
        .list_length()
        .map(LispVal::integer)
        .ok_or_else(|| Error::type_error_in("length", "proper list", list_type_name(&args[0])))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn int(n: i64) -> LispVal {
        LispVal::integer(n)
    }

    fn list123() -> LispVal {
        LispVal::list([int(1), int(2), int(3)])
    }

    #[test]
    fn test_car() {
        assert_eq!(builtin_car(&[list123()]).unwrap(), int(1));
        assert_eq!(
            builtin_car(&[]).unwrap_err(),
            Error::arity_named("car", 1, 0)
        );
        assert_eq!(
            builtin_car(&[int(3)]).unwrap_err(),
            Error::type_error_in("car", "pair", "integer")
        );
        assert_eq!(builtin_car(&[LispVal::Nil]).unwrap_err().kind(), ErrorKind::TypeError);
    }

    #[test]
    fn test_cdr() {
        assert_eq!(
            builtin_cdr(&[list123()]).unwrap(),
            LispVal::list([int(2), int(3)])
        );
        assert_eq!(builtin_cdr(&[LispVal::Nil]).unwrap(), LispVal::Nil);
        assert_eq!(
            builtin_cdr(&[LispVal::cons(int(1), int(2))]).unwrap(),
            int(2)
        );
        assert_eq!(builtin_cdr(&[int(1)]).unwrap_err().kind(), ErrorKind::TypeError);
        assert_eq!(
            builtin_cdr(&[LispVal::Nil, LispVal::Nil]).unwrap_err().kind(),
            ErrorKind::ArgumentError
        );
    }

    #[test]
    fn test_cdr_shares_tail() {
        let tail = LispVal::list([int(2)]);
        let l = LispVal::cons(int(1), tail.clone());
        assert!(builtin_cdr(&[l]).unwrap().ptr_eq(&tail));
    }

    #[test]
    fn test_cons_and_list() {
        assert_eq!(
            builtin_cons(&[int(1), LispVal::Nil]).unwrap(),
            LispVal::list([int(1)])
        );
        assert_eq!(builtin_cons(&[int(1)]).unwrap_err().kind(), ErrorKind::ArgumentError);
        assert_eq!(builtin_list(&[]).unwrap(), LispVal::Nil);
        assert_eq!(builtin_list(&[int(1), int(2), int(3)]).unwrap(), list123());
    }

    #[test]
    fn test_append_empty_and_single() {
        assert_eq!(builtin_append(&[]).unwrap(), LispVal::Nil);
        assert_eq!(builtin_append(&[LispVal::Nil]).unwrap(), LispVal::Nil);
        let l = list123();
        assert!(builtin_append(&[l.clone()]).unwrap().ptr_eq(&l));
        assert_eq!(
            builtin_append(&[int(1)]).unwrap_err(),
            Error::type_error_in("append", "list", "integer")
        );
    }

    #[test]
    fn test_append_shares_last() {
        let first = LispVal::list([int(1), int(2)]);
        let last = LispVal::list([int(3)]);
        let result = builtin_append(&[first.clone(), LispVal::Nil, last.clone()]).unwrap();
        assert_eq!(result, list123());
        assert!(result.cdr().unwrap().cdr().unwrap().ptr_eq(&last));
        // first argument untouched
        assert_eq!(first, LispVal::list([int(1), int(2)]));
    }

    #[test]
    fn test_append_dotted_tail() {
        let result = builtin_append(&[LispVal::list([int(1), int(2)]), int(3)]).unwrap();
        assert_eq!(result.to_string(), "(1 2 . 3)");
    }

    #[test]
    fn test_append_improper_leading_argument() {
        let err = builtin_append(&[LispVal::cons(int(1), int(2)), LispVal::Nil]).unwrap_err();
        assert_eq!(err, Error::type_error_in("append", "proper list", "improper list"));
    }

    #[test]
    fn test_reverse() {
        assert_eq!(
            builtin_reverse(&[list123()]).unwrap(),
            LispVal::list([int(3), int(2), int(1)])
        );
        let single = LispVal::list([int(1)]);
        assert!(builtin_reverse(&[single.clone()]).unwrap().ptr_eq(&single));
        assert_eq!(builtin_reverse(&[LispVal::Nil]).unwrap(), LispVal::Nil);
    }

    #[test]
    fn test_reverse_shares_elements() {
        let inner = LispVal::list([int(9)]);
        let l = LispVal::list([inner.clone(), int(1)]);
        let reversed = builtin_reverse(&[l]).unwrap();
        assert!(reversed.cdr().unwrap().car().unwrap().ptr_eq(&inner));
    }

    #[test]
    fn test_reverse_errors() {
        assert_eq!(
            builtin_reverse(&[LispVal::cons(int(1), int(2))]).unwrap_err(),
            Error::type_error_in("reverse", "proper list", "improper list")
        );
        assert_eq!(builtin_reverse(&[int(1)]).unwrap_err().kind(), ErrorKind::TypeError);
        assert_eq!(builtin_reverse(&[]).unwrap_err().kind(), ErrorKind::ArgumentError);
    }

    #[test]
    fn test_length() {
        assert_eq!(builtin_length(&[list123()]).unwrap(), int(3));
        assert_eq!(builtin_length(&[LispVal::Nil]).unwrap(), int(0));
        assert_eq!(
            builtin_length(&[LispVal::list_with_tail([int(1), int(2)], int(3))]).unwrap_err(),
            Error::type_error_in("length", "proper list", "improper list")
        );
        assert_eq!(builtin_length(&[]).unwrap_err().kind(), ErrorKind::ArgumentError);
        assert_eq!(
            builtin_length(&[LispVal::Nil, LispVal::Nil]).unwrap_err().kind(),
            ErrorKind::ArgumentError
        );
    }
}
