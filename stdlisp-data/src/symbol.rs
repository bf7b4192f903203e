// stdlisp-data - Interned symbols
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Symbols are opaque identifiers handed to this core by the reader.
//!
//! # Interning
//!
//! Every symbol name is stored once in a process-wide interner. Two symbols
//! with the same name share one allocation, which gives symbols the identity
//! semantics `eqv?` needs:
//!
//! - **O(1) equality**: comparing symbols is a pointer comparison
//! - **O(1) hashing**: the hash is taken from the pointer address
//!
//! Interned names are never freed. Symbols come from source text, so the set
//! of live names stays small in practice.
//!
//! # Thread Safety
//!
//! The interner sits behind a `Mutex`. Creating a symbol takes the lock;
//! comparing, hashing and printing do not.

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

/// An interned identifier.
#[derive(Clone)]
pub struct Symbol {
    name: Arc<str>,
}

static SYMBOL_INTERNER: OnceLock<Mutex<HashSet<Arc<str>>>> = OnceLock::new();

fn intern(name: &str) -> Arc<str> {
    let interner = SYMBOL_INTERNER.get_or_init(|| Mutex::new(HashSet::new()));
    // The set is only ever inserted into, so a poisoned lock still guards a
    // consistent table.
    let mut names = interner.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(existing) = names.get(name) {
        return Arc::clone(existing);
    }
    let interned: Arc<str> = Arc::from(name);
    names.insert(Arc::clone(&interned));
    interned
}

impl Symbol {
    /// Intern `name` and return its symbol.
    pub fn new(name: &str) -> Self {
        Symbol { name: intern(name) }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.name)
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        // Interning makes pointer identity equivalent to name equality
        Arc::ptr_eq(&self.name, &other.name)
    }
}

impl Eq for Symbol {}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.name.cmp(&other.name)
    }
}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.name).cast::<u8>().hash(state);
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Symbol::new(name)
    }
}

// ============================================================================
// Tests
// ============================================================================
