//! Symbol table for semantic analysis.
//!
//! This module provides [`SymbolTable`], tracking function and variable
//! definitions with proper lexical scoping. Each scope is a fixed-size
//! 256-bucket chained hash table keyed by name, hashed with DJB2, per the
//! symbol-table representation the language calls for.

use crate::ast::DataType;
use crate::token::Span;

const BUCKET_COUNT: usize = 256;

/// DJB2: `h = 5381; for c in bytes: h = ((h << 5) + h) + c`.
fn djb2(name: &str) -> usize {
    let mut hash: u64 = 5381;
    for byte in name.bytes() {
        hash = hash.wrapping_shl(5).wrapping_add(hash).wrapping_add(byte as u64);
    }
    (hash as usize) % BUCKET_COUNT
}

/// A fixed-size chained hash table keyed by name.
///
/// Collisions within a bucket are resolved by a linear scan of that
/// bucket's chain; this stays cheap because real scopes hold at most a
/// few dozen symbols.
struct HashTable<V> {
    buckets: Vec<Vec<(String, V)>>,
}

impl<V> HashTable<V> {
    fn new() -> Self {
        let mut buckets = Vec::with_capacity(BUCKET_COUNT);
        buckets.resize_with(BUCKET_COUNT, Vec::new);
        HashTable { buckets }
    }

    fn get(&self, name: &str) -> Option<&V> {
        self.buckets[djb2(name)]
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Inserts `value` under `name`, returning the previous value if one
    /// already occupied that name in this table.
    fn insert(&mut self, name: String, value: V) -> Option<V> {
        let bucket = &mut self.buckets[djb2(&name)];
        if let Some(slot) = bucket.iter_mut().find(|(key, _)| *key == name) {
            return Some(std::mem::replace(&mut slot.1, value));
        }
        bucket.push((name, value));
        None
    }
}

/// Information about a declared function.
#[derive(Debug, Clone)]
pub struct FunctionInfo {
    pub name: String,
    pub return_type: DataType,
    pub param_types: Vec<DataType>,
    /// Set once a declaration with a body has been seen. A prototype alone
    /// leaves this `false`.
    pub defined: bool,
    pub span: Span,
}

/// Information about a declared variable (global or local).
#[derive(Debug, Clone)]
pub struct VariableInfo {
    pub name: String,
    pub ty: DataType,
    pub span: Span,
}

/// Symbol table for semantic analysis.
///
/// Functions live in a single flat global table (TinyC has no nested
/// function declarations). Variables live in a stack of scopes; scope 0 is
/// the permanent global scope holding top-level variable declarations,
/// pushed once at construction and never popped. Lookups walk the stack
/// from innermost to outermost.
pub struct SymbolTable {
    functions: HashTable<FunctionInfo>,
    scopes: Vec<HashTable<VariableInfo>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            functions: HashTable::new(),
            scopes: vec![HashTable::new()],
        }
    }

    /// Declares or re-declares a function, returning the previous
    /// [`FunctionInfo`] if the name was already bound (the caller decides
    /// whether that's a legal prototype/definition pair or an error).
    pub fn declare_function(&mut self, info: FunctionInfo) -> Option<FunctionInfo> {
        self.functions.insert(info.name.clone(), info)
    }

    pub fn lookup_function(&self, name: &str) -> Option<&FunctionInfo> {
        self.functions.get(name)
    }

    pub fn enter_scope(&mut self) {
        self.scopes.push(HashTable::new());
    }

    pub fn exit_scope(&mut self) {
        debug_assert!(self.scopes.len() > 1, "the global scope must never be popped");
        self.scopes.pop();
    }

    /// Declares a variable in the current (innermost) scope, returning the
    /// previous [`VariableInfo`] if one already occupied that name *in this
    /// same scope* — shadowing an outer scope is not a collision.
    pub fn declare_variable(&mut self, info: VariableInfo) -> Option<VariableInfo> {
        let current = self.scopes.last_mut().expect("at least the global scope is always present");
        current.insert(info.name.clone(), info)
    }

    /// Looks up a variable, searching from the innermost scope outward.
    pub fn lookup_variable(&self, name: &str) -> Option<&VariableInfo> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
