use std::collections::HashMap;
use std::sync::Arc;

/// Pool of shared block type names.
///
/// Documents repeat a small vocabulary of block names (`core/paragraph`,
/// `core/group`, ...) thousands of times. Each distinct name is stored once
/// and every block holds an `Arc<str>` into the pool.
///
/// # Examples
///
/// ```
/// use rlistview::NameInterner;
/// use std::sync::Arc;
///
/// let mut names = NameInterner::new();
/// let a = names.intern("core/paragraph");
/// let b = names.intern("core/paragraph");
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
#[derive(Debug, Clone)]
pub struct NameInterner {
    names: HashMap<Box<str>, Arc<str>>,
}

impl NameInterner {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        NameInterner {
            names: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the shared copy of `name`, inserting it on first use.
    pub fn intern(&mut self, name: &str) -> Arc<str> {
        if let Some(shared) = self.names.get(name) {
            return Arc::clone(shared);
        }
        let shared: Arc<str> = Arc::from(name);
        self.names.insert(Box::from(name), Arc::clone(&shared));
        shared
    }

    /// Number of distinct names seen so far.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for NameInterner {
    fn default() -> Self {
        Self::new()
    }
}
