//! Lock-free single-assignment cell for derived item views

use once_cell::race::OnceBox;
use std::fmt;

/// Compute-once, publish-once cell
///
/// Threads racing on the first access may each run the initializer, but only
/// the first published value is kept; the others are dropped. Initializers
/// must therefore be pure.
pub struct Memo<T> {
    cell: OnceBox<T>,
}

impl<T> Memo<T> {
    /// Create an empty cell
    pub const fn new() -> Self {
        Self {
            cell: OnceBox::new(),
        }
    }

    /// Create a cell that already holds `value`
    pub fn with_value(value: T) -> Self {
        let memo = Self::new();
        let _ = memo.cell.set(Box::new(value));
        memo
    }

    /// Get the value if it has been published
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Get the value, computing and publishing it on first access
    pub fn get_or_init<F>(&self, f: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.cell.get_or_init(|| Box::new(f()))
    }

    /// Fallible variant of [`Memo::get_or_init`]; errors are not cached
    pub fn get_or_try_init<F, E>(&self, f: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.cell.get_or_try_init(|| f().map(Box::new))
    }
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Memo<T> {
    fn clone(&self) -> Self {
        match self.get() {
            Some(value) => Self::with_value(value.clone()),
            None => Self::new(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Memo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => f.debug_tuple("Memo").field(value).finish(),
            None => f.write_str("Memo(<pending>)"),
        }
    }
}
