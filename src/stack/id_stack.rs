use crate::errors::{NavError, Result};
use std::collections::HashMap;

/// LIFO stack of values keyed by unique string identifiers.
///
/// `order` holds the identifiers from bottom (root) to top; `entries` maps each
/// identifier to its value. Both always hold the same set of identifiers.
#[derive(Debug, Clone)]
pub struct IdStack<T> {
    order: Vec<String>,
    entries: HashMap<String, T>,
}

impl<T> Default for IdStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IdStack<T> {
    /// Create a new empty stack
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            entries: HashMap::new(),
        }
    }

    /// Add a value to the top of the stack.
    ///
    /// Identifiers must be unique; pushing one that is already present fails
    /// with [`NavError::DuplicateId`] and leaves the stack untouched.
    pub fn push(&mut self, id: impl Into<String>, value: T) -> Result<()> {
        let id = id.into();
        if self.entries.contains_key(&id) {
            return Err(NavError::DuplicateId(id));
        }

        self.order.push(id.clone());
        self.entries.insert(id, value);
        Ok(())
    }

    /// Remove and return the top value
    pub fn pop(&mut self) -> Result<T> {
        let id = self.order.pop().ok_or(NavError::EmptyStack)?;
        self.entries
            .remove(&id)
            .ok_or_else(|| NavError::corruption(format!("Entry {id} missing from entry map")))
    }

    /// Get the top value without removing it
    pub fn peek(&self) -> Option<&T> {
        self.order.last().and_then(|id| self.entries.get(id))
    }

    /// Identifier of the top value
    pub fn peek_id(&self) -> Option<&str> {
        self.order.last().map(String::as_str)
    }

    /// Get a value by identifier
    pub fn get(&self, id: &str) -> Option<&T> {
        self.entries.get(id)
    }

    /// Remove an arbitrary entry, preserving the relative order of the rest
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let value = self.entries.remove(id)?;
        self.order.retain(|entry| entry != id);
        Some(value)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn is_top(&self, id: &str) -> bool {
        self.order.last().is_some_and(|top| top == id)
    }

    /// Number of entries above `id`, or `None` if `id` is not resident
    pub fn depth_of(&self, id: &str) -> Option<usize> {
        self.order
            .iter()
            .rev()
            .position(|entry| entry == id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// All values, in no particular order
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    /// Identifiers from bottom to top. Each call starts a fresh traversal.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.order.iter().map(String::as_str)
    }

    /// Remove every entry, returning the values from top to bottom
    pub fn drain(&mut self) -> Vec<T> {
        let mut drained = Vec::with_capacity(self.order.len());
        while let Some(id) = self.order.pop() {
            if let Some(value) = self.entries.remove(&id) {
                drained.push(value);
            }
        }
        self.entries.clear();
        drained
    }

    /// Validate the stack structure
    pub fn validate(&self) -> Result<()> {
        if self.order.len() != self.entries.len() {
            return Err(NavError::corruption(format!(
                "Order has {} ids but entry map has {}",
                self.order.len(),
                self.entries.len()
            )));
        }

        for id in &self.order {
            if !self.entries.contains_key(id) {
                return Err(NavError::corruption(format!(
                    "Entry {id} not found in entry map"
                )));
            }
        }

        Ok(())
    }
}
