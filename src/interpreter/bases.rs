//! Named collection of independent forwarding bases

use std::collections::BTreeMap;

use tracing::info;

use crate::errors::{PhoneForwardError, Result};
use crate::forward::PhoneForward;

/// Bases keyed by identifier. `limit == 0` means unlimited.
#[derive(Debug, Default)]
pub struct BaseRegistry {
    bases: BTreeMap<String, PhoneForward>,
    limit: usize,
}

impl BaseRegistry {
    pub fn new(limit: usize) -> Self {
        Self {
            bases: BTreeMap::new(),
            limit,
        }
    }

    /// Create `name` unless it already exists. Returns whether it was created.
    pub fn create(&mut self, name: &str) -> Result<bool> {
        if self.bases.contains_key(name) {
            return Ok(false);
        }
        if self.limit != 0 && self.bases.len() >= self.limit {
            return Err(PhoneForwardError::resource_exhausted(format!(
                "base limit of {} reached",
                self.limit
            )));
        }
        self.bases.insert(name.to_string(), PhoneForward::try_new()?);
        info!(base = name, "base created");
        Ok(true)
    }

    /// Drop `name` and all its redirections.
    pub fn delete(&mut self, name: &str) -> Result<()> {
        match self.bases.remove(name) {
            Some(base) => {
                info!(base = name, redirections = base.len(), "base deleted");
                Ok(())
            }
            None => Err(PhoneForwardError::not_found(format!("no base named {}", name))),
        }
    }

    pub fn get(&self, name: &str) -> Option<&PhoneForward> {
        self.bases.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut PhoneForward> {
        self.bases.get_mut(name)
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bases.keys().map(String::as_str)
    }
}
