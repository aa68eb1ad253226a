//! Custom role storage
//!
//! Each evaluator holds its registry behind a [`CustomRoleStore`]; clones of
//! an evaluator share it.

use crate::core::models::CustomRole;
use dashmap::DashMap;
use std::fmt::Debug;

/// Registry of custom roles keyed by ID
pub trait CustomRoleStore: Send + Sync + Debug {
    /// Insert or replace a role
    fn insert(&self, role: CustomRole);

    fn get(&self, id: &str) -> Option<CustomRole>;

    /// Apply `change` to the stored role in place and return the result.
    ///
    /// Implementations must make the read-modify-write atomic with respect
    /// to other writers of the same role.
    fn modify(&self, id: &str, change: &mut dyn FnMut(&mut CustomRole)) -> Option<CustomRole>;

    /// Remove a role, returning whether it existed
    fn remove(&self, id: &str) -> bool;

    /// Snapshot of every stored role, in no particular order
    fn list(&self) -> Vec<CustomRole>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-local store backed by a sharded concurrent map
#[derive(Debug, Default)]
pub struct InMemoryRoleStore {
    roles: DashMap<String, CustomRole>,
}

impl InMemoryRoleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CustomRoleStore for InMemoryRoleStore {
    fn insert(&self, role: CustomRole) {
        self.roles.insert(role.id.clone(), role);
    }

    fn get(&self, id: &str) -> Option<CustomRole> {
        self.roles.get(id).map(|entry| entry.value().clone())
    }

    fn modify(&self, id: &str, change: &mut dyn FnMut(&mut CustomRole)) -> Option<CustomRole> {
        // The entry guard holds the shard write lock until it is dropped.
        let mut entry = self.roles.get_mut(id)?;
        change(entry.value_mut());
        Some(entry.value().clone())
    }

    fn remove(&self, id: &str) -> bool {
        self.roles.remove(id).is_some()
    }

    fn list(&self) -> Vec<CustomRole> {
        self.roles.iter().map(|entry| entry.value().clone()).collect()
    }

    fn len(&self) -> usize {
        self.roles.len()
    }
}
