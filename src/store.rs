use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::Customer;

/// In-memory, insertion-ordered customer collection.
///
/// Clones share the same underlying collection. Reads take the shared lock,
/// `insert` and `remove_by_id` take the exclusive one. No operation can leave
/// the vector partially mutated, so a poisoned lock is recovered rather than
/// propagated.
#[derive(Clone, Default)]
pub struct CustomerStore {
    customers: Arc<RwLock<Vec<Customer>>>,
}

impl CustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every customer in insertion order.
    pub fn list_all(&self) -> Vec<Customer> {
        self.read().clone()
    }

    /// First customer, in insertion order, whose id matches.
    pub fn find_by_id(&self, id: &str) -> Option<Customer> {
        self.read().iter().find(|customer| customer.id == id).cloned()
    }

    /// Appends without checking for an existing id.
    pub fn insert(&self, customer: Customer) {
        self.write().push(customer);
    }

    /// Removes every customer with a matching id and returns how many went.
    pub fn remove_by_id(&self, id: &str) -> usize {
        let mut customers = self.write();
        let before = customers.len();
        customers.retain(|customer| customer.id != id);
        before - customers.len()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Customer>> {
        self.customers.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Customer>> {
        self.customers.write().unwrap_or_else(PoisonError::into_inner)
    }
}
