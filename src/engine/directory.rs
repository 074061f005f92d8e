use dashmap::DashMap;
use tracing::debug;

use crate::model::{Customer, is_valid_email};
use crate::observability;

use super::EngineError;

/// Customer records keyed by email.
///
/// The email shape is validated before any mutation; a malformed email
/// leaves the directory untouched. A duplicate email overwrites the prior
/// record (last write wins), matching room registration.
#[derive(Debug, Default)]
pub struct CustomerDirectory {
    customers: DashMap<String, Customer>,
}

impl CustomerDirectory {
    pub fn new() -> Self {
        Self { customers: DashMap::new() }
    }

    pub fn add_customer(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Customer, EngineError> {
        if !is_valid_email(email) {
            return Err(EngineError::InvalidEmail(email.to_string()));
        }
        let customer = Customer::new(email, first_name, last_name);
        self.customers.insert(customer.email.clone(), customer.clone());
        metrics::counter!(observability::CUSTOMERS_REGISTERED_TOTAL).increment(1);
        debug!(email = %customer.email, "customer registered");
        Ok(customer)
    }

    pub fn get_customer(&self, email: &str) -> Option<Customer> {
        self.customers.get(email).map(|e| e.value().clone())
    }

    /// Unordered snapshot of all records.
    pub fn all_customers(&self) -> Vec<Customer> {
        self.customers.iter().map(|e| e.value().clone()).collect()
    }
}
