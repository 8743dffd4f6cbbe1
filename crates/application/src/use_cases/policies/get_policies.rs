use seer_domain::{DomainError, Policy, StatusFilter};

use crate::services::SharedPolicyStore;

pub struct GetPoliciesUseCase {
    store: SharedPolicyStore,
}

impl GetPoliciesUseCase {
    pub fn new(store: SharedPolicyStore) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> Vec<Policy> {
        self.store.lock().await.list().to_vec()
    }

    pub async fn get(&self, destination: &str) -> Option<Policy> {
        self.store.lock().await.get(destination).cloned()
    }

    pub async fn filter(&self, search: &str, status: StatusFilter) -> Vec<Policy> {
        self.store
            .lock()
            .await
            .filter(search, status)
            .into_iter()
            .cloned()
            .collect()
    }

    pub async fn select(&self, destination: &str, selected: bool) -> Result<(), DomainError> {
        self.store.lock().await.set_selected(destination, selected)
    }
}
