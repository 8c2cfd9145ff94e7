use async_trait::async_trait;

use super::domain::CustomerRecord;
use crate::errors::RepositoryError;
use crate::pagination::PageRequest;

/// Record-store contract: exactly the operations the service uses, nothing
/// framework-general. Sorting is ascending by a single named field.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Insert when the record carries no id, full overwrite otherwise.
    /// Returns the stored record with its id assigned.
    async fn save(&self, record: CustomerRecord) -> Result<CustomerRecord, RepositoryError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<CustomerRecord>, RepositoryError>;

    async fn find_all(&self) -> Result<Vec<CustomerRecord>, RepositoryError>;

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError>;

    /// Page through all records in store order. A page past the end is empty.
    async fn find_all_paged(&self, page: PageRequest) -> Result<Vec<CustomerRecord>, RepositoryError>;

    /// Ascending order by `sort_key`, then paged.
    async fn find_all_paged_sorted(
        &self,
        page: PageRequest,
        sort_key: &str,
    ) -> Result<Vec<CustomerRecord>, RepositoryError>;

    /// Ascending order by `sort_key`, unpaged.
    async fn find_all_sorted(&self, sort_key: &str) -> Result<Vec<CustomerRecord>, RepositoryError>;
}

/// Simple in-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockCustomerRepository {
        state: Mutex<MockState>,
    }

    #[derive(Default)]
    struct MockState {
        rows: BTreeMap<i64, CustomerRecord>, // key: assigned id, in store order
        next_id: i64,
    }

    fn sort_records(records: &mut [CustomerRecord], sort_key: &str) -> Result<(), RepositoryError> {
        match sort_key {
            "id" => records.sort_by_key(|r| r.id),
            "name" => records.sort_by(|a, b| a.name.cmp(&b.name)),
            "age" => records.sort_by_key(|r| r.age),
            "mobile_number" => records.sort_by(|a, b| a.mobile_number.cmp(&b.mobile_number)),
            "email_address" => records.sort_by(|a, b| a.email_address.cmp(&b.email_address)),
            "address" => records.sort_by(|a, b| a.address.cmp(&b.address)),
            other => return Err(RepositoryError::UnknownSortField(other.to_string())),
        }
        Ok(())
    }

    fn page_slice(records: Vec<CustomerRecord>, page: PageRequest) -> Result<Vec<CustomerRecord>, RepositoryError> {
        if page.page_size == 0 {
            return Err(RepositoryError::InvalidPageSize);
        }
        Ok(records
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.page_size as usize)
            .collect())
    }

    #[async_trait]
    impl CustomerRepository for MockCustomerRepository {
        async fn save(&self, mut record: CustomerRecord) -> Result<CustomerRecord, RepositoryError> {
            let mut state = self.state.lock().unwrap();
            let id = match record.id {
                Some(id) => id,
                None => {
                    state.next_id += 1;
                    state.next_id
                }
            };
            record.id = Some(id);
            state.rows.insert(id, record.clone());
            Ok(record)
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<CustomerRecord>, RepositoryError> {
            let state = self.state.lock().unwrap();
            Ok(state.rows.get(&id).cloned())
        }

        async fn find_all(&self) -> Result<Vec<CustomerRecord>, RepositoryError> {
            let state = self.state.lock().unwrap();
            Ok(state.rows.values().cloned().collect())
        }

        async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
            let mut state = self.state.lock().unwrap();
            state.rows.remove(&id);
            Ok(())
        }

        async fn find_all_paged(&self, page: PageRequest) -> Result<Vec<CustomerRecord>, RepositoryError> {
            let records = self.find_all().await?;
            page_slice(records, page)
        }

        async fn find_all_paged_sorted(
            &self,
            page: PageRequest,
            sort_key: &str,
        ) -> Result<Vec<CustomerRecord>, RepositoryError> {
            let mut records = self.find_all().await?;
            sort_records(&mut records, sort_key)?;
            page_slice(records, page)
        }

        async fn find_all_sorted(&self, sort_key: &str) -> Result<Vec<CustomerRecord>, RepositoryError> {
            let mut records = self.find_all().await?;
            sort_records(&mut records, sort_key)?;
            Ok(records)
        }
    }
}
