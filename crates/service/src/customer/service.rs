use std::sync::Arc;

use tracing::{info, instrument};

use common::response::{
    ApiResponse, SUCCESSFULLY_DELETED, SUCCESSFULLY_RETRIEVED, SUCCESSFULLY_STORED,
    SUCCESSFULLY_UPDATED, SUCCESS_CODE,
};

use super::domain::{CustomerRequest, CustomerResponse};
use super::mapper::{record_to_response, request_to_record};
use super::repository::CustomerRepository;
use crate::errors::ServiceError;
use crate::pagination::PageRequest;

/// Customer business service independent of the web framework.
///
/// Every operation answers with the uniform envelope; the only condition the
/// service itself detects is "record not found", which it reports through the
/// envelope code rather than raising. Store failures propagate as
/// [`ServiceError`] and never enter the envelope's code space.
pub struct CustomerService<R: CustomerRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: CustomerRepository + ?Sized> CustomerService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Store a new customer and echo it back with its generated id.
    ///
    /// # Examples
    /// ```
    /// use service::customer::{CustomerService, repository::mock::MockCustomerRepository};
    /// use service::customer::domain::CustomerRequest;
    /// use std::sync::Arc;
    /// let svc = CustomerService::new(Arc::new(MockCustomerRepository::default()));
    /// let request = CustomerRequest { name: "Alice".into(), age: 30, ..Default::default() };
    /// let envelope = tokio_test::block_on(svc.create(request)).unwrap();
    /// assert!(envelope.is_success());
    /// ```
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(&self, request: CustomerRequest) -> Result<ApiResponse<CustomerResponse>, ServiceError> {
        let saved = self.repo.save(request_to_record(&request)).await?;
        info!(id = ?saved.id, "customer_stored");
        Ok(ApiResponse::one(SUCCESS_CODE, SUCCESSFULLY_STORED, record_to_response(saved)))
    }

    /// Fetch every stored customer.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<ApiResponse<CustomerResponse>, ServiceError> {
        let customers = self.repo.find_all().await?;
        let responses: Vec<_> = customers.into_iter().map(record_to_response).collect();
        Ok(ApiResponse::many(SUCCESS_CODE, SUCCESSFULLY_RETRIEVED, responses))
    }

    /// Fetch a single customer by id.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<ApiResponse<CustomerResponse>, ServiceError> {
        match self.repo.find_by_id(id).await? {
            Some(record) => Ok(ApiResponse::one(
                SUCCESS_CODE,
                SUCCESSFULLY_RETRIEVED,
                record_to_response(record),
            )),
            None => Ok(ApiResponse::not_found()),
        }
    }

    /// Delete a customer by id. Reports "not found" instead of deleting blind.
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: i64) -> Result<ApiResponse<CustomerResponse>, ServiceError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Ok(ApiResponse::not_found());
        }
        self.repo.delete_by_id(id).await?;
        info!(id, "customer_deleted");
        Ok(ApiResponse::empty(SUCCESS_CODE, SUCCESSFULLY_DELETED))
    }

    /// Overwrite all five mutable fields of an existing customer with the
    /// request's values, blanks included. No partial-update semantics.
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: i64,
        request: CustomerRequest,
    ) -> Result<ApiResponse<CustomerResponse>, ServiceError> {
        // The existence check and the save are two store round trips; the
        // store provides whatever isolation exists across that gap.
        let Some(mut record) = self.repo.find_by_id(id).await? else {
            return Ok(ApiResponse::not_found());
        };
        record.name = request.name;
        record.age = request.age;
        record.mobile_number = request.mobile_number;
        record.email_address = request.email_address;
        record.address = request.address;
        let saved = self.repo.save(record).await?;
        info!(id, "customer_updated");
        Ok(ApiResponse::one(SUCCESS_CODE, SUCCESSFULLY_UPDATED, record_to_response(saved)))
    }

    /// Fetch one page of customers in store order. A page past the end is an
    /// empty listing, not an error.
    #[instrument(skip(self, page), fields(page_no = page.page_no, page_size = page.page_size))]
    pub async fn paginate(&self, page: PageRequest) -> Result<ApiResponse<CustomerResponse>, ServiceError> {
        let customers = self.repo.find_all_paged(page).await?;
        let responses: Vec<_> = customers.into_iter().map(record_to_response).collect();
        Ok(ApiResponse::many(SUCCESS_CODE, SUCCESSFULLY_RETRIEVED, responses))
    }

    /// Fetch one page of customers ordered ascending by `sort_by`.
    #[instrument(skip(self, page), fields(page_no = page.page_no, page_size = page.page_size))]
    pub async fn paginate_sorted(
        &self,
        page: PageRequest,
        sort_by: &str,
    ) -> Result<ApiResponse<CustomerResponse>, ServiceError> {
        let customers = self.repo.find_all_paged_sorted(page, sort_by).await?;
        let responses: Vec<_> = customers.into_iter().map(record_to_response).collect();
        Ok(ApiResponse::many(SUCCESS_CODE, SUCCESSFULLY_RETRIEVED, responses))
    }

    /// Fetch every customer ordered ascending by `sort_by`, no paging.
    #[instrument(skip(self))]
    pub async fn sorted(&self, sort_by: &str) -> Result<ApiResponse<CustomerResponse>, ServiceError> {
        let customers = self.repo.find_all_sorted(sort_by).await?;
        let responses: Vec<_> = customers.into_iter().map(record_to_response).collect();
        Ok(ApiResponse::many(SUCCESS_CODE, SUCCESSFULLY_RETRIEVED, responses))
    }
}
