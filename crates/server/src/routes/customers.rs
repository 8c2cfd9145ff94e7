use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::{error, info};

use common::response::ApiResponse;
use service::customer::domain::{CustomerRequest, CustomerResponse};
use service::customer::repository::CustomerRepository;
use service::customer::CustomerService;
use service::pagination::PageRequest;

use crate::errors::JsonApiError;

/// Shared state handed to every customer handler.
#[derive(Clone)]
pub struct ServerState {
    pub customers: Arc<CustomerService<dyn CustomerRepository>>,
}

type Envelope = Json<ApiResponse<CustomerResponse>>;

fn internal(op: &'static str, e: service::errors::ServiceError) -> JsonApiError {
    error!(err = %e, op, "customer operation failed");
    JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, op, Some(e.to_string()))
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct PageQuery {
    /// 0-based page index
    #[serde(default)]
    pub page_no: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    /// Field to order ascending by before paging
    pub sort_by: Option<String>,
}

fn default_page_size() -> u64 {
    PageRequest::default().page_size
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct SortQuery {
    /// Field to order ascending by
    pub sort_by: String,
}

#[utoipa::path(
    post, path = "/customers", tag = "customers",
    request_body = crate::openapi::CustomerRequestDoc,
    responses((status = 200, description = "Stored", body = crate::openapi::CustomerEnvelopeDoc))
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CustomerRequest>,
) -> Result<Envelope, JsonApiError> {
    info!(name = %input.name, "customer_create_request");
    match state.customers.create(input).await {
        Ok(envelope) => Ok(Json(envelope)),
        Err(e) => Err(internal("Create Failed", e)),
    }
}

#[utoipa::path(
    get, path = "/customers", tag = "customers",
    responses((status = 200, description = "All customers", body = crate::openapi::CustomerEnvelopeDoc))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Envelope, JsonApiError> {
    match state.customers.list_all().await {
        Ok(envelope) => Ok(Json(envelope)),
        Err(e) => Err(internal("List Failed", e)),
    }
}

#[utoipa::path(
    get, path = "/customers/{id}", tag = "customers",
    params(("id" = i64, Path, description = "Customer id")),
    responses((status = 200, description = "Envelope with the customer, or the not-found code", body = crate::openapi::CustomerEnvelopeDoc))
)]
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Envelope, JsonApiError> {
    match state.customers.get_by_id(id).await {
        Ok(envelope) => Ok(Json(envelope)),
        Err(e) => Err(internal("Get Failed", e)),
    }
}

#[utoipa::path(
    put, path = "/customers/{id}", tag = "customers",
    params(("id" = i64, Path, description = "Customer id")),
    request_body = crate::openapi::CustomerRequestDoc,
    responses((status = 200, description = "Envelope with the updated customer, or the not-found code", body = crate::openapi::CustomerEnvelopeDoc))
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(input): Json<CustomerRequest>,
) -> Result<Envelope, JsonApiError> {
    match state.customers.update(id, input).await {
        Ok(envelope) => Ok(Json(envelope)),
        Err(e) => Err(internal("Update Failed", e)),
    }
}

#[utoipa::path(
    delete, path = "/customers/{id}", tag = "customers",
    params(("id" = i64, Path, description = "Customer id")),
    responses((status = 200, description = "Empty envelope with the outcome code", body = crate::openapi::CustomerEnvelopeDoc))
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Envelope, JsonApiError> {
    match state.customers.delete_by_id(id).await {
        Ok(envelope) => Ok(Json(envelope)),
        Err(e) => Err(internal("Delete Failed", e)),
    }
}

#[utoipa::path(
    get, path = "/customers/page", tag = "customers",
    params(PageQuery),
    responses((status = 200, description = "One page of customers, sorted when sort_by is given", body = crate::openapi::CustomerEnvelopeDoc))
)]
pub async fn page(
    State(state): State<ServerState>,
    Query(q): Query<PageQuery>,
) -> Result<Envelope, JsonApiError> {
    let page = PageRequest::new(q.page_no, q.page_size);
    let result = match q.sort_by.as_deref() {
        Some(sort_by) => state.customers.paginate_sorted(page, sort_by).await,
        None => state.customers.paginate(page).await,
    };
    match result {
        Ok(envelope) => Ok(Json(envelope)),
        Err(e) => Err(internal("Page Failed", e)),
    }
}

#[utoipa::path(
    get, path = "/customers/sort", tag = "customers",
    params(SortQuery),
    responses((status = 200, description = "All customers in ascending order", body = crate::openapi::CustomerEnvelopeDoc))
)]
pub async fn sort(
    State(state): State<ServerState>,
    Query(q): Query<SortQuery>,
) -> Result<Envelope, JsonApiError> {
    match state.customers.sorted(&q.sort_by).await {
        Ok(envelope) => Ok(Json(envelope)),
        Err(e) => Err(internal("Sort Failed", e)),
    }
}
