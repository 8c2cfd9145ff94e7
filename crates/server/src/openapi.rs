use utoipa::{OpenApi, ToSchema};

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct CustomerRequestDoc {
    pub name: String,
    pub age: i32,
    pub mobile_number: String,
    pub email_address: String,
    pub address: String,
}

/// Envelope shape: `data` is a single customer, a sequence, or empty.
#[derive(ToSchema)]
pub struct CustomerEnvelopeDoc {
    pub code: String,
    pub message: String,
    pub data: serde_json::Value,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::customers::create,
        crate::routes::customers::list,
        crate::routes::customers::get_by_id,
        crate::routes::customers::update,
        crate::routes::customers::delete,
        crate::routes::customers::page,
        crate::routes::customers::sort,
    ),
    components(
        schemas(
            HealthResponse,
            CustomerRequestDoc,
            CustomerEnvelopeDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "customers"),
    )
)]
pub struct ApiDoc;
