use serde::{Deserialize, Serialize};

/// Customer record as the service sees it. `id` is `None` until the store
/// assigns one; once assigned it never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRecord {
    pub id: Option<i64>,
    pub name: String,
    pub age: i32,
    pub mobile_number: String,
    pub email_address: String,
    pub address: String,
}

/// Caller-supplied payload carrying the five mutable fields. Absent JSON
/// fields deserialize to blank/zero; an update overwrites every field with
/// exactly these values, blanks included.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerRequest {
    pub name: String,
    pub age: i32,
    pub mobile_number: String,
    pub email_address: String,
    pub address: String,
}

/// Outward projection of a stored record. Kept distinct from the entity to
/// decouple the wire format from the storage format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerResponse {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub mobile_number: String,
    pub email_address: String,
    pub address: String,
}
