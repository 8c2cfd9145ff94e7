//! Uniform response envelope returned from every customer operation.
//!
//! The `code` is a semantic status, not the transport status: the HTTP layer
//! answers 200 for every modeled case and callers switch on `code` instead.

use serde::{Deserialize, Serialize};

/// Operation completed as requested.
pub const SUCCESS_CODE: &str = "200";
/// The addressed customer does not exist.
pub const NOT_FOUND_CODE: &str = "404";

pub const SUCCESSFULLY_STORED: &str = "customer successfully stored";
pub const SUCCESSFULLY_RETRIEVED: &str = "customers successfully retrieved";
pub const SUCCESSFULLY_UPDATED: &str = "customer successfully updated";
pub const SUCCESSFULLY_DELETED: &str = "customer successfully deleted";
pub const CUSTOMER_NOT_FOUND: &str = "customer does not exist";

/// Envelope payload: a single item or a sequence. The empty payload is an
/// empty sequence, so "not found" responses serialize as `"data": []`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payload<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Payload<T> {
    pub fn empty() -> Self {
        Payload::Many(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Payload::One(_) => false,
            Payload::Many(items) => items.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: String,
    pub message: String,
    pub data: Payload<T>,
}

impl<T> ApiResponse<T> {
    pub fn one(code: &str, message: &str, item: T) -> Self {
        Self { code: code.to_string(), message: message.to_string(), data: Payload::One(item) }
    }

    pub fn many(code: &str, message: &str, items: Vec<T>) -> Self {
        Self { code: code.to_string(), message: message.to_string(), data: Payload::Many(items) }
    }

    pub fn empty(code: &str, message: &str) -> Self {
        Self { code: code.to_string(), message: message.to_string(), data: Payload::empty() }
    }

    /// The one condition this layer reports rather than raises.
    pub fn not_found() -> Self {
        Self::empty(NOT_FOUND_CODE, CUSTOMER_NOT_FOUND)
    }

    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_payload_serializes_flat() {
        let resp = ApiResponse::one(SUCCESS_CODE, SUCCESSFULLY_STORED, 42);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["code"], "200");
        assert_eq!(json["message"], SUCCESSFULLY_STORED);
        assert_eq!(json["data"], 42);
    }

    #[test]
    fn not_found_carries_empty_sequence() {
        let resp: ApiResponse<i32> = ApiResponse::not_found();
        assert_eq!(resp.code, NOT_FOUND_CODE);
        assert!(resp.data.is_empty());
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["data"], serde_json::json!([]));
    }

    #[test]
    fn list_payload_round_trips() {
        let resp = ApiResponse::many(SUCCESS_CODE, SUCCESSFULLY_RETRIEVED, vec![1, 2, 3]);
        let text = serde_json::to_string(&resp).unwrap();
        let back: ApiResponse<i32> = serde_json::from_str(&text).unwrap();
        assert_eq!(back, resp);
    }
}
