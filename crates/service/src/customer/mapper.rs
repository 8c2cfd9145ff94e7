//! Pure translation between wire shapes and the stored record shape.

use super::domain::{CustomerRecord, CustomerRequest, CustomerResponse};

/// Request to not-yet-persisted record: id unset, fields copied 1:1.
pub fn request_to_record(request: &CustomerRequest) -> CustomerRecord {
    CustomerRecord {
        id: None,
        name: request.name.clone(),
        age: request.age,
        mobile_number: request.mobile_number.clone(),
        email_address: request.email_address.clone(),
        address: request.address.clone(),
    }
}

/// Stored record to outward response, id included. Records reach this point
/// only after the store has assigned their id.
pub fn record_to_response(record: CustomerRecord) -> CustomerResponse {
    CustomerResponse {
        id: record.id.unwrap_or_default(),
        name: record.name,
        age: record.age,
        mobile_number: record.mobile_number,
        email_address: record.email_address,
        address: record.address,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CustomerRequest {
        CustomerRequest {
            name: "Alice".into(),
            age: 30,
            mobile_number: "111".into(),
            email_address: "a@x.com".into(),
            address: "Addr1".into(),
        }
    }

    #[test]
    fn request_maps_with_id_unset() {
        let record = request_to_record(&request());
        assert_eq!(record.id, None);
        assert_eq!(record.name, "Alice");
        assert_eq!(record.age, 30);
        assert_eq!(record.mobile_number, "111");
        assert_eq!(record.email_address, "a@x.com");
        assert_eq!(record.address, "Addr1");
    }

    #[test]
    fn record_maps_to_response_with_id() {
        let mut record = request_to_record(&request());
        record.id = Some(7);
        let response = record_to_response(record);
        assert_eq!(response.id, 7);
        assert_eq!(response.name, "Alice");
        assert_eq!(response.address, "Addr1");
    }
}
