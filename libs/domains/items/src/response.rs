//! Response envelope shared by every item endpoint.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `{status, messages, data}` wrapper.
///
/// `status` describes the outcome of the operation and is independent of the
/// HTTP status, which stays 200 once the request has been bound and validated.
/// `data` serializes as `null` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    #[schema(example = 200)]
    pub status: u16,
    #[schema(example = "Success to get all item")]
    pub messages: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(messages: impl Into<String>, data: Option<T>) -> Self {
        Self {
            status: 200,
            messages: messages.into(),
            data,
        }
    }

    pub fn failure(status: u16, messages: impl Into<String>) -> Self {
        Self {
            status,
            messages: messages.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_data_serializes_as_null() {
        let response: ApiResponse<i32> = ApiResponse::failure(400, "Failed to get all item");
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"status": 400, "messages": "Failed to get all item", "data": null})
        );
    }

    #[test]
    fn test_success_with_list() {
        let response = ApiResponse::success("ok", Some(vec![1, 2]));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"status": 200, "messages": "ok", "data": [1, 2]})
        );
    }
}
