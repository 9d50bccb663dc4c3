use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SignedMessage {
    pub message: String,
    pub timestamp: i64,
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn new<T: Into<String>>(status: T) -> Self {
        Self {
            status: status.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::{SignedMessage, StatusResponse};

    #[test]
    fn test_parse_signed_message() {
        let message: SignedMessage = serde_json::from_value(json!({
            "message": "hello",
            "timestamp": 1000,
            "signature": "deadbeef"
        }))
        .expect("should deserialize");

        assert_eq!(
            message,
            SignedMessage {
                message: "hello".into(),
                timestamp: 1000,
                signature: "deadbeef".into(),
            }
        );
    }

    #[test]
    fn test_parse_signed_message_rejects_string_timestamp() {
        let result = serde_json::from_value::<SignedMessage>(json!({
            "message": "hello",
            "timestamp": "1000",
            "signature": "deadbeef"
        }));

        assert_matches!(result, Err(_));
    }

    #[test]
    fn test_serialize_status_response() {
        assert_eq!(
            serde_json::to_value(StatusResponse::new("Timeout")).unwrap(),
            json!({ "status": "Timeout" })
        );
    }
}
