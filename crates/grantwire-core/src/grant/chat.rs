//! Programmable chat grant.

use super::{CHAT_KEY, Grant, field};
use crate::payload::{Payload, PayloadBuilder};

/// Access to a chat service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatGrant {
    service_sid: String,
}

impl ChatGrant {
    pub fn new(service_sid: impl Into<String>) -> Self {
        Self {
            service_sid: service_sid.into(),
        }
    }

    pub fn service_sid(&self) -> &str {
        &self.service_sid
    }
}

impl Grant for ChatGrant {
    fn key(&self) -> &'static str {
        CHAT_KEY
    }

    fn to_payload(&self) -> Payload {
        PayloadBuilder::new()
            .string(field::SERVICE_SID, &self.service_sid)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn service_sid_is_encoded() {
        let grant = ChatGrant::new("SVxxxx");
        assert_eq!(grant.key(), "chat");
        assert_eq!(
            Value::Object(grant.to_payload()),
            json!({"service_sid": "SVxxxx"})
        );
    }

    #[test]
    fn empty_service_sid_is_omitted() {
        assert!(ChatGrant::new("").to_payload().is_empty());
        assert!(ChatGrant::default().to_payload().is_empty());
    }

    #[test]
    fn payload_is_stable_across_calls() {
        let grant = ChatGrant::new("SV9");
        assert_eq!(grant.to_payload(), grant.to_payload());
    }
}
