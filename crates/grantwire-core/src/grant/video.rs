use super::{Grant, VIDEO_KEY, field};
use crate::payload::{Payload, PayloadBuilder};

/// Access to programmable video, optionally restricted to one room.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoGrant {
    room_sid: String,
}

impl VideoGrant {
    pub fn new(room_sid: impl Into<String>) -> Self {
        Self {
            room_sid: room_sid.into(),
        }
    }

    pub fn room_sid(&self) -> &str {
        &self.room_sid
    }
}

impl Grant for VideoGrant {
    fn key(&self) -> &'static str {
        VIDEO_KEY
    }

    fn to_payload(&self) -> Payload {
        PayloadBuilder::new()
            .string(field::ROOM, &self.room_sid)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn empty_room_is_omitted() {
        let grant = VideoGrant::new("");
        assert_eq!(grant.key(), "video");
        assert_eq!(Value::Object(grant.to_payload()), json!({}));
    }

    #[test]
    fn room_sid_is_encoded_as_room() {
        let grant = VideoGrant::new("RM123");
        assert_eq!(Value::Object(grant.to_payload()), json!({"room": "RM123"}));
        assert_eq!(grant.room_sid(), "RM123");
    }
}
