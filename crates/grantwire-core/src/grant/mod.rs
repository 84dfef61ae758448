//! Grants embeddable in an access token.
//!
//! Every grant exposes a namespace key and renders its set fields into a
//! [`Payload`]. Implement [`Grant`] to add a custom grant kind.

mod chat;
mod messaging;
mod rtc;
mod video;
mod voice;

pub use chat::ChatGrant;
pub use messaging::MessagingGrant;
pub use rtc::RtcGrant;
pub use video::VideoGrant;
pub use voice::VoiceGrant;

use std::fmt;

use crate::payload::Payload;

/// Namespace key of [`MessagingGrant`].
pub const IP_MESSAGING_KEY: &str = "ip_messaging";
/// Namespace key of [`RtcGrant`].
pub const RTC_KEY: &str = "rtc";
/// Namespace key of [`VoiceGrant`].
pub const VOICE_KEY: &str = "voice";
/// Namespace key of [`VideoGrant`].
pub const VIDEO_KEY: &str = "video";
/// Namespace key of [`ChatGrant`].
pub const CHAT_KEY: &str = "chat";

/// Payload sub-keys shared across grant kinds.
pub(crate) mod field {
    pub const SERVICE_SID: &str = "service_sid";
    pub const ENDPOINT_ID: &str = "endpoint_id";
    pub const DEPLOYMENT_ROLE_SID: &str = "deployment_role_sid";
    pub const PUSH_CREDENTIAL_SID: &str = "push_credential_sid";
    pub const CONFIGURATION_PROFILE_SID: &str = "configuration_profile_sid";
    pub const OUTGOING: &str = "outgoing";
    pub const INCOMING: &str = "incoming";
    pub const APPLICATION_SID: &str = "application_sid";
    pub const PARAMS: &str = "params";
    pub const ALLOW: &str = "allow";
    pub const ROOM: &str = "room";
}

/// A scoped permission that can be placed in an access token's claims.
pub trait Grant: fmt::Debug + Send + Sync {
    /// Claim name the payload is nested under.
    fn key(&self) -> &'static str;

    /// Render the grant's set fields. Unset fields are left out.
    fn to_payload(&self) -> Payload;
}

impl<G: Grant + ?Sized> Grant for Box<G> {
    fn key(&self) -> &'static str {
        (**self).key()
    }

    fn to_payload(&self) -> Payload {
        (**self).to_payload()
    }
}

impl<G: Grant + ?Sized> Grant for &G {
    fn key(&self) -> &'static str {
        (**self).key()
    }

    fn to_payload(&self) -> Payload {
        (**self).to_payload()
    }
}

/// Serialize concrete grants as their payload.
macro_rules! serialize_as_payload {
    ($($grant:ty),+ $(,)?) => {
        $(
            impl serde::Serialize for $grant {
                fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serde::Serialize::serialize(&Grant::to_payload(self), serializer)
                }
            }
        )+
    };
}

serialize_as_payload!(MessagingGrant, RtcGrant, VoiceGrant, VideoGrant, ChatGrant);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn boxed_grant_delegates() {
        let grant: Box<dyn Grant> = Box::new(ChatGrant::new("SV1"));
        assert_eq!(grant.key(), CHAT_KEY);
        assert_eq!(grant.to_payload(), ChatGrant::new("SV1").to_payload());
    }

    fn key_of<G: Grant>(grant: G) -> &'static str {
        grant.key()
    }

    #[test]
    fn referenced_grant_delegates() {
        let video = VideoGrant::new("RM1");
        assert_eq!(key_of(&video), VIDEO_KEY);
        assert_eq!(key_of(&video as &dyn Grant), VIDEO_KEY);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn grants_serialize_as_their_payload() {
        let value = serde_json::to_value(ChatGrant::new("SVxxxx")).unwrap();
        assert_eq!(value, json!({"service_sid": "SVxxxx"}));

        let value = serde_json::to_value(VoiceGrant::default()).unwrap();
        assert_eq!(value, json!({"outgoing": {}}));
    }

    #[test]
    fn keys_are_distinct() {
        let keys = [IP_MESSAGING_KEY, RTC_KEY, VOICE_KEY, VIDEO_KEY, CHAT_KEY];
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
