//! Grant definitions for token builders that read their grants from settings.
//!
//! A definition is a JSON object tagged with the grant's namespace key:
//!
//! ```json
//! [
//!   {"type": "chat", "service_sid": "IS123"},
//!   {"type": "voice", "outgoing_application_sid": "AP1", "incoming_allow": true}
//! ]
//! ```
//!
//! Every field is optional. Unknown fields and unknown grant types are
//! rejected. Reading the settings file is left to the caller.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::grant::{ChatGrant, Grant, MessagingGrant, RtcGrant, VideoGrant, VoiceGrant};
use crate::payload::Payload;

/// Serde form of a grant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum GrantConfig {
    #[serde(rename = "ip_messaging")]
    Messaging {
        #[serde(default, skip_serializing_if = "String::is_empty")]
        service_sid: String,
        #[serde(default, skip_serializing_if = "String::is_empty")]
        endpoint_id: String,
        #[serde(default, skip_serializing_if = "String::is_empty")]
        deployment_role_sid: String,
        #[serde(default, skip_serializing_if = "String::is_empty")]
        push_credential_sid: String,
    },
    Rtc {
        #[serde(default, skip_serializing_if = "String::is_empty")]
        configuration_profile_sid: String,
    },
    Voice {
        #[serde(default, skip_serializing_if = "String::is_empty")]
        outgoing_application_sid: String,
        #[serde(default, skip_serializing_if = "Payload::is_empty")]
        outgoing_application_params: Payload,
        #[serde(default, skip_serializing_if = "String::is_empty")]
        endpoint_id: String,
        #[serde(default, skip_serializing_if = "String::is_empty")]
        push_credential_sid: String,
        #[serde(default)]
        incoming_allow: bool,
    },
    Video {
        #[serde(default, skip_serializing_if = "String::is_empty")]
        room_sid: String,
    },
    Chat {
        #[serde(default, skip_serializing_if = "String::is_empty")]
        service_sid: String,
    },
}

impl GrantConfig {
    /// Build the concrete grant this definition describes.
    pub fn into_grant(self) -> Box<dyn Grant> {
        match self {
            Self::Messaging {
                service_sid,
                endpoint_id,
                deployment_role_sid,
                push_credential_sid,
            } => Box::new(MessagingGrant::new(
                service_sid,
                endpoint_id,
                deployment_role_sid,
                push_credential_sid,
            )),
            Self::Rtc {
                configuration_profile_sid,
            } => Box::new(RtcGrant::new(configuration_profile_sid)),
            Self::Voice {
                outgoing_application_sid,
                outgoing_application_params,
                endpoint_id,
                push_credential_sid,
                incoming_allow,
            } => Box::new(VoiceGrant::new(
                outgoing_application_sid,
                outgoing_application_params,
                endpoint_id,
                push_credential_sid,
                incoming_allow,
            )),
            Self::Video { room_sid } => Box::new(VideoGrant::new(room_sid)),
            Self::Chat { service_sid } => Box::new(ChatGrant::new(service_sid)),
        }
    }
}

impl Grant for GrantConfig {
    fn key(&self) -> &'static str {
        use crate::grant::{CHAT_KEY, IP_MESSAGING_KEY, RTC_KEY, VIDEO_KEY, VOICE_KEY};
        match self {
            Self::Messaging { .. } => IP_MESSAGING_KEY,
            Self::Rtc { .. } => RTC_KEY,
            Self::Voice { .. } => VOICE_KEY,
            Self::Video { .. } => VIDEO_KEY,
            Self::Chat { .. } => CHAT_KEY,
        }
    }

    fn to_payload(&self) -> Payload {
        self.clone().into_grant().to_payload()
    }
}

impl From<MessagingGrant> for GrantConfig {
    fn from(grant: MessagingGrant) -> Self {
        Self::Messaging {
            service_sid: grant.service_sid().to_string(),
            endpoint_id: grant.endpoint_id().to_string(),
            deployment_role_sid: grant.deployment_role_sid().to_string(),
            push_credential_sid: grant.push_credential_sid().to_string(),
        }
    }
}

impl From<RtcGrant> for GrantConfig {
    fn from(grant: RtcGrant) -> Self {
        Self::Rtc {
            configuration_profile_sid: grant.configuration_profile_sid().to_string(),
        }
    }
}

impl From<VoiceGrant> for GrantConfig {
    fn from(grant: VoiceGrant) -> Self {
        Self::Voice {
            outgoing_application_sid: grant.outgoing_application_sid().to_string(),
            outgoing_application_params: grant.outgoing_application_params().clone(),
            endpoint_id: grant.endpoint_id().to_string(),
            push_credential_sid: grant.push_credential_sid().to_string(),
            incoming_allow: grant.incoming_allow(),
        }
    }
}

impl From<VideoGrant> for GrantConfig {
    fn from(grant: VideoGrant) -> Self {
        Self::Video {
            room_sid: grant.room_sid().to_string(),
        }
    }
}

impl From<ChatGrant> for GrantConfig {
    fn from(grant: ChatGrant) -> Self {
        Self::Chat {
            service_sid: grant.service_sid().to_string(),
        }
    }
}

/// Parse a single grant definition or an array of them.
pub fn parse_grants(value: &Value) -> Result<Vec<GrantConfig>> {
    let grants = match value {
        Value::Array(items) => items
            .iter()
            .map(GrantConfig::deserialize)
            .collect::<std::result::Result<Vec<_>, _>>()?,
        Value::Object(_) => vec![GrantConfig::deserialize(value)?],
        other => {
            return Err(Error::Config(format!(
                "expected a grant object or an array of grants, got {}",
                json_kind(other)
            )));
        }
    };
    tracing::debug!(count = grants.len(), "Parsed grant definitions");
    Ok(grants)
}

/// Parse grant definitions from JSON text.
pub fn parse_grants_str(json: &str) -> Result<Vec<GrantConfig>> {
    let value: Value = serde_json::from_str(json)?;
    parse_grants(&value)
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
