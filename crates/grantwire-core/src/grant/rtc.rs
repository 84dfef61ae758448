//! Real-time communication grant.

use super::{Grant, RTC_KEY, field};
use crate::payload::{Payload, PayloadBuilder};

/// Access to RTC sessions under a configuration profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RtcGrant {
    configuration_profile_sid: String,
}

impl RtcGrant {
    pub fn new(configuration_profile_sid: impl Into<String>) -> Self {
        Self {
            configuration_profile_sid: configuration_profile_sid.into(),
        }
    }

    pub fn configuration_profile_sid(&self) -> &str {
        &self.configuration_profile_sid
    }
}

impl Grant for RtcGrant {
    fn key(&self) -> &'static str {
        RTC_KEY
    }

    fn to_payload(&self) -> Payload {
        PayloadBuilder::new()
            .string(field::CONFIGURATION_PROFILE_SID, &self.configuration_profile_sid)
            .build()
    }
}
