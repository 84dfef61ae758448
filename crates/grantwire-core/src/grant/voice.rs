//! Programmable voice grant.
//!
//! The voice payload is nested: outgoing call settings always live under an
//! `outgoing` object, which is present even when empty. Incoming calls are
//! only mentioned when allowed (`"incoming": {"allow": true}`); a disallowed
//! grant has no `incoming` key at all.

use serde_json::Value;

use super::{Grant, VOICE_KEY, field};
use crate::payload::{Payload, PayloadBuilder};

/// Access to place and optionally receive calls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VoiceGrant {
    /// Application invoked when the client places an outgoing call.
    outgoing_application_sid: String,
    /// Request parameters handed to the outgoing application.
    outgoing_application_params: Payload,
    /// Lets calls be directed at one device when an identity has several.
    endpoint_id: String,
    /// Push credential used to register for incoming call notifications.
    push_credential_sid: String,
    incoming_allow: bool,
}

impl VoiceGrant {
    pub fn new(
        outgoing_application_sid: impl Into<String>,
        outgoing_application_params: Payload,
        endpoint_id: impl Into<String>,
        push_credential_sid: impl Into<String>,
        incoming_allow: bool,
    ) -> Self {
        Self {
            outgoing_application_sid: outgoing_application_sid.into(),
            outgoing_application_params,
            endpoint_id: endpoint_id.into(),
            push_credential_sid: push_credential_sid.into(),
            incoming_allow,
        }
    }

    pub fn outgoing_application_sid(&self) -> &str {
        &self.outgoing_application_sid
    }

    pub const fn outgoing_application_params(&self) -> &Payload {
        &self.outgoing_application_params
    }

    pub fn endpoint_id(&self) -> &str {
        &self.endpoint_id
    }

    pub fn push_credential_sid(&self) -> &str {
        &self.push_credential_sid
    }

    pub const fn incoming_allow(&self) -> bool {
        self.incoming_allow
    }
}

impl Grant for VoiceGrant {
    fn key(&self) -> &'static str {
        VOICE_KEY
    }

    fn to_payload(&self) -> Payload {
        let outgoing = PayloadBuilder::new()
            .string(field::APPLICATION_SID, &self.outgoing_application_sid)
            .object(field::PARAMS, &self.outgoing_application_params)
            .build();

        PayloadBuilder::new()
            .always(field::OUTGOING, Value::Object(outgoing))
            .when(self.incoming_allow, field::INCOMING, || {
                Value::Object(
                    PayloadBuilder::new()
                        .always(field::ALLOW, Value::Bool(true))
                        .build(),
                )
            })
            .string(field::ENDPOINT_ID, &self.endpoint_id)
            .string(field::PUSH_CREDENTIAL_SID, &self.push_credential_sid)
            .build()
    }
}
