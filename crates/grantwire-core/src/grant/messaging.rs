//! Programmable messaging grant.

use super::{Grant, IP_MESSAGING_KEY, field};
use crate::payload::{Payload, PayloadBuilder};

/// Access to a messaging service, optionally pinned to one endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessagingGrant {
    service_sid: String,
    endpoint_id: String,
    deployment_role_sid: String,
    push_credential_sid: String,
}

impl MessagingGrant {
    pub fn new(
        service_sid: impl Into<String>,
        endpoint_id: impl Into<String>,
        deployment_role_sid: impl Into<String>,
        push_credential_sid: impl Into<String>,
    ) -> Self {
        Self {
            service_sid: service_sid.into(),
            endpoint_id: endpoint_id.into(),
            deployment_role_sid: deployment_role_sid.into(),
            push_credential_sid: push_credential_sid.into(),
        }
    }

    pub fn service_sid(&self) -> &str {
        &self.service_sid
    }

    pub fn endpoint_id(&self) -> &str {
        &self.endpoint_id
    }

    pub fn deployment_role_sid(&self) -> &str {
        &self.deployment_role_sid
    }

    pub fn push_credential_sid(&self) -> &str {
        &self.push_credential_sid
    }
}

impl Grant for MessagingGrant {
    fn key(&self) -> &'static str {
        IP_MESSAGING_KEY
    }

    fn to_payload(&self) -> Payload {
        PayloadBuilder::new()
            .string(field::SERVICE_SID, &self.service_sid)
            .string(field::ENDPOINT_ID, &self.endpoint_id)
            .string(field::DEPLOYMENT_ROLE_SID, &self.deployment_role_sid)
            .string(field::PUSH_CREDENTIAL_SID, &self.push_credential_sid)
            .build()
    }
}
