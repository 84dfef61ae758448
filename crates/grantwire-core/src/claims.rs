//! Assembly of grant payloads into a token's `grants` claim.
//!
//! Grants are kept in insertion order. When two grants share a namespace
//! key the later one replaces the earlier payload.

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::grant::Grant;
use crate::payload::Payload;

/// Ordered collection of grants destined for one access token.
#[derive(Debug, Default)]
pub struct GrantClaims {
    grants: Vec<Box<dyn Grant>>,
}

impl GrantClaims {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a grant.
    pub fn push(&mut self, grant: impl Grant + 'static) {
        self.grants.push(Box::new(grant));
    }

    /// Builder-style [`push`](Self::push).
    #[must_use]
    pub fn with(mut self, grant: impl Grant + 'static) -> Self {
        self.push(grant);
        self
    }

    pub fn len(&self) -> usize {
        self.grants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }

    /// Namespace keys in insertion order, duplicates included.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.grants.iter().map(|g| g.key())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Grant> {
        self.grants.iter().map(|g| &**g)
    }

    /// Fold every grant into `{key: payload}`.
    pub fn to_claims(&self) -> Payload {
        let mut claims = Payload::new();
        for grant in &self.grants {
            let key = grant.key();
            if claims
                .insert(key.to_string(), Value::Object(grant.to_payload()))
                .is_some()
            {
                tracing::debug!(key, "Grant replaces an earlier grant with the same key");
            }
        }
        tracing::trace!(
            grants = self.grants.len(),
            keys = claims.len(),
            "Assembled grant claims"
        );
        claims
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.to_claims())
    }
}

impl FromIterator<Box<dyn Grant>> for GrantClaims {
    fn from_iter<T: IntoIterator<Item = Box<dyn Grant>>>(iter: T) -> Self {
        Self {
            grants: iter.into_iter().collect(),
        }
    }
}

impl Extend<Box<dyn Grant>> for GrantClaims {
    fn extend<T: IntoIterator<Item = Box<dyn Grant>>>(&mut self, iter: T) {
        self.grants.extend(iter);
    }
}

impl Serialize for GrantClaims {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_claims().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grant::{ChatGrant, VideoGrant, VoiceGrant};
    use serde_json::json;

    #[test]
    fn empty_claims() {
        let claims = GrantClaims::new();
        assert!(claims.is_empty());
        assert_eq!(claims.to_value(), json!({}));
    }

    #[test]
    fn grants_nest_under_their_keys() {
        let claims = GrantClaims::new()
            .with(ChatGrant::new("SV1"))
            .with(VideoGrant::new(""))
            .with(VoiceGrant::default());
        assert_eq!(claims.len(), 3);
        assert_eq!(
            claims.to_value(),
            json!({
                "chat": {"service_sid": "SV1"},
                "video": {},
                "voice": {"outgoing": {}},
            })
        );
    }

    #[test]
    fn later_grant_wins_on_collision() {
        let mut claims = GrantClaims::new();
        claims.push(ChatGrant::new("SV-first"));
        claims.push(ChatGrant::new("SV-second"));
        assert_eq!(claims.keys().collect::<Vec<_>>(), ["chat", "chat"]);
        assert_eq!(
            claims.to_value(),
            json!({"chat": {"service_sid": "SV-second"}})
        );
    }

    #[test]
    fn collects_boxed_grants() {
        let boxed: Vec<Box<dyn Grant>> =
            vec![Box::new(VideoGrant::new("RM1")), Box::new(ChatGrant::new(""))];
        let mut claims: GrantClaims = boxed.into_iter().collect();
        claims.extend([Box::new(VoiceGrant::default()) as Box<dyn Grant>]);
        assert_eq!(
            claims.iter().map(|g| g.key()).collect::<Vec<_>>(),
            ["video", "chat", "voice"]
        );
    }
}
