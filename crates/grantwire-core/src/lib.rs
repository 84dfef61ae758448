//! Grantwire Core Library
//!
//! Grants for access tokens:
//! - The [`Grant`] trait: a namespace key plus a payload object
//! - Messaging, RTC, voice, video and chat grants
//! - Omission-aware payload building shared by every grant
//! - Claim assembly for token builders
//! - Serde grant definitions for settings files

pub mod claims;
pub mod config;
pub mod error;
pub mod grant;
pub mod payload;

pub use claims::GrantClaims;
pub use config::{GrantConfig, parse_grants, parse_grants_str};
pub use error::{Error, Result};
pub use grant::{ChatGrant, Grant, MessagingGrant, RtcGrant, VideoGrant, VoiceGrant};
pub use payload::{Payload, PayloadBuilder};
