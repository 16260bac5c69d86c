use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
/// Gateway build information from `GET /v1/about`.
pub struct About {
    pub build: i64,
    pub mode: String,
    pub version: String,
    /// Supported API versions, e.g. `["v1", "v2"]`.
    pub versions: Vec<String>,
    /// Feature flags per endpoint, e.g. `{"v2/send": ["quotes", "mentions"]}`.
    pub capabilities: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Gateway-wide configuration, read and written as a whole.
pub struct Configuration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingConfiguration>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfiguration {
    pub level: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TrustModeResponse {
    pub trust_mode: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SetUsernameResponse {
    pub username: String,
    pub username_link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
/// A device linked to an account.
pub struct Device {
    pub id: i64,
    pub name: String,
    pub creation_timestamp: i64,
    pub last_seen_timestamp: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SendMessageResponse {
    #[serde(deserialize_with = "string_or_number")]
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
/// One item returned by `GET /v1/receive/{number}`.
///
/// The envelope layout depends on the message kind and is kept as raw JSON.
pub struct ReceivedMessage {
    pub envelope: serde_json::Value,
    pub account: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RemoteDeleteResponse {
    #[serde(deserialize_with = "string_or_number")]
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub number: String,
    pub uuid: String,
    pub name: String,
    pub given_name: String,
    pub profile_name: String,
    pub username: String,
    pub color: String,
    pub blocked: bool,
    pub message_expiration: String,
    pub note: String,
    pub profile: Option<ContactProfile>,
    pub nickname: Option<Nickname>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactProfile {
    pub given_name: String,
    pub lastname: String,
    pub about: String,
    pub has_avatar: bool,
    pub last_updated_timestamp: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Nickname {
    pub name: String,
    #[serde(alias = "first_name")]
    pub given_name: String,
    #[serde(alias = "last_name")]
    pub family_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Group {
    /// Public id (`group.<base64>`), used in paths and as a send recipient.
    pub id: String,
    pub internal_id: String,
    pub name: String,
    pub description: String,
    pub members: Vec<String>,
    pub admins: Vec<String>,
    pub blocked: bool,
    pub invite_link: String,
    pub pending_invites: Vec<String>,
    pub pending_requests: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CreateGroupResponse {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Identity {
    pub number: String,
    pub uuid: String,
    pub fingerprint: String,
    pub safety_number: String,
    pub status: String,
    pub added: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
/// Registration status of one looked-up number.
pub struct SearchResult {
    pub number: String,
    pub registered: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StickerPack {
    pub pack_id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    pub installed: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

/// Timestamps arrive as JSON strings from some gateway versions and as
/// numbers from others; keep the token text either way.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(value) => value,
        StringOrNumber::Number(value) => value.to_string(),
    })
}
