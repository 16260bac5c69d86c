use serde::Serialize;

use crate::domain::value::{GroupLinkState, GroupPermission, ReceiptType, TextMode, TrustMode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Body of `POST /v1/configuration/{number}/settings`.
pub struct TrustModeRequest {
    pub trust_mode: TrustMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Answer to a rate-limit challenge raised by the Signal servers.
pub struct RateLimitChallengeRequest {
    pub challenge_token: String,
    pub captcha: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Partial update of account privacy settings. Unset fields are left unchanged.
pub struct UpdateAccountSettingsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discoverable_by_number: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_number: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Registration lock PIN.
pub struct SetPinRequest {
    pub pin: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetUsernameRequest {
    pub username: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Body of `POST /v1/register/{number}`.
pub struct RegisterNumberRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captcha: Option<String>,
    /// Request the verification code by voice call instead of SMS.
    pub use_voice: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Body of `POST /v1/register/{number}/verify/{token}`.
pub struct VerifyNumberSettings {
    /// Registration lock PIN, if the account has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Link a new device using the `sgnl://linkdevice?...` URI it displays.
pub struct AddDeviceRequest {
    pub uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UnregisterNumberRequest {
    pub delete_account: bool,
    pub delete_local_data: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Body of the deprecated `POST /v1/send`.
pub struct SendMessageLegacy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base64_attachment: Option<String>,
    pub is_group: bool,
    pub message: String,
    pub number: String,
    pub recipients: Vec<String>,
}

impl SendMessageLegacy {
    pub fn new(
        number: impl Into<String>,
        recipients: Vec<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            recipients,
            message: message.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Body of `POST /v2/send`.
///
/// Recipients may be phone numbers, UUIDs, usernames or group ids
/// (`group.<base64>`).
pub struct SendMessage {
    pub number: String,
    pub recipients: Vec<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub base64_attachments: Vec<String>,
    pub text_mode: TextMode,
    /// Timestamp of an earlier message to replace with this one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_preview: Option<LinkPreview>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mentions: Vec<MessageMention>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_self: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_author: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub quote_mentions: Vec<MessageMention>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_timestamp: Option<i64>,
    /// `<pack_id>:<sticker_id>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sticker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_once: Option<bool>,
}

impl SendMessage {
    pub fn new(
        number: impl Into<String>,
        recipients: Vec<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            recipients,
            message: message.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkPreview {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base64_thumbnail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Mention of `author` covering `length` characters from `start`.
pub struct MessageMention {
    pub author: String,
    pub start: u32,
    pub length: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Query options for `GET /v1/receive/{number}`. Unset options are not sent.
pub struct ReceiveOptions {
    /// Seconds to wait for new messages.
    pub timeout: Option<u32>,
    pub ignore_attachments: Option<bool>,
    pub ignore_stories: Option<bool>,
    pub max_messages: Option<u32>,
    pub send_read_receipts: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteDeleteRequest {
    pub recipient: String,
    /// Timestamp of the message to delete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateContactRequest {
    pub recipient: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_in_seconds: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Group permission policy.
pub struct GroupPermissions {
    pub add_members: GroupPermission,
    pub edit_group: GroupPermission,
    pub send_messages: GroupPermission,
}

impl Default for GroupPermissions {
    fn default() -> Self {
        Self {
            add_members: GroupPermission::OnlyAdmins,
            edit_group: GroupPermission::OnlyAdmins,
            send_messages: GroupPermission::EveryMember,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateGroupRequest {
    pub name: String,
    pub members: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<GroupPermissions>,
    /// Disappearing-messages timer in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_link: Option<GroupLinkState>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Partial group update. Unset fields are left unchanged.
pub struct UpdateGroupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base64_avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_link: Option<GroupLinkState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<GroupPermissions>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChangeGroupAdminsRequest {
    pub admins: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChangeGroupMembersRequest {
    pub members: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrustIdentityRequest {
    pub trust_all_known_keys: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_safety_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base64_avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Emoji reaction to the message `target_author` sent at `timestamp`.
pub struct Reaction {
    pub reaction: String,
    pub recipient: String,
    pub target_author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub receipt_type: ReceiptType,
    pub recipient: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddStickerPackRequest {
    pub pack_id: String,
    pub pack_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypingIndicatorRequest {
    pub recipient: String,
}
