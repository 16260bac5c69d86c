//! Domain layer: request and response types exchanged with the gateway (no I/O).

mod request;
mod response;
mod value;

pub use request::{
    AddDeviceRequest, AddStickerPackRequest, ChangeGroupAdminsRequest, ChangeGroupMembersRequest,
    CreateGroupRequest, GroupPermissions, LinkPreview, MessageMention, RateLimitChallengeRequest,
    Reaction, Receipt, ReceiveOptions, RegisterNumberRequest, RemoteDeleteRequest, SendMessage,
    SendMessageLegacy, SetPinRequest, SetUsernameRequest, TrustIdentityRequest, TrustModeRequest,
    TypingIndicatorRequest, UnregisterNumberRequest, UpdateAccountSettingsRequest,
    UpdateContactRequest, UpdateGroupRequest, UpdateProfileRequest, VerifyNumberSettings,
};
pub use response::{
    About, Configuration, Contact, ContactProfile, CreateGroupResponse, Device, Group, Identity,
    LoggingConfiguration, Nickname, ReceivedMessage, RemoteDeleteResponse, SearchResult,
    SendMessageResponse, SetUsernameResponse, StickerPack, TrustModeResponse,
};
pub use value::{GroupLinkState, GroupPermission, ReceiptType, TextMode, TrustMode};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_message_skips_unset_optionals() {
        let message = SendMessage::new("+1", vec!["+2".to_owned()], "hi");
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "number": "+1",
                "recipients": ["+2"],
                "message": "hi",
                "text_mode": "normal"
            })
        );
    }

    #[test]
    fn send_message_serializes_quote_and_mentions() {
        let message = SendMessage {
            quote_author: Some("+3".to_owned()),
            quote_timestamp: Some(1_700_000_000_000),
            mentions: vec![MessageMention {
                author: "+3".to_owned(),
                start: 0,
                length: 1,
            }],
            text_mode: TextMode::Styled,
            ..SendMessage::new("+1", vec!["+2".to_owned()], "@ hi")
        };
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["quote_author"], "+3");
        assert_eq!(json["quote_timestamp"], 1_700_000_000_000_i64);
        assert_eq!(json["mentions"][0]["length"], 1);
        assert_eq!(json["text_mode"], "styled");
    }

    #[test]
    fn legacy_send_has_distinct_shape() {
        let legacy = SendMessageLegacy::new("+1", vec!["+2".to_owned()], "hi");
        let json = serde_json::to_value(&legacy).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "is_group": false,
                "message": "hi",
                "number": "+1",
                "recipients": ["+2"]
            })
        );
    }

    #[test]
    fn group_permissions_default_restricts_edits_to_admins() {
        let json = serde_json::to_value(GroupPermissions::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "add_members": "only-admins",
                "edit_group": "only-admins",
                "send_messages": "every-member"
            })
        );
    }

    #[test]
    fn default_registration_bodies_are_minimal() {
        assert_eq!(
            serde_json::to_string(&RegisterNumberRequest::default()).unwrap(),
            r#"{"use_voice":false}"#
        );
        assert_eq!(
            serde_json::to_string(&VerifyNumberSettings::default()).unwrap(),
            "{}"
        );
    }

    #[test]
    fn receipt_uses_lowercase_type() {
        let receipt = Receipt {
            receipt_type: ReceiptType::Read,
            recipient: "+2".to_owned(),
            timestamp: Some(42),
        };
        assert_eq!(
            serde_json::to_string(&receipt).unwrap(),
            r#"{"receipt_type":"read","recipient":"+2","timestamp":42}"#
        );
    }
}
