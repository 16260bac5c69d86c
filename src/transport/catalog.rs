//! Endpoint catalog: one descriptor per gateway operation.
//!
//! Placeholders are substituted positionally, so argument order at the call
//! site must follow the template.

use super::endpoint::{Endpoint, JsonBody};
use super::shape::{Json, NoContent, RawText};
use crate::domain::{
    About, AddDeviceRequest, AddStickerPackRequest, ChangeGroupAdminsRequest,
    ChangeGroupMembersRequest, Configuration, Contact, CreateGroupRequest, CreateGroupResponse,
    Device, Group, Identity, RateLimitChallengeRequest, Reaction, Receipt, ReceivedMessage,
    RegisterNumberRequest, RemoteDeleteRequest, RemoteDeleteResponse, SearchResult, SendMessage,
    SendMessageLegacy, SendMessageResponse, SetPinRequest, SetUsernameRequest,
    SetUsernameResponse, StickerPack, TrustIdentityRequest, TrustModeRequest, TrustModeResponse,
    TypingIndicatorRequest, UnregisterNumberRequest, UpdateAccountSettingsRequest,
    UpdateContactRequest, UpdateGroupRequest, UpdateProfileRequest, VerifyNumberSettings,
};

// General
pub const ABOUT: Endpoint<Json<About>> = Endpoint::get("/v1/about");
pub const CONFIGURATION: Endpoint<Json<Configuration>> = Endpoint::get("/v1/configuration");
pub const SET_CONFIGURATION: Endpoint<NoContent, JsonBody<Configuration>> =
    Endpoint::post("/v1/configuration");
pub const ACCOUNT_SETTINGS: Endpoint<Json<TrustModeResponse>> =
    Endpoint::get("/v1/configuration/{number}/settings");
pub const SET_ACCOUNT_SETTINGS: Endpoint<NoContent, JsonBody<TrustModeRequest>> =
    Endpoint::post("/v1/configuration/{number}/settings");
pub const HEALTH: Endpoint<NoContent> = Endpoint::get("/v1/health");

// Accounts
pub const ACCOUNTS: Endpoint<Json<Vec<String>>> = Endpoint::get("/v1/accounts");
pub const SET_PIN: Endpoint<NoContent, JsonBody<SetPinRequest>> =
    Endpoint::post("/v1/accounts/{number}/pin");
pub const REMOVE_PIN: Endpoint<NoContent> = Endpoint::delete("/v1/accounts/{number}/pin");
pub const RATE_LIMIT_CHALLENGE: Endpoint<NoContent, JsonBody<RateLimitChallengeRequest>> =
    Endpoint::post("/v1/accounts/{number}/rate-limit-challenge");
pub const UPDATE_ACCOUNT_SETTINGS: Endpoint<NoContent, JsonBody<UpdateAccountSettingsRequest>> =
    Endpoint::put("/v1/accounts/{number}/settings");
pub const SET_USERNAME: Endpoint<Json<SetUsernameResponse>, JsonBody<SetUsernameRequest>> =
    Endpoint::post("/v1/accounts/{number}/username");
pub const REMOVE_USERNAME: Endpoint<NoContent> =
    Endpoint::delete("/v1/accounts/{number}/username");

// Devices
pub const REGISTER_NUMBER: Endpoint<NoContent, JsonBody<RegisterNumberRequest>> =
    Endpoint::post("/v1/register/{number}");
pub const VERIFY_NUMBER: Endpoint<NoContent, JsonBody<VerifyNumberSettings>> =
    Endpoint::post("/v1/register/{number}/verify/{token}");
pub const DEVICES: Endpoint<Json<Vec<Device>>> = Endpoint::get("/v1/devices/{number}");
pub const LINK_DEVICE: Endpoint<NoContent, JsonBody<AddDeviceRequest>> =
    Endpoint::post("/v1/devices/{number}");
pub const QRCODE_LINK: Endpoint<RawText> =
    Endpoint::get("/v1/qrcodelink").with_query(&["device_name", "qrcode_version"]);
pub const UNREGISTER_NUMBER: Endpoint<NoContent, JsonBody<UnregisterNumberRequest>> =
    Endpoint::post("/v1/unregister/{number}");

// Messages
pub const SEND_MESSAGE_LEGACY: Endpoint<RawText, JsonBody<SendMessageLegacy>> =
    Endpoint::post("/v1/send");
pub const SEND_MESSAGE: Endpoint<Json<SendMessageResponse>, JsonBody<SendMessage>> =
    Endpoint::post("/v2/send");
pub const RECEIVE_MESSAGES: Endpoint<Json<Vec<ReceivedMessage>>> =
    Endpoint::get("/v1/receive/{number}").with_query(&[
        "timeout",
        "ignore_attachments",
        "ignore_stories",
        "max_messages",
        "send_read_receipts",
    ]);
pub const REMOTE_DELETE: Endpoint<Json<RemoteDeleteResponse>, JsonBody<RemoteDeleteRequest>> =
    Endpoint::delete("/v1/remote-delete/{number}");

// Contacts
pub const CONTACTS: Endpoint<Json<Vec<Contact>>> = Endpoint::get("/v1/contacts/{number}");
pub const UPDATE_CONTACT: Endpoint<NoContent, JsonBody<UpdateContactRequest>> =
    Endpoint::put("/v1/contacts/{number}");
pub const CONTACT: Endpoint<Json<Contact>> = Endpoint::get("/v1/contacts/{number}/{uuid}");
pub const CONTACT_AVATAR: Endpoint<RawText> =
    Endpoint::get("/v1/contacts/{number}/{uuid}/avatar");
pub const SYNC_CONTACTS: Endpoint<NoContent> = Endpoint::post("/v1/contacts/{number}/sync");

// Attachments
pub const ATTACHMENTS: Endpoint<Json<Vec<String>>> = Endpoint::get("/v1/attachments");
pub const ATTACHMENT: Endpoint<RawText> = Endpoint::get("/v1/attachments/{attachment}");
pub const DELETE_ATTACHMENT: Endpoint<NoContent> =
    Endpoint::delete("/v1/attachments/{attachment}");

// Groups
pub const GROUPS: Endpoint<Json<Vec<Group>>> = Endpoint::get("/v1/groups/{number}");
pub const CREATE_GROUP: Endpoint<Json<CreateGroupResponse>, JsonBody<CreateGroupRequest>> =
    Endpoint::post("/v1/groups/{number}");
pub const GROUP: Endpoint<Json<Group>> = Endpoint::get("/v1/groups/{number}/{groupid}");
pub const UPDATE_GROUP: Endpoint<NoContent, JsonBody<UpdateGroupRequest>> =
    Endpoint::put("/v1/groups/{number}/{groupid}");
pub const DELETE_GROUP: Endpoint<NoContent> = Endpoint::delete("/v1/groups/{number}/{groupid}");
pub const ADD_GROUP_ADMINS: Endpoint<NoContent, JsonBody<ChangeGroupAdminsRequest>> =
    Endpoint::post("/v1/groups/{number}/{groupid}/admins");
pub const REMOVE_GROUP_ADMINS: Endpoint<NoContent, JsonBody<ChangeGroupAdminsRequest>> =
    Endpoint::delete("/v1/groups/{number}/{groupid}/admins");
pub const GROUP_AVATAR: Endpoint<RawText> = Endpoint::get("/v1/groups/{number}/{groupid}/avatar");
pub const BLOCK_GROUP: Endpoint<NoContent> = Endpoint::post("/v1/groups/{number}/{groupid}/block");
pub const JOIN_GROUP: Endpoint<NoContent> = Endpoint::post("/v1/groups/{number}/{groupid}/join");
pub const ADD_GROUP_MEMBERS: Endpoint<NoContent, JsonBody<ChangeGroupMembersRequest>> =
    Endpoint::post("/v1/groups/{number}/{groupid}/members");
pub const REMOVE_GROUP_MEMBERS: Endpoint<NoContent, JsonBody<ChangeGroupMembersRequest>> =
    Endpoint::delete("/v1/groups/{number}/{groupid}/members");
pub const QUIT_GROUP: Endpoint<NoContent> = Endpoint::post("/v1/groups/{number}/{groupid}/quit");

// Identities
pub const IDENTITIES: Endpoint<Json<Vec<Identity>>> = Endpoint::get("/v1/identities/{number}");
pub const TRUST_IDENTITY: Endpoint<NoContent, JsonBody<TrustIdentityRequest>> =
    Endpoint::put("/v1/identities/{number}/trust/{numbertotrust}");

// Profiles, reactions, receipts
pub const UPDATE_PROFILE: Endpoint<NoContent, JsonBody<UpdateProfileRequest>> =
    Endpoint::put("/v1/profiles/{number}");
pub const SEND_REACTION: Endpoint<NoContent, JsonBody<Reaction>> =
    Endpoint::post("/v1/reactions/{number}");
pub const REMOVE_REACTION: Endpoint<NoContent, JsonBody<Reaction>> =
    Endpoint::delete("/v1/reactions/{number}");
pub const SEND_RECEIPT: Endpoint<NoContent, JsonBody<Receipt>> =
    Endpoint::post("/v1/receipts/{number}");

// Search
pub const SEARCH: Endpoint<Json<Vec<SearchResult>>> =
    Endpoint::get("/v1/search/{number}").with_query(&["numbers"]);

// Sticker packs
pub const STICKER_PACKS: Endpoint<Json<Vec<StickerPack>>> =
    Endpoint::get("/v1/sticker-packs/{number}");
pub const ADD_STICKER_PACK: Endpoint<NoContent, JsonBody<AddStickerPackRequest>> =
    Endpoint::post("/v1/sticker-packs/{number}");

// Typing indicators
pub const SHOW_TYPING_INDICATOR: Endpoint<NoContent, JsonBody<TypingIndicatorRequest>> =
    Endpoint::put("/v1/typing-indicator/{number}");
pub const HIDE_TYPING_INDICATOR: Endpoint<NoContent, JsonBody<TypingIndicatorRequest>> =
    Endpoint::delete("/v1/typing-indicator/{number}");
