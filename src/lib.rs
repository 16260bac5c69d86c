//! Typed Rust client for the signal-cli REST gateway.
//!
//! Three layers: a domain layer of request/response types, a transport layer
//! describing every gateway operation as a static endpoint descriptor, and a
//! client layer that executes one HTTP request per operation and classifies
//! the outcome into a typed value or a [`SignalError`].
//!
//! ```rust,no_run
//! use signalapi::{SendMessage, SignalClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), signalapi::SignalError> {
//!     let client = SignalClient::new("http://localhost:8080")?;
//!     let message = SendMessage::new("+4915112345678", vec!["+4915187654321".to_owned()], "hello");
//!     let sent = client.send_message(&message).await?;
//!     println!("sent at {}", sent.timestamp);
//!     client.close();
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{DEFAULT_TIMEOUT, SignalClient, SignalClientBuilder, SignalError};
pub use domain::{
    About, AddDeviceRequest, AddStickerPackRequest, ChangeGroupAdminsRequest,
    ChangeGroupMembersRequest, Configuration, Contact, ContactProfile, CreateGroupRequest,
    CreateGroupResponse, Device, Group, GroupLinkState, GroupPermission, GroupPermissions,
    Identity, LinkPreview, LoggingConfiguration, MessageMention, Nickname,
    RateLimitChallengeRequest, Reaction, Receipt, ReceiptType, ReceiveOptions, ReceivedMessage,
    RegisterNumberRequest, RemoteDeleteRequest, RemoteDeleteResponse, SearchResult, SendMessage,
    SendMessageLegacy, SendMessageResponse, SetPinRequest, SetUsernameRequest,
    SetUsernameResponse, StickerPack, TextMode, TrustIdentityRequest, TrustMode,
    TrustModeRequest, TrustModeResponse, TypingIndicatorRequest, UnregisterNumberRequest,
    UpdateAccountSettingsRequest, UpdateContactRequest, UpdateGroupRequest, UpdateProfileRequest,
    VerifyNumberSettings,
};
