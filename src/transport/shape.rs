use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Status codes treated as success by the gateway client.
pub const SUCCESS_STATUSES: [u16; 3] = [200, 201, 204];

/// Placeholder used in failure messages when the response had no body.
pub const NO_CONTENT_PLACEHOLDER: &str = "No content";

pub fn is_success(status: u16) -> bool {
    SUCCESS_STATUSES.contains(&status)
}

/// Declared expectation for a successful response body.
pub trait ResponseShape {
    type Output;

    fn decode(body: String) -> Result<Self::Output, serde_json::Error>;
}

/// The body is ignored; only success matters.
#[derive(Debug, Clone, Copy)]
pub struct NoContent;

impl ResponseShape for NoContent {
    type Output = ();

    fn decode(_body: String) -> Result<(), serde_json::Error> {
        Ok(())
    }
}

/// The body is returned verbatim.
#[derive(Debug, Clone, Copy)]
pub struct RawText;

impl ResponseShape for RawText {
    type Output = String;

    fn decode(body: String) -> Result<String, serde_json::Error> {
        Ok(body)
    }
}

/// The body is decoded as JSON into `T`.
pub struct Json<T>(PhantomData<fn() -> T>);

impl<T: DeserializeOwned> ResponseShape for Json<T> {
    type Output = T;

    fn decode(body: String) -> Result<T, serde_json::Error> {
        serde_json::from_str(&body)
    }
}

/// The gateway's failure body, `{"error": "..."}`.
///
/// Only a JSON object with a string `error` member counts; arrays, scalars and
/// objects without a usable message do not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub error: String,
}

impl ErrorEnvelope {
    pub fn parse(body: &str) -> Option<Self> {
        let object = serde_json::from_str::<Map<String, Value>>(body).ok()?;
        let error = object.get("error")?.as_str()?;
        Some(Self {
            error: error.to_owned(),
        })
    }
}

/// Build the message for a non-success response.
///
/// Uses the envelope's `error` when the body carries one, otherwise a
/// description with the status code and the raw body.
pub fn failure_message(status: u16, body: &str) -> String {
    match ErrorEnvelope::parse(body) {
        Some(envelope) => envelope.error,
        None => {
            let body = if body.is_empty() {
                NO_CONTENT_PLACEHOLDER
            } else {
                body
            };
            format!("request failed with status {status}: {body}")
        }
    }
}
