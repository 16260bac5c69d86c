use super::{SignalClient, SignalError};
use crate::domain::{
    RateLimitChallengeRequest, SetPinRequest, SetUsernameRequest, SetUsernameResponse,
    UpdateAccountSettingsRequest,
};
use crate::transport::catalog;

impl SignalClient {
    /// Numbers registered with the gateway.
    pub async fn accounts(&self) -> Result<Vec<String>, SignalError> {
        self.execute(catalog::ACCOUNTS.request(&[])).await
    }

    /// Set the registration lock PIN for `number`.
    pub async fn set_pin(&self, number: &str, pin: &str) -> Result<(), SignalError> {
        let request = catalog::SET_PIN
            .request_json(
                &[number],
                &SetPinRequest {
                    pin: pin.to_owned(),
                },
            )
            .map_err(SignalError::Encode)?;
        self.execute(request).await
    }

    pub async fn remove_pin(&self, number: &str) -> Result<(), SignalError> {
        self.execute(catalog::REMOVE_PIN.request(&[number])).await
    }

    /// Lift a rate limit by answering the captcha challenge.
    pub async fn submit_rate_limit_challenge(
        &self,
        number: &str,
        challenge: &RateLimitChallengeRequest,
    ) -> Result<(), SignalError> {
        let request = catalog::RATE_LIMIT_CHALLENGE
            .request_json(&[number], challenge)
            .map_err(SignalError::Encode)?;
        self.execute(request).await
    }

    pub async fn update_account_settings(
        &self,
        number: &str,
        settings: &UpdateAccountSettingsRequest,
    ) -> Result<(), SignalError> {
        let request = catalog::UPDATE_ACCOUNT_SETTINGS
            .request_json(&[number], settings)
            .map_err(SignalError::Encode)?;
        self.execute(request).await
    }

    /// Claim a username; the response carries the final name with its
    /// discriminator and a shareable link.
    pub async fn set_username(
        &self,
        number: &str,
        username: &SetUsernameRequest,
    ) -> Result<SetUsernameResponse, SignalError> {
        let request = catalog::SET_USERNAME
            .request_json(&[number], username)
            .map_err(SignalError::Encode)?;
        self.execute(request).await
    }

    pub async fn remove_username(&self, number: &str) -> Result<(), SignalError> {
        self.execute(catalog::REMOVE_USERNAME.request(&[number]))
            .await
    }
}
