use super::{SignalClient, SignalError};
use crate::domain::{About, Configuration, TrustModeRequest, TrustModeResponse};
use crate::transport::catalog;

impl SignalClient {
    /// Gateway version, build, mode and supported capabilities.
    pub async fn about(&self) -> Result<About, SignalError> {
        self.execute(catalog::ABOUT.request(&[])).await
    }

    pub async fn configuration(&self) -> Result<Configuration, SignalError> {
        self.execute(catalog::CONFIGURATION.request(&[])).await
    }

    pub async fn set_configuration(&self, config: &Configuration) -> Result<(), SignalError> {
        let request = catalog::SET_CONFIGURATION
            .request_json(&[], config)
            .map_err(SignalError::Encode)?;
        self.execute(request).await
    }

    /// Identity trust mode configured for `number`.
    pub async fn account_settings(&self, number: &str) -> Result<TrustModeResponse, SignalError> {
        self.execute(catalog::ACCOUNT_SETTINGS.request(&[number]))
            .await
    }

    pub async fn set_account_settings(
        &self,
        number: &str,
        settings: &TrustModeRequest,
    ) -> Result<(), SignalError> {
        let request = catalog::SET_ACCOUNT_SETTINGS
            .request_json(&[number], settings)
            .map_err(SignalError::Encode)?;
        self.execute(request).await
    }

    /// Succeeds when the gateway reports itself healthy.
    pub async fn health(&self) -> Result<(), SignalError> {
        self.execute(catalog::HEALTH.request(&[])).await
    }
}
