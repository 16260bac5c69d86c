use super::{SignalClient, SignalError};
use crate::domain::{Identity, SearchResult, TrustIdentityRequest};
use crate::transport::{Query, catalog};

impl SignalClient {
    /// Identity keys known to `number`.
    pub async fn identities(&self, number: &str) -> Result<Vec<Identity>, SignalError> {
        self.execute(catalog::IDENTITIES.request(&[number])).await
    }

    /// Trust the identity key of `number_to_trust`, either all known keys or
    /// the one matching a verified safety number.
    pub async fn trust_identity(
        &self,
        number: &str,
        number_to_trust: &str,
        trust: &TrustIdentityRequest,
    ) -> Result<(), SignalError> {
        let request = catalog::TRUST_IDENTITY
            .request_json(&[number, number_to_trust], trust)
            .map_err(SignalError::Encode)?;
        self.execute(request).await
    }

    /// Check which of `numbers` are registered with Signal.
    pub async fn search(
        &self,
        number: &str,
        numbers: &[String],
    ) -> Result<Vec<SearchResult>, SignalError> {
        let query = Query::new().push("numbers", numbers);
        self.execute(catalog::SEARCH.request(&[number]).query(query))
            .await
    }
}
