use super::{SignalClient, SignalError};
use crate::transport::catalog;

impl SignalClient {
    /// Ids of attachments stored by the gateway.
    pub async fn attachments(&self) -> Result<Vec<String>, SignalError> {
        self.execute(catalog::ATTACHMENTS.request(&[])).await
    }

    /// Attachment content, returned as received.
    pub async fn attachment(&self, attachment_id: &str) -> Result<String, SignalError> {
        self.execute(catalog::ATTACHMENT.request(&[attachment_id]))
            .await
    }

    pub async fn delete_attachment(&self, attachment_id: &str) -> Result<(), SignalError> {
        self.execute(catalog::DELETE_ATTACHMENT.request(&[attachment_id]))
            .await
    }
}
