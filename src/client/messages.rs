use super::{SignalClient, SignalError};
use crate::domain::{
    ReceiveOptions, ReceivedMessage, RemoteDeleteRequest, RemoteDeleteResponse, SendMessage,
    SendMessageLegacy, SendMessageResponse,
};
use crate::transport::{Query, catalog};

impl SignalClient {
    /// Send through the single-attachment `/v1/send` endpoint.
    ///
    /// Returns the gateway's response body unparsed.
    #[deprecated(note = "`/v1/send` is deprecated by the gateway; use `send_message`")]
    pub async fn send_message_legacy(
        &self,
        message: &SendMessageLegacy,
    ) -> Result<String, SignalError> {
        let request = catalog::SEND_MESSAGE_LEGACY
            .request_json(&[], message)
            .map_err(SignalError::Encode)?;
        self.execute(request).await
    }

    /// Send a message to one or more recipients or groups.
    pub async fn send_message(
        &self,
        message: &SendMessage,
    ) -> Result<SendMessageResponse, SignalError> {
        let request = catalog::SEND_MESSAGE
            .request_json(&[], message)
            .map_err(SignalError::Encode)?;
        self.execute(request).await
    }

    /// Fetch pending messages for `number`.
    ///
    /// Only the options that are set are sent as query parameters.
    pub async fn receive_messages(
        &self,
        number: &str,
        options: ReceiveOptions,
    ) -> Result<Vec<ReceivedMessage>, SignalError> {
        let query = Query::new()
            .push_opt("timeout", options.timeout)
            .push_opt("ignore_attachments", options.ignore_attachments)
            .push_opt("ignore_stories", options.ignore_stories)
            .push_opt("max_messages", options.max_messages)
            .push_opt("send_read_receipts", options.send_read_receipts);
        self.execute(catalog::RECEIVE_MESSAGES.request(&[number]).query(query))
            .await
    }

    /// Delete a previously sent message for all recipients.
    pub async fn remote_delete(
        &self,
        number: &str,
        request: &RemoteDeleteRequest,
    ) -> Result<RemoteDeleteResponse, SignalError> {
        let request = catalog::REMOTE_DELETE
            .request_json(&[number], request)
            .map_err(SignalError::Encode)?;
        self.execute(request).await
    }
}
