use super::{SignalClient, SignalError};
use crate::domain::{Reaction, Receipt, TypingIndicatorRequest};
use crate::transport::catalog;

impl SignalClient {
    pub async fn send_reaction(&self, number: &str, reaction: &Reaction) -> Result<(), SignalError> {
        let request = catalog::SEND_REACTION
            .request_json(&[number], reaction)
            .map_err(SignalError::Encode)?;
        self.execute(request).await
    }

    /// Remove a reaction; `reaction` must match the one previously sent.
    pub async fn remove_reaction(
        &self,
        number: &str,
        reaction: &Reaction,
    ) -> Result<(), SignalError> {
        let request = catalog::REMOVE_REACTION
            .request_json(&[number], reaction)
            .map_err(SignalError::Encode)?;
        self.execute(request).await
    }

    pub async fn send_receipt(&self, number: &str, receipt: &Receipt) -> Result<(), SignalError> {
        let request = catalog::SEND_RECEIPT
            .request_json(&[number], receipt)
            .map_err(SignalError::Encode)?;
        self.execute(request).await
    }

    pub async fn show_typing_indicator(
        &self,
        number: &str,
        typing: &TypingIndicatorRequest,
    ) -> Result<(), SignalError> {
        let request = catalog::SHOW_TYPING_INDICATOR
            .request_json(&[number], typing)
            .map_err(SignalError::Encode)?;
        self.execute(request).await
    }

    pub async fn hide_typing_indicator(
        &self,
        number: &str,
        typing: &TypingIndicatorRequest,
    ) -> Result<(), SignalError> {
        let request = catalog::HIDE_TYPING_INDICATOR
            .request_json(&[number], typing)
            .map_err(SignalError::Encode)?;
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::testing::fake_client;
    use crate::domain::{Reaction, Receipt, ReceiptType, TypingIndicatorRequest};
    use crate::transport::Method;

    fn thumbs_up() -> Reaction {
        Reaction {
            reaction: "👍".to_owned(),
            recipient: "+2".to_owned(),
            target_author: "+2".to_owned(),
            timestamp: Some(1_700_000_000_000),
        }
    }

    #[tokio::test]
    async fn reactions_post_and_delete_same_body() {
        let (client, fake) = fake_client(204, "");

        client.send_reaction("+1", &thumbs_up()).await.unwrap();
        assert_eq!(fake.last_method(), Method::Post);
        assert_eq!(fake.last_path(), "/v1/reactions/+1");
        let sent = fake.last_body();

        client.remove_reaction("+1", &thumbs_up()).await.unwrap();
        assert_eq!(fake.last_method(), Method::Delete);
        assert_eq!(fake.last_body(), sent);
        assert_eq!(
            sent,
            Some(serde_json::json!({
                "reaction": "👍",
                "recipient": "+2",
                "target_author": "+2",
                "timestamp": 1_700_000_000_000_i64
            }))
        );
    }

    #[tokio::test]
    async fn receipt_posts_type() {
        let (client, fake) = fake_client(204, "");
        client
            .send_receipt(
                "+1",
                &Receipt {
                    receipt_type: ReceiptType::Viewed,
                    recipient: "+2".to_owned(),
                    timestamp: Some(5),
                },
            )
            .await
            .unwrap();

        assert_eq!(fake.last_path(), "/v1/receipts/+1");
        assert_eq!(
            fake.last_body(),
            Some(serde_json::json!({
                "receipt_type": "viewed",
                "recipient": "+2",
                "timestamp": 5
            }))
        );
    }

    #[tokio::test]
    async fn typing_indicator_put_then_delete() {
        let (client, fake) = fake_client(204, "");
        let typing = TypingIndicatorRequest {
            recipient: "+2".to_owned(),
        };

        client.show_typing_indicator("+1", &typing).await.unwrap();
        assert_eq!(fake.last_method(), Method::Put);
        assert_eq!(fake.last_path(), "/v1/typing-indicator/+1");

        client.hide_typing_indicator("+1", &typing).await.unwrap();
        assert_eq!(fake.last_method(), Method::Delete);
        assert_eq!(fake.last_body(), Some(serde_json::json!({ "recipient": "+2" })));
    }
}
