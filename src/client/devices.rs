use super::{SignalClient, SignalError};
use crate::domain::{
    AddDeviceRequest, Device, RegisterNumberRequest, UnregisterNumberRequest,
    VerifyNumberSettings,
};
use crate::transport::{Query, catalog};

impl SignalClient {
    /// Start registration of `number`; a verification code is sent by SMS or voice.
    ///
    /// `None` sends [`RegisterNumberRequest::default`].
    pub async fn register_number(
        &self,
        number: &str,
        request: Option<&RegisterNumberRequest>,
    ) -> Result<(), SignalError> {
        let default = RegisterNumberRequest::default();
        let request = catalog::REGISTER_NUMBER
            .request_json(&[number], request.unwrap_or(&default))
            .map_err(SignalError::Encode)?;
        self.execute(request).await
    }

    /// Finish registration with the received verification `token`.
    ///
    /// `None` sends [`VerifyNumberSettings::default`].
    pub async fn verify_number(
        &self,
        number: &str,
        token: &str,
        settings: Option<&VerifyNumberSettings>,
    ) -> Result<(), SignalError> {
        let default = VerifyNumberSettings::default();
        let request = catalog::VERIFY_NUMBER
            .request_json(&[number, token], settings.unwrap_or(&default))
            .map_err(SignalError::Encode)?;
        self.execute(request).await
    }

    pub async fn devices(&self, number: &str) -> Result<Vec<Device>, SignalError> {
        self.execute(catalog::DEVICES.request(&[number])).await
    }

    pub async fn link_device(
        &self,
        number: &str,
        device: &AddDeviceRequest,
    ) -> Result<(), SignalError> {
        let request = catalog::LINK_DEVICE
            .request_json(&[number], device)
            .map_err(SignalError::Encode)?;
        self.execute(request).await
    }

    /// Device-link payload for linking the gateway as a secondary device.
    ///
    /// The gateway answers with the QR code image; it is returned as received.
    pub async fn qrcode_link(
        &self,
        device_name: &str,
        qrcode_version: Option<u32>,
    ) -> Result<String, SignalError> {
        let query = Query::new()
            .push("device_name", device_name)
            .push_opt("qrcode_version", qrcode_version);
        self.execute(catalog::QRCODE_LINK.request(&[]).query(query))
            .await
    }

    pub async fn unregister_number(
        &self,
        number: &str,
        request: &UnregisterNumberRequest,
    ) -> Result<(), SignalError> {
        let request = catalog::UNREGISTER_NUMBER
            .request_json(&[number], request)
            .map_err(SignalError::Encode)?;
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::testing::fake_client;
    use crate::domain::{
        AddDeviceRequest, RegisterNumberRequest, UnregisterNumberRequest, VerifyNumberSettings,
    };
    use crate::transport::Method;

    #[tokio::test]
    async fn register_number_defaults_body() {
        let (client, fake) = fake_client(201, "");

        client.register_number("+4930", None).await.unwrap();
        assert_eq!(fake.last_method(), Method::Post);
        assert_eq!(fake.last_path(), "/v1/register/+4930");
        assert_eq!(
            fake.last_body(),
            Some(serde_json::json!({ "use_voice": false }))
        );

        let request = RegisterNumberRequest {
            captcha: Some("signalcaptcha://x".to_owned()),
            use_voice: true,
        };
        client.register_number("+4930", Some(&request)).await.unwrap();
        assert_eq!(
            fake.last_body(),
            Some(serde_json::json!({ "captcha": "signalcaptcha://x", "use_voice": true }))
        );
    }

    #[tokio::test]
    async fn verify_number_substitutes_token() {
        let (client, fake) = fake_client(201, "");

        client.verify_number("+4930", "123-456", None).await.unwrap();
        assert_eq!(fake.last_path(), "/v1/register/+4930/verify/123-456");
        assert_eq!(fake.last_body(), Some(serde_json::json!({})));

        let settings = VerifyNumberSettings {
            pin: Some("0000".to_owned()),
        };
        client
            .verify_number("+4930", "123-456", Some(&settings))
            .await
            .unwrap();
        assert_eq!(fake.last_body(), Some(serde_json::json!({ "pin": "0000" })));
    }

    #[tokio::test]
    async fn devices_decode_list() {
        let (client, fake) = fake_client(
            200,
            r#"[{"id":1,"name":"phone","creation_timestamp":10,"last_seen_timestamp":20}]"#,
        );

        let devices = client.devices("+4930").await.unwrap();
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].name, "phone");
        assert_eq!(devices[0].last_seen_timestamp, 20);
        assert_eq!(fake.last_path(), "/v1/devices/+4930");
    }

    #[tokio::test]
    async fn link_device_posts_uri() {
        let (client, fake) = fake_client(204, "");
        client
            .link_device(
                "+4930",
                &AddDeviceRequest {
                    uri: "sgnl://linkdevice?uuid=u&pub_key=k".to_owned(),
                },
            )
            .await
            .unwrap();

        assert_eq!(fake.last_method(), Method::Post);
        assert_eq!(fake.last_path(), "/v1/devices/+4930");
        assert_eq!(
            fake.last_body(),
            Some(serde_json::json!({ "uri": "sgnl://linkdevice?uuid=u&pub_key=k" }))
        );
    }

    #[tokio::test]
    async fn qrcode_link_returns_raw_body_and_omits_missing_version() {
        let (client, fake) = fake_client(200, "\u{89}PNG raw");

        let body = client.qrcode_link("laptop", None).await.unwrap();
        assert_eq!(body, "\u{89}PNG raw");
        assert_eq!(fake.last_path(), "/v1/qrcodelink");
        assert_eq!(
            fake.last_query(),
            vec![("device_name".to_owned(), "laptop".to_owned())]
        );

        client.qrcode_link("my laptop", Some(10)).await.unwrap();
        assert_eq!(
            fake.last_query(),
            vec![
                ("device_name".to_owned(), "my laptop".to_owned()),
                ("qrcode_version".to_owned(), "10".to_owned()),
            ]
        );
    }

    #[tokio::test]
    async fn qrcode_link_with_empty_body_is_empty_string() {
        let (client, _fake) = fake_client(200, "");
        assert_eq!(client.qrcode_link("laptop", None).await.unwrap(), "");
    }

    #[tokio::test]
    async fn unregister_number_sends_flags() {
        let (client, fake) = fake_client(204, "");
        client
            .unregister_number(
                "+4930",
                &UnregisterNumberRequest {
                    delete_account: true,
                    delete_local_data: false,
                },
            )
            .await
            .unwrap();

        assert_eq!(fake.last_path(), "/v1/unregister/+4930");
        assert_eq!(
            fake.last_body(),
            Some(serde_json::json!({ "delete_account": true, "delete_local_data": false }))
        );
    }
}
