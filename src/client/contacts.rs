use super::{SignalClient, SignalError};
use crate::domain::{Contact, UpdateContactRequest};
use crate::transport::catalog;

impl SignalClient {
    pub async fn contacts(&self, number: &str) -> Result<Vec<Contact>, SignalError> {
        self.execute(catalog::CONTACTS.request(&[number])).await
    }

    /// Add or rename a contact of `number`.
    pub async fn update_contact(
        &self,
        number: &str,
        contact: &UpdateContactRequest,
    ) -> Result<(), SignalError> {
        let request = catalog::UPDATE_CONTACT
            .request_json(&[number], contact)
            .map_err(SignalError::Encode)?;
        self.execute(request).await
    }

    pub async fn contact(&self, number: &str, uuid: &str) -> Result<Contact, SignalError> {
        self.execute(catalog::CONTACT.request(&[number, uuid])).await
    }

    /// Contact avatar image, returned as received.
    pub async fn contact_avatar(&self, number: &str, uuid: &str) -> Result<String, SignalError> {
        self.execute(catalog::CONTACT_AVATAR.request(&[number, uuid]))
            .await
    }

    /// Push the local contact list to linked devices.
    pub async fn sync_contacts(&self, number: &str) -> Result<(), SignalError> {
        self.execute(catalog::SYNC_CONTACTS.request(&[number])).await
    }
}
