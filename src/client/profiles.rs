use super::{SignalClient, SignalError};
use crate::domain::{AddStickerPackRequest, StickerPack, UpdateProfileRequest};
use crate::transport::catalog;

impl SignalClient {
    pub async fn update_profile(
        &self,
        number: &str,
        profile: &UpdateProfileRequest,
    ) -> Result<(), SignalError> {
        let request = catalog::UPDATE_PROFILE
            .request_json(&[number], profile)
            .map_err(SignalError::Encode)?;
        self.execute(request).await
    }

    /// Sticker packs installed for `number`.
    pub async fn sticker_packs(&self, number: &str) -> Result<Vec<StickerPack>, SignalError> {
        self.execute(catalog::STICKER_PACKS.request(&[number])).await
    }

    pub async fn add_sticker_pack(
        &self,
        number: &str,
        pack: &AddStickerPackRequest,
    ) -> Result<(), SignalError> {
        let request = catalog::ADD_STICKER_PACK
            .request_json(&[number], pack)
            .map_err(SignalError::Encode)?;
        self.execute(request).await
    }
}
