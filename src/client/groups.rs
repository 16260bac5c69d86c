use super::{SignalClient, SignalError};
use crate::domain::{
    ChangeGroupAdminsRequest, ChangeGroupMembersRequest, CreateGroupRequest, CreateGroupResponse,
    Group, UpdateGroupRequest,
};
use crate::transport::catalog;

impl SignalClient {
    /// Groups `number` is a member of.
    pub async fn groups(&self, number: &str) -> Result<Vec<Group>, SignalError> {
        self.execute(catalog::GROUPS.request(&[number])).await
    }

    /// Create a group; the response carries the new group id.
    pub async fn create_group(
        &self,
        number: &str,
        group: &CreateGroupRequest,
    ) -> Result<CreateGroupResponse, SignalError> {
        let request = catalog::CREATE_GROUP
            .request_json(&[number], group)
            .map_err(SignalError::Encode)?;
        self.execute(request).await
    }

    pub async fn group(&self, number: &str, group_id: &str) -> Result<Group, SignalError> {
        self.execute(catalog::GROUP.request(&[number, group_id]))
            .await
    }

    pub async fn update_group(
        &self,
        number: &str,
        group_id: &str,
        update: &UpdateGroupRequest,
    ) -> Result<(), SignalError> {
        let request = catalog::UPDATE_GROUP
            .request_json(&[number, group_id], update)
            .map_err(SignalError::Encode)?;
        self.execute(request).await
    }

    pub async fn delete_group(&self, number: &str, group_id: &str) -> Result<(), SignalError> {
        self.execute(catalog::DELETE_GROUP.request(&[number, group_id]))
            .await
    }

    pub async fn add_group_admins(
        &self,
        number: &str,
        group_id: &str,
        admins: &ChangeGroupAdminsRequest,
    ) -> Result<(), SignalError> {
        let request = catalog::ADD_GROUP_ADMINS
            .request_json(&[number, group_id], admins)
            .map_err(SignalError::Encode)?;
        self.execute(request).await
    }

    pub async fn remove_group_admins(
        &self,
        number: &str,
        group_id: &str,
        admins: &ChangeGroupAdminsRequest,
    ) -> Result<(), SignalError> {
        let request = catalog::REMOVE_GROUP_ADMINS
            .request_json(&[number, group_id], admins)
            .map_err(SignalError::Encode)?;
        self.execute(request).await
    }

    /// Group avatar image, returned as received.
    pub async fn group_avatar(&self, number: &str, group_id: &str) -> Result<String, SignalError> {
        self.execute(catalog::GROUP_AVATAR.request(&[number, group_id]))
            .await
    }

    pub async fn block_group(&self, number: &str, group_id: &str) -> Result<(), SignalError> {
        self.execute(catalog::BLOCK_GROUP.request(&[number, group_id]))
            .await
    }

    pub async fn join_group(&self, number: &str, group_id: &str) -> Result<(), SignalError> {
        self.execute(catalog::JOIN_GROUP.request(&[number, group_id]))
            .await
    }

    pub async fn add_group_members(
        &self,
        number: &str,
        group_id: &str,
        members: &ChangeGroupMembersRequest,
    ) -> Result<(), SignalError> {
        let request = catalog::ADD_GROUP_MEMBERS
            .request_json(&[number, group_id], members)
            .map_err(SignalError::Encode)?;
        self.execute(request).await
    }

    pub async fn remove_group_members(
        &self,
        number: &str,
        group_id: &str,
        members: &ChangeGroupMembersRequest,
    ) -> Result<(), SignalError> {
        let request = catalog::REMOVE_GROUP_MEMBERS
            .request_json(&[number, group_id], members)
            .map_err(SignalError::Encode)?;
        self.execute(request).await
    }

    pub async fn quit_group(&self, number: &str, group_id: &str) -> Result<(), SignalError> {
        self.execute(catalog::QUIT_GROUP.request(&[number, group_id]))
            .await
    }
}
