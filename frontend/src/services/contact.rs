use common::model::contact::{ContactMessage, ContactMessageInput};

use crate::api::{ApiClient, ApiError};

pub struct ContactService {
    api: ApiClient,
}

impl ContactService {
    pub fn new(api: ApiClient) -> ContactService {
        ContactService { api }
    }

    pub async fn create_message(
        &self,
        input: &ContactMessageInput,
    ) -> Result<ContactMessage, ApiError> {
        self.api.post_json("/contacts/public", input).await
    }
}
