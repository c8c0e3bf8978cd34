//! Contact API operations.

use contactbook_core::contact::{Contact, ContactQuery, ProfileImageRequest, UpdateContactRequest};

use super::ContactbookClient;
use crate::error::Result;

impl ContactbookClient {
    /// List every contact owned by a user.
    pub async fn list_contacts(&self, user_id: i64) -> Result<Vec<Contact>> {
        let query = ContactQuery {
            user_id,
            search: None,
        };
        let response = self
            .client
            .get(self.endpoint())
            .query(&query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Search a user's contacts by keyword.
    pub async fn search_contacts(&self, user_id: i64, keyword: &str) -> Result<Vec<Contact>> {
        let query = ContactQuery {
            user_id,
            search: Some(keyword.to_string()),
        };
        let response = self
            .client
            .get(self.endpoint())
            .query(&query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get contact by ID.
    pub async fn get_contact(&self, id: i64) -> Result<Contact> {
        let response = self.client.get(self.url(&format!("/{id}"))).send().await?;
        self.handle_response(response).await
    }

    /// Update the supplied fields of a contact.
    pub async fn update_contact(&self, id: i64, update: &UpdateContactRequest) -> Result<Contact> {
        let response = self
            .client
            .put(self.url(&format!("/{id}")))
            .json(update)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete contact by ID.
    pub async fn delete_contact(&self, id: i64) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/{id}")))
            .send()
            .await?;
        self.handle_empty_response(response).await
    }

    /// Set the profile image filename of a contact.
    pub async fn save_profile_image(&self, id: i64, image_filename: &str) -> Result<()> {
        let body = ProfileImageRequest {
            profile_image: image_filename.to_string(),
        };
        let response = self
            .client
            .put(self.url(&format!("/{id}/profileImage")))
            .json(&body)
            .send()
            .await?;
        self.handle_empty_response(response).await
    }
}
