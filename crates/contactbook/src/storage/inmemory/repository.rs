//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use contactbook_core::contact::{contact_matches, keyword_pattern, Contact, NewContact};
use contactbook_core::storage::{ContactRepository, Result, WriteOutcome};

/// In-memory contact store.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    contacts: Arc<RwLock<BTreeMap<i64, Contact>>>,
    next_id: Arc<AtomicI64>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

#[async_trait]
impl ContactRepository for InMemoryRepository {
    async fn get_contact(&self, id: i64) -> Result<Option<Contact>> {
        let contacts = self.contacts.read().await;
        Ok(contacts.get(&id).cloned())
    }

    async fn get_contacts_for_user(&self, user_id: i64) -> Result<Vec<Contact>> {
        let contacts = self.contacts.read().await;
        Ok(contacts
            .values()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create_contact(&self, contact: &NewContact) -> Result<i64> {
        let mut contacts = self.contacts.write().await;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        contacts.insert(id, Contact::from_new(id, contact.clone()));
        Ok(id)
    }

    async fn update_contact(&self, contact: &Contact) -> Result<WriteOutcome> {
        let mut contacts = self.contacts.write().await;
        let Some(stored) = contacts.get_mut(&contact.id) else {
            return Ok(WriteOutcome::Unmatched);
        };

        stored.first_name = contact.first_name.clone();
        stored.last_name = contact.last_name.clone();
        stored.phone_number = contact.phone_number.clone();
        stored.address = contact.address.clone();
        stored.city = contact.city.clone();
        stored.state = contact.state.clone();
        stored.zip = contact.zip.clone();

        Ok(WriteOutcome::Applied)
    }

    async fn delete_contact(&self, id: i64) -> Result<WriteOutcome> {
        let mut contacts = self.contacts.write().await;
        Ok(match contacts.remove(&id) {
            Some(_) => WriteOutcome::Applied,
            None => WriteOutcome::Unmatched,
        })
    }

    async fn search_contacts(&self, user_id: i64, keyword: &str) -> Result<Vec<Contact>> {
        let pattern = keyword_pattern(keyword);
        let contacts = self.contacts.read().await;
        Ok(contacts
            .values()
            .filter(|c| c.user_id == user_id && contact_matches(c, &pattern))
            .cloned()
            .collect())
    }

    async fn save_profile_image(&self, image_filename: &str, id: i64) -> Result<WriteOutcome> {
        let mut contacts = self.contacts.write().await;
        Ok(match contacts.get_mut(&id) {
            Some(contact) => {
                contact.profile_image = Some(image_filename.to_string());
                WriteOutcome::Applied
            }
            None => WriteOutcome::Unmatched,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> NewContact {
        NewContact::new(7, "Jane", "Doe").with_phone_number("555-1234")
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let repo = InMemoryRepository::new();

        let id = repo.create_contact(&jane()).await.unwrap();

        assert_eq!(
            repo.get_contacts_for_user(7).await.unwrap(),
            vec![Contact::from_new(id, jane())]
        );
        assert!(repo.get_contacts_for_user(8).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_keeps_owner_and_image() {
        let repo = InMemoryRepository::new();
        let id = repo.create_contact(&jane()).await.unwrap();
        repo.save_profile_image("jane.png", id).await.unwrap();

        let mut contact = repo.get_contact(id).await.unwrap().unwrap();
        contact.zip = "10001".to_string();
        contact.user_id = 8;
        contact.profile_image = None;
        assert_eq!(
            repo.update_contact(&contact).await.unwrap(),
            WriteOutcome::Applied
        );

        let stored = repo.get_contact(id).await.unwrap().unwrap();
        assert_eq!(stored.zip, "10001");
        assert_eq!(stored.user_id, 7);
        assert_eq!(stored.profile_image.as_deref(), Some("jane.png"));
    }

    #[tokio::test]
    async fn test_writes_to_unknown_id_are_unmatched() {
        let repo = InMemoryRepository::new();

        assert_eq!(
            repo.update_contact(&Contact::from_new(9, jane()))
                .await
                .unwrap(),
            WriteOutcome::Unmatched
        );
        assert_eq!(repo.delete_contact(9).await.unwrap(), WriteOutcome::Unmatched);
        assert_eq!(
            repo.save_profile_image("x.png", 9).await.unwrap(),
            WriteOutcome::Unmatched
        );
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryRepository::new();
        let id = repo.create_contact(&jane()).await.unwrap();

        assert_eq!(repo.delete_contact(id).await.unwrap(), WriteOutcome::Applied);
        assert!(repo.get_contacts_for_user(7).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_scenario() {
        let repo = InMemoryRepository::new();
        let id = repo.create_contact(&jane()).await.unwrap();

        assert_eq!(
            repo.search_contacts(7, "doe").await.unwrap(),
            vec![Contact::from_new(id, jane())]
        );
        assert!(repo.search_contacts(8, "doe").await.unwrap().is_empty());
        assert_eq!(repo.search_contacts(7, "jane doe").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_search_folds_non_ascii_case() {
        let repo = InMemoryRepository::new();
        let id = repo
            .create_contact(&NewContact::new(7, "Émile", "Ørsted"))
            .await
            .unwrap();

        let found = repo.search_contacts(7, "émile").await.unwrap();
        assert_eq!(found.iter().map(|c| c.id).collect::<Vec<_>>(), vec![id]);
        assert_eq!(repo.search_contacts(7, "ØRSTED").await.unwrap().len(), 1);
    }
}
