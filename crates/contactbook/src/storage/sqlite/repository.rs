//! SQLite repository implementation.
//!
//! Implements [`ContactRepository`] from `contactbook_core::storage` using SQLite.

use async_trait::async_trait;
use rusqlite::functions::FunctionFlags;
use tokio_rusqlite::Connection;

use contactbook_core::contact::{keyword_pattern, Contact, NewContact};
use contactbook_core::storage::{ContactRepository, RepositoryError, Result, WriteOutcome};

use super::conversions::row_to_contact;
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

const ENTITY: &str = "Contact";

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Registers `casefold(text)`, which lowercases with Unicode rules and passes
/// NULL through.
fn register_functions(conn: &rusqlite::Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        schema::CASEFOLD_FN,
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let text: Option<String> = ctx.get(0)?;
            Ok(text.map(|t| t.to_lowercase()))
        },
    )
}

/// SQLite-based contact store.
///
/// Wraps a single connection. No statement spans more than one call, so
/// concurrent writers to the same row resolve as last-writer-wins.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;
        tracing::debug!(path, "Opened SQLite contact store");

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema and register the search functions.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            register_functions(conn).map_err(wrap_err)?;
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    /// Runs a single-row write and reports whether a row was touched.
    async fn execute_write<P>(&self, sql: &'static str, params: P, id: i64) -> Result<WriteOutcome>
    where
        P: rusqlite::Params + Send + 'static,
    {
        let rows = self
            .conn
            .call(move |conn| conn.execute(sql, params).map_err(wrap_err))
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, ENTITY, id.to_string()))?;

        Ok(WriteOutcome::from_rows_affected(rows))
    }
}

#[async_trait]
impl ContactRepository for SqliteRepository {
    async fn get_contact(&self, id: i64) -> Result<Option<Contact>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_CONTACT_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id], row_to_contact) {
                    Ok(contact) => Ok(Some(contact)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, ENTITY, id.to_string()))
    }

    async fn get_contacts_for_user(&self, user_id: i64) -> Result<Vec<Contact>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_CONTACTS_BY_USER)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map([user_id], row_to_contact)
                    .map_err(wrap_err)?;

                let mut contacts = Vec::new();
                for row_result in rows {
                    contacts.push(row_result.map_err(wrap_err)?);
                }
                Ok(contacts)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY))
    }

    async fn create_contact(&self, contact: &NewContact) -> Result<i64> {
        let contact = contact.clone();

        let (rows, id) = self
            .conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::INSERT_CONTACT,
                        rusqlite::params![
                            contact.first_name,
                            contact.last_name,
                            contact.phone_number,
                            contact.address,
                            contact.city,
                            contact.state,
                            contact.zip,
                            contact.user_id
                        ],
                    )
                    .map_err(wrap_err)?;
                Ok((rows, conn.last_insert_rowid()))
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY))?;

        if rows == 0 {
            return Err(RepositoryError::NoRowsAffected {
                entity_type: ENTITY,
            });
        }

        Ok(id)
    }

    async fn update_contact(&self, contact: &Contact) -> Result<WriteOutcome> {
        let c = contact.clone();

        self.execute_write(
            schema::UPDATE_CONTACT,
            (
                c.first_name,
                c.last_name,
                c.phone_number,
                c.address,
                c.city,
                c.state,
                c.zip,
                c.id,
            ),
            contact.id,
        )
        .await
    }

    async fn delete_contact(&self, id: i64) -> Result<WriteOutcome> {
        self.execute_write(schema::DELETE_CONTACT, [id], id).await
    }

    async fn search_contacts(&self, user_id: i64, keyword: &str) -> Result<Vec<Contact>> {
        let pattern = keyword_pattern(keyword);

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SEARCH_CONTACTS).map_err(wrap_err)?;
                let rows = stmt
                    .query_map(rusqlite::params![user_id, pattern], row_to_contact)
                    .map_err(wrap_err)?;

                let mut contacts = Vec::new();
                for row_result in rows {
                    contacts.push(row_result.map_err(wrap_err)?);
                }
                Ok(contacts)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY))
    }

    async fn save_profile_image(&self, image_filename: &str, id: i64) -> Result<WriteOutcome> {
        self.execute_write(
            schema::UPDATE_PROFILE_IMAGE,
            (image_filename.to_string(), id),
            id,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contactbook_core::contact::escape_like;

    async fn repo() -> SqliteRepository {
        SqliteRepository::new_in_memory().await.unwrap()
    }

    fn jane() -> NewContact {
        NewContact::new(7, "Jane", "Doe").with_phone_number("555-1234")
    }

    #[tokio::test]
    async fn test_create_then_list_includes_contact() {
        let repo = repo().await;

        let id = repo.create_contact(&jane()).await.unwrap();
        let contacts = repo.get_contacts_for_user(7).await.unwrap();

        assert_eq!(contacts, vec![Contact::from_new(id, jane())]);
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = repo().await;

        let first = repo.create_contact(&jane()).await.unwrap();
        let second = repo
            .create_contact(&NewContact::new(7, "John", "Smith"))
            .await
            .unwrap();

        assert!(second > first);
    }

    #[tokio::test]
    async fn test_list_for_user_without_contacts_is_empty() {
        let repo = repo().await;
        repo.create_contact(&jane()).await.unwrap();

        assert!(repo.get_contacts_for_user(8).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_contact() {
        let repo = repo().await;
        let id = repo.create_contact(&jane()).await.unwrap();

        let contact = repo.get_contact(id).await.unwrap().unwrap();
        assert_eq!(contact.first_name, "Jane");

        assert_eq!(repo.get_contact(id + 100).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_changes_fields_but_not_owner_or_image() {
        let repo = repo().await;
        let id = repo.create_contact(&jane()).await.unwrap();
        repo.save_profile_image("jane.png", id).await.unwrap();

        let mut contact = repo.get_contact(id).await.unwrap().unwrap();
        contact.last_name = "Smith".to_string();
        contact.city = "Chicago".to_string();
        contact.user_id = 99;
        contact.profile_image = None;

        let outcome = repo.update_contact(&contact).await.unwrap();
        assert_eq!(outcome, WriteOutcome::Applied);

        let stored = repo.get_contact(id).await.unwrap().unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.user_id, 7);
        assert_eq!(stored.first_name, "Jane");
        assert_eq!(stored.last_name, "Smith");
        assert_eq!(stored.city, "Chicago");
        assert_eq!(stored.phone_number, "555-1234");
        assert_eq!(stored.profile_image.as_deref(), Some("jane.png"));
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_unmatched() {
        let repo = repo().await;
        let contact = Contact::from_new(404, jane());

        let outcome = repo.update_contact(&contact).await.unwrap();

        assert_eq!(outcome, WriteOutcome::Unmatched);
        assert!(repo.get_contacts_for_user(7).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_removes_contact() {
        let repo = repo().await;
        let keep = repo
            .create_contact(&NewContact::new(7, "John", "Smith"))
            .await
            .unwrap();
        let id = repo.create_contact(&jane()).await.unwrap();

        assert_eq!(repo.delete_contact(id).await.unwrap(), WriteOutcome::Applied);

        let ids: Vec<i64> = repo
            .get_contacts_for_user(7)
            .await
            .unwrap()
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![keep]);

        assert_eq!(
            repo.delete_contact(id).await.unwrap(),
            WriteOutcome::Unmatched
        );
    }

    #[tokio::test]
    async fn test_search_scenario() {
        let repo = repo().await;
        let id = repo.create_contact(&jane()).await.unwrap();

        let found = repo.search_contacts(7, "doe").await.unwrap();
        assert_eq!(found, vec![Contact::from_new(id, jane())]);

        assert!(repo.search_contacts(8, "doe").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_matches_every_field_and_full_name() {
        let repo = repo().await;
        repo.create_contact(
            &NewContact::new(7, "Jane", "Doe")
                .with_phone_number("555-1234")
                .with_address("1 Main St", "Springfield", "IL", "62701"),
        )
        .await
        .unwrap();

        for keyword in ["JANE", "doe", "5-12", "main", "SPRING", "il", "627", "jane doe"] {
            let found = repo.search_contacts(7, keyword).await.unwrap();
            assert_eq!(found.len(), 1, "expected a match for {keyword}");
        }
        assert!(repo.search_contacts(7, "doe jane").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_returns_all_and_only_matches() {
        let repo = repo().await;
        let a = repo
            .create_contact(&NewContact::new(7, "Anna", "Smith"))
            .await
            .unwrap();
        repo.create_contact(&NewContact::new(7, "Bob", "Jones"))
            .await
            .unwrap();
        let c = repo
            .create_contact(&NewContact::new(7, "Carl", "Brown").with_address(
                "12 Smithfield Rd",
                "Leeds",
                "",
                "",
            ))
            .await
            .unwrap();
        repo.create_contact(&NewContact::new(8, "Dan", "Smith"))
            .await
            .unwrap();

        let ids: Vec<i64> = repo
            .search_contacts(7, "smith")
            .await
            .unwrap()
            .iter()
            .map(|c| c.id)
            .collect();

        assert_eq!(ids, vec![a, c]);
    }

    #[tokio::test]
    async fn test_search_wildcards_are_not_escaped() {
        let repo = repo().await;
        repo.create_contact(&NewContact::new(7, "Abc", "")).await.unwrap();
        repo.create_contact(&NewContact::new(7, "a_c", "")).await.unwrap();

        assert_eq!(repo.search_contacts(7, "a_c").await.unwrap().len(), 2);
        assert_eq!(
            repo.search_contacts(7, &escape_like("a_c"))
                .await
                .unwrap()
                .len(),
            1
        );
    }

    #[tokio::test]
    async fn test_search_folds_non_ascii_case() {
        let repo = repo().await;
        let id = repo
            .create_contact(&NewContact::new(7, "Émile", "Ørsted"))
            .await
            .unwrap();

        for keyword in ["émile", "ÉMILE", "ørsted", "émile øRSTED"] {
            let ids: Vec<i64> = repo
                .search_contacts(7, keyword)
                .await
                .unwrap()
                .iter()
                .map(|c| c.id)
                .collect();
            assert_eq!(ids, vec![id], "expected a match for {keyword}");
        }
        assert!(repo.search_contacts(7, "emile").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_keyword_is_bound_not_interpolated() {
        let repo = repo().await;
        repo.create_contact(&jane()).await.unwrap();

        let found = repo
            .search_contacts(7, "' OR 1=1; DROP TABLE Contacts; --")
            .await
            .unwrap();

        assert!(found.is_empty());
        assert_eq!(repo.get_contacts_for_user(7).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_profile_image() {
        let repo = repo().await;
        let id = repo.create_contact(&jane()).await.unwrap();

        assert_eq!(
            repo.save_profile_image("jane.png", id).await.unwrap(),
            WriteOutcome::Applied
        );
        assert_eq!(
            repo.get_contact(id).await.unwrap().unwrap().profile_image,
            Some("jane.png".to_string())
        );
        assert_eq!(
            repo.save_profile_image("ghost.png", id + 1).await.unwrap(),
            WriteOutcome::Unmatched
        );
    }

    #[tokio::test]
    async fn test_file_database_persists_between_connections() {
        let path = std::env::temp_dir().join(format!(
            "contactbook-test-{}.db",
            std::process::id()
        ));
        let path_str = path.to_string_lossy().to_string();
        let _ = std::fs::remove_file(&path);

        let id = {
            let repo = SqliteRepository::new(&path_str).await.unwrap();
            repo.create_contact(&jane()).await.unwrap()
        };

        let repo = SqliteRepository::new(&path_str).await.unwrap();
        let contact = repo.get_contact(id).await.unwrap();
        assert_eq!(contact.map(|c| c.first_name), Some("Jane".to_string()));

        drop(repo);
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_missing_table_is_query_failure() {
        let conn = Connection::open_in_memory().await.unwrap();
        let repo = SqliteRepository { conn };

        let result = repo.get_contacts_for_user(7).await;

        assert!(matches!(result, Err(RepositoryError::QueryFailed(_))));
    }
}
