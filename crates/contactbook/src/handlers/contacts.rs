//! `contactController` handlers.
//!
//! Thin wrappers around the [`ContactRepository`](contactbook_core::storage::ContactRepository)
//! held in [`AppState`]. Failures are rendered by [`AppError`].

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};

use contactbook_core::contact::{
    validate_new_contact, Contact, ContactQuery, NewContact, ProfileImageRequest,
    UpdateContactRequest,
};
use contactbook_core::storage::{RepositoryError, WriteOutcome};

use crate::{handlers::AppError, state::AppState};

/// Turns an extractor rejection into a 400 problem response.
fn bad_request(rejection: impl std::fmt::Display) -> AppError {
    RepositoryError::InvalidData(rejection.to_string()).into()
}

fn not_found(id: i64) -> AppError {
    RepositoryError::NotFound {
        entity_type: "Contact",
        id: id.to_string(),
    }
    .into()
}

fn require_applied(outcome: WriteOutcome, id: i64) -> Result<(), AppError> {
    if outcome.is_applied() {
        Ok(())
    } else {
        Err(not_found(id))
    }
}

/// Create a new contact (POST /contactController).
pub async fn create_contact(
    State(state): State<AppState>,
    payload: Result<Json<NewContact>, JsonRejection>,
) -> Result<(StatusCode, Json<Contact>), AppError> {
    let Json(payload) = payload.map_err(|e| bad_request(e.body_text()))?;
    tracing::debug!(payload = ?payload, "Received create contact request");

    validate_new_contact(&payload).map_err(RepositoryError::from)?;

    let id = state.contact_repo.create_contact(&payload).await?;

    tracing::info!(contact_id = id, user_id = payload.user_id, "Created contact");

    Ok((StatusCode::CREATED, Json(Contact::from_new(id, payload))))
}

/// List or search a user's contacts (GET /contactController?UserID=&search=).
pub async fn list_contacts(
    State(state): State<AppState>,
    query: Result<Query<ContactQuery>, QueryRejection>,
) -> Result<Json<Vec<Contact>>, AppError> {
    let Query(query) = query.map_err(|e| bad_request(e.body_text()))?;

    let contacts = match query.search.as_deref() {
        Some(keyword) => {
            tracing::debug!(user_id = query.user_id, keyword, "Searching contacts");
            state
                .contact_repo
                .search_contacts(query.user_id, keyword)
                .await?
        }
        None => {
            state
                .contact_repo
                .get_contacts_for_user(query.user_id)
                .await?
        }
    };

    Ok(Json(contacts))
}

/// Get a single contact by ID (GET /contactController/{id}).
pub async fn get_contact(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Contact>, AppError> {
    let Path(id) = id.map_err(|e| bad_request(e.body_text()))?;

    state
        .contact_repo
        .get_contact(id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(id))
}

/// Update the supplied fields of a contact (PUT /contactController/{id}).
pub async fn update_contact(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateContactRequest>, JsonRejection>,
) -> Result<Json<Contact>, AppError> {
    let Path(id) = id.map_err(|e| bad_request(e.body_text()))?;
    let Json(payload) = payload.map_err(|e| bad_request(e.body_text()))?;

    let mut contact = state
        .contact_repo
        .get_contact(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    if payload.is_empty() {
        return Ok(Json(contact));
    }

    payload.apply_to(&mut contact);
    let outcome = state.contact_repo.update_contact(&contact).await?;
    // The row can disappear between the read and the write.
    require_applied(outcome, id)?;

    tracing::info!(contact_id = id, "Updated contact");

    Ok(Json(contact))
}

/// Delete a contact by ID (DELETE /contactController/{id}).
pub async fn delete_contact(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id.map_err(|e| bad_request(e.body_text()))?;

    let outcome = state.contact_repo.delete_contact(id).await?;
    require_applied(outcome, id)?;

    tracing::info!(contact_id = id, "Deleted contact");

    Ok(StatusCode::NO_CONTENT)
}

/// Set a contact's profile image (PUT /contactController/{id}/profileImage).
pub async fn save_profile_image(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ProfileImageRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id.map_err(|e| bad_request(e.body_text()))?;
    let Json(payload) = payload.map_err(|e| bad_request(e.body_text()))?;

    if payload.profile_image.trim().is_empty() {
        return Err(bad_request("Missing field: ProfileImage"));
    }

    let outcome = state
        .contact_repo
        .save_profile_image(&payload.profile_image, id)
        .await?;
    require_applied(outcome, id)?;

    tracing::info!(contact_id = id, image = %payload.profile_image, "Saved profile image");

    Ok(StatusCode::NO_CONTENT)
}
