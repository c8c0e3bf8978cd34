//! New-contact form submission.

use reqwest::{header::CONTENT_TYPE, StatusCode};

use super::{read_problem, ContactbookClient};
use crate::error::Result;
use crate::form::ContactForm;
use crate::notification::Notification;

impl ContactbookClient {
    /// Posts the form as a new contact owned by `user_id`.
    ///
    /// A 201 answer yields a success notification. Any other status yields an
    /// error notification carrying the `title` and `detail` the server sent.
    /// `Err` is returned only when the request could not be made or the error
    /// body was not `{title, detail}` JSON. There is no retry and no timeout.
    pub async fn submit_new_contact(
        &self,
        form: &ContactForm,
        user_id: i64,
    ) -> Result<Notification> {
        let payload = serde_json::to_vec(&form.to_new_contact(user_id))?;

        let response = self
            .client
            .post(self.endpoint())
            .header(CONTENT_TYPE, "application/json; charset=UTF-8")
            .body(payload)
            .send()
            .await?;

        if response.status() == StatusCode::CREATED {
            return Ok(Notification::contact_created());
        }

        let problem = read_problem(response).await?;
        Ok(Notification::danger(problem.title, problem.detail))
    }
}
