//! Registration and launch-link endpoints

use scorm_http_client::ScormClient;

use crate::error::{Error, Result};
use crate::types::{LaunchLink, LaunchLinkRequest, RegistrationRequest};

/// Thin wrapper over the registration endpoints
#[derive(Debug)]
pub struct Registrations<'a> {
    client: &'a ScormClient,
}

impl<'a> Registrations<'a> {
    /// Wrapper bound to an existing client
    pub fn new(client: &'a ScormClient) -> Self {
        Self { client }
    }

    /// Register a learner against a course.
    ///
    /// The platform replies 204 on success, so the resolved envelope is
    /// empty.
    pub async fn register_user(&self, registration: &RegistrationRequest) -> Result<()> {
        tracing::debug!(
            course_id = %registration.course_id,
            registration_id = %registration.registration_id,
            "registering learner"
        );
        self.client
            .post_request("/registrations", registration)
            .await?;

        Ok(())
    }

    /// Build a launch link for an existing registration
    pub async fn get_launch_link(
        &self,
        registration_id: &str,
        launch_details: &LaunchLinkRequest,
    ) -> Result<LaunchLink> {
        tracing::debug!(registration_id, "building launch link");
        let path = format!("/registrations/{}/launchLink", registration_id);
        let envelope = self.client.post_request(&path, launch_details).await?;

        envelope
            .decode::<LaunchLink>()?
            .ok_or_else(|| Error::Payload("launch link response had no body".to_string()))
    }
}
