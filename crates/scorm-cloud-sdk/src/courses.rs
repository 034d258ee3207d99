//! Course endpoints

use scorm_http_client::ScormClient;

use crate::error::Result;
use crate::types::Course;

/// Thin wrapper over the course endpoints
#[derive(Debug)]
pub struct Courses<'a> {
    client: &'a ScormClient,
}

impl<'a> Courses<'a> {
    /// Wrapper bound to an existing client
    pub fn new(client: &'a ScormClient) -> Self {
        Self { client }
    }

    /// List all courses
    pub async fn get_courses(&self) -> Result<Vec<Course>> {
        tracing::debug!("listing courses");
        let envelope = self.client.get_request("/courses").await?;
        let courses = envelope.decode::<Vec<Course>>()?;

        Ok(courses.unwrap_or_default())
    }
}
