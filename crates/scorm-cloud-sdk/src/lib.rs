//! SCORM Cloud REST API client SDK
//!
//! Thin, typed wrappers over the [`scorm_http_client`] request pipeline:
//! course listing, learner registration and launch-link retrieval. All
//! request construction, authentication and response normalization lives in
//! the HTTP layer; this crate only names endpoints and decodes payloads.
//!
//! # Example
//!
//! ```no_run
//! use scorm_cloud_sdk::{Courses, Result};
//! use scorm_http_client::{ClientConfig, ScormClient};
//!
//! async fn example() -> Result<()> {
//!     let config = ClientConfig::builder()
//!         .base_path("https://cloud.scorm.com/api/v2")
//!         .username("appId")
//!         .password("secret")
//!         .auth_types(["basic"])
//!         .build();
//!     let client = ScormClient::new(config);
//!
//!     for course in Courses::new(&client).get_courses().await? {
//!         println!("{}: {}", course.id, course.title);
//!     }
//!     Ok(())
//! }
//! ```

mod courses;
mod error;
mod registrations;
mod types;

pub use courses::Courses;
pub use error::{Error, Result};
pub use registrations::Registrations;
pub use types::{
    AdditionalValue, Course, CourseActivity, CourseMetadata, LaunchLink, LaunchLinkRequest,
    Learner, RegistrationRequest,
};
