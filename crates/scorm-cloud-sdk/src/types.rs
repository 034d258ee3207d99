//! Typed models for the SCORM Cloud API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A course known to the platform
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Course identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// xAPI activity identifier
    #[serde(default)]
    pub xapi_activity_id: Option<String>,
    /// Last update timestamp
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
    /// Web path of the course package
    #[serde(default)]
    pub web_path: Option<String>,
    /// Package version
    #[serde(default)]
    pub version: Option<u32>,
    /// Number of registrations against this course
    #[serde(default)]
    pub registration_count: Option<u64>,
    /// Root activity identifier
    #[serde(default)]
    pub activity_id: Option<String>,
    /// Learning standard of the package (SCORM 1.2, 2004, AICC, xAPI)
    #[serde(default)]
    pub course_learning_standard: Option<String>,
    /// Package metadata
    #[serde(default)]
    pub metadata: Option<CourseMetadata>,
    /// Root of the activity tree
    #[serde(default)]
    pub root_activity: Option<CourseActivity>,
}

/// Metadata embedded in a course package
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CourseMetadata {
    /// Package title
    #[serde(default)]
    pub title: Option<String>,
    /// Language of the title
    #[serde(default)]
    pub title_language: Option<String>,
    /// Package description
    #[serde(default)]
    pub description: Option<String>,
    /// Language of the description
    #[serde(default)]
    pub description_language: Option<String>,
    /// Declared duration
    #[serde(default)]
    pub duration: Option<String>,
    /// Typical time to complete
    #[serde(default)]
    pub typical_time: Option<String>,
    /// Keywords attached to the package
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// A node in a course's activity tree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CourseActivity {
    /// Identifier assigned by the platform
    #[serde(default)]
    pub external_identifier: Option<String>,
    /// Item identifier from the manifest
    #[serde(default)]
    pub item_identifier: Option<String>,
    /// Resource identifier from the manifest
    #[serde(default)]
    pub resource_identifier: Option<String>,
    /// Activity type
    #[serde(default)]
    pub activity_type: Option<String>,
    /// Launch href
    #[serde(default)]
    pub href: Option<String>,
    /// Scaled passing score, if declared
    #[serde(default)]
    pub scaled_passing_score: Option<String>,
    /// Activity title
    #[serde(default)]
    pub title: Option<String>,
    /// Child activities
    #[serde(default)]
    pub children: Vec<CourseActivity>,
}

/// A learner attached to a registration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Learner {
    /// Learner identifier
    pub id: String,
    /// First name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Request payload for registering a learner against a course
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    /// Course to register against
    pub course_id: String,
    /// Learner being registered
    pub learner: Learner,
    /// Identifier for the new registration
    pub registration_id: String,
}

/// An `(item, value)` pair forwarded to the launched course
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdditionalValue {
    /// Item name
    pub item: String,
    /// Item value
    pub value: String,
}

/// Request payload for building a launch link
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LaunchLinkRequest {
    /// Link expiry in seconds
    pub expiry: u64,
    /// Where the player redirects when the learner exits
    pub redirect_on_exit_url: String,
    /// Whether the launch is tracked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking: Option<bool>,
    /// SCO to start at, when not the default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_sco: Option<String>,
    /// Extra values forwarded to the course
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_values: Option<Vec<AdditionalValue>>,
}

/// A launch link resolved for a registration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LaunchLink {
    /// URL to launch the registration
    pub launch_link: String,
}
