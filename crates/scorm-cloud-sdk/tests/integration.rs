//! Integration tests for scorm-cloud-sdk using mockito

use scorm_cloud_sdk::{
    Courses, LaunchLinkRequest, Learner, RegistrationRequest, Registrations,
};
use scorm_http_client::{ClientConfig, ScormClient};
use serde_json::json;

fn client_for(server: &mockito::ServerGuard) -> ScormClient {
    let config = ClientConfig::builder()
        .base_path(server.url())
        .username("appId")
        .password("secret")
        .auth_types(["basic"])
        .build();

    ScormClient::new(config)
}

#[tokio::test]
async fn test_get_courses_decodes_list() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/courses")
        .match_header("authorization", "Basic YXBwSWQ6c2VjcmV0")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {"id": "c-1", "title": "Golf 101", "registrationCount": 3},
                {"id": "c-2", "title": "Golf 201"}
            ]"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let courses = Courses::new(&client)
        .get_courses()
        .await
        .expect("listing succeeds");

    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0].id, "c-1");
    assert_eq!(courses[0].registration_count, Some(3));
    assert_eq!(courses[1].title, "Golf 201");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_register_user_posts_payload_and_accepts_204() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/registrations")
        .match_body(mockito::Matcher::Json(json!({
            "courseId": "c-1",
            "learner": {"id": "l-1", "firstName": "Ada", "lastName": "Lovelace"},
            "registrationId": "r-1"
        })))
        .with_status(204)
        .create_async()
        .await;

    let client = client_for(&server);
    let registration = RegistrationRequest {
        course_id: "c-1".to_string(),
        learner: Learner {
            id: "l-1".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
        },
        registration_id: "r-1".to_string(),
    };

    Registrations::new(&client)
        .register_user(&registration)
        .await
        .expect("registration succeeds");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_launch_link_hits_registration_path() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/registrations/r-1/launchLink")
        .match_body(mockito::Matcher::Json(json!({
            "expiry": 120,
            "redirectOnExitUrl": "https://example.com/done"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"launchLink": "https://cloud.scorm.com/launch/r-1"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let request = LaunchLinkRequest {
        expiry: 120,
        redirect_on_exit_url: "https://example.com/done".to_string(),
        tracking: None,
        start_sco: None,
        additional_values: None,
    };

    let link = Registrations::new(&client)
        .get_launch_link("r-1", &request)
        .await
        .expect("launch link resolves");

    assert_eq!(link.launch_link, "https://cloud.scorm.com/launch/r-1");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_launch_link_empty_body_is_payload_error() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/registrations/r-1/launchLink")
        .with_status(204)
        .create_async()
        .await;

    let client = client_for(&server);
    let request = LaunchLinkRequest {
        expiry: 120,
        redirect_on_exit_url: "https://example.com/done".to_string(),
        tracking: None,
        start_sco: None,
        additional_values: None,
    };

    let err = Registrations::new(&client)
        .get_launch_link("r-1", &request)
        .await
        .expect_err("empty body cannot decode");
    assert!(err.to_string().contains("no body"));

    mock.assert_async().await;
}
