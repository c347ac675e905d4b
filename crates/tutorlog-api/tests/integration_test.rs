// End-to-end tests for the tutorlog API
// Run with: cargo test --test integration_test -- --ignored
//
// Requirements:
// - tutorlog-api running on localhost:8000 against a live database
// - DB_PASSWORD set to the server's configured secret

use serde_json::json;

const API_BASE_URL: &str = "http://localhost:8000";

fn dashboard_password() -> String {
    std::env::var("DB_PASSWORD").expect("DB_PASSWORD required for the login flow")
}

#[tokio::test]
#[ignore] // Run with: cargo test --test integration_test -- --ignored
async fn test_ingest_and_dashboard_round_trip() {
    let client = reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("client");

    // Step 1: health
    let health = client
        .get(format!("{}/health", API_BASE_URL))
        .send()
        .await
        .expect("Failed to reach /health");
    assert_eq!(health.status(), 200);

    // Step 2: ingest one event
    let created = client
        .post(format!("{}/events", API_BASE_URL))
        .json(&json!({
            "event_type": "question_asked",
            "user_email": "a@x.edu",
            "payload": {
                "notebook": "integration-hw1",
                "question": "what is a dataframe?",
                "response": "a table",
                "mode": "chatgpt"
            }
        }))
        .send()
        .await
        .expect("Failed to create event");
    assert_eq!(created.status(), 201);

    let body: serde_json::Value = created.json().await.expect("Failed to parse response");
    assert!(body["id"].as_i64().unwrap() > 0);
    assert!(body["created_at"].is_string());

    // Step 3: unauthenticated dashboard shows the login form
    let anon = client
        .get(format!("{}/dashboard", API_BASE_URL))
        .send()
        .await
        .expect("Failed to reach /dashboard");
    assert_eq!(anon.status(), 200);
    assert!(anon.text().await.unwrap().contains("/dashboard/login"));

    // Step 4: wrong password is rejected
    let rejected = client
        .post(format!("{}/dashboard/login", API_BASE_URL))
        .form(&[("password", "definitely-wrong")])
        .send()
        .await
        .expect("Failed to post login");
    assert_eq!(rejected.status(), 401);

    // Step 5: correct password redirects into the authenticated dashboard
    let dashboard = client
        .post(format!("{}/dashboard/login", API_BASE_URL))
        .form(&[("password", dashboard_password())])
        .send()
        .await
        .expect("Failed to post login");
    assert_eq!(dashboard.status(), 200);
    assert!(dashboard.text().await.unwrap().contains("integration-hw1"));

    // Step 6: detail mode groups the event under its user
    let detail = client
        .get(format!("{}/dashboard?notebook=integration-hw1", API_BASE_URL))
        .send()
        .await
        .expect("Failed to load detail view");
    assert_eq!(detail.status(), 200);
    let html = detail.text().await.unwrap();
    assert!(html.contains("a@x.edu"));
    assert!(html.contains("what is a dataframe?"));
    assert!(html.contains("chatgpt"));
}

#[tokio::test]
#[ignore]
async fn test_validation_failure_is_422() {
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/events", API_BASE_URL))
        .json(&json!({"event_type": ""}))
        .send()
        .await
        .expect("Failed to post event");
    assert_eq!(response.status(), 422);
}
