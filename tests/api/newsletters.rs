use crate::helpers::spawn_app;
use serde_json::{Value, json};

#[tokio::test]
async fn standalone_listing_returns_the_three_samples_with_statuses() {
    let app = spawn_app().await;

    let response = app.send_get("v1/newsletters").await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    let newsletters = body["newsletters"].as_array().unwrap();
    assert_eq!(newsletters.len(), 3);

    let statuses: Vec<_> = newsletters
        .iter()
        .map(|n| n["status"].as_str().unwrap())
        .collect();
    assert_eq!(statuses, ["DRAFT", "READY", "SENT"]);
}

#[tokio::test]
async fn standalone_search_ignores_term_and_type() {
    let app = spawn_app().await;

    for (term, type_filter) in [("", "Templates"), ("nothing matches", "Newsletters"), ("", "All Items")] {
        let response = app.search_newsletters(term, type_filter).await;
        assert_eq!(response.status().as_u16(), 200);

        let body: Value = response.json().await.unwrap();
        assert_eq!(
            body["newsletters"].as_array().unwrap().len(),
            3,
            "search({term:?}, {type_filter:?}) did not return the samples"
        );
    }
}

#[tokio::test]
async fn saving_a_new_newsletter_returns_201_with_assigned_id() {
    let app = spawn_app().await;

    let payload = json!({
        "name": "Spring Sale",
        "subject": "Everything 20% off",
        "template_type": "promotion",
        "content": "<p>Hello</p>"
    });

    let response = app.save_newsletter(&payload).await;
    assert_eq!(response.status().as_u16(), 201);

    let body: Value = response.json().await.unwrap();
    assert_ne!(body["id"].as_i64().unwrap(), 0);
    assert_eq!(body["name"], "Spring Sale");
    assert_eq!(body["template_type"], "PROMOTION");
    assert_eq!(body["status"], "TEMPLATE");
    assert_eq!(body["active"], true);
    assert!(body["created_at"].is_string());
    assert!(body["updated_at"].is_string());
}

#[tokio::test]
async fn saving_an_existing_newsletter_returns_200() {
    let app = spawn_app().await;

    let payload = json!({
        "id": 2,
        "name": "Monthly Product Update",
        "template_type": "READY"
    });

    let response = app.save_newsletter(&payload).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["id"], 2);
    assert_eq!(body["status"], "READY");
}

#[tokio::test]
async fn save_returns_400_for_invalid_payload() {
    let app = spawn_app().await;

    let invalid_cases = vec![
        (json!({ "template_type": "DRAFT" }), "missing name"),
        (json!({ "name": "", "template_type": "DRAFT" }), "empty name"),
        (json!({ "name": "12345", "template_type": "DRAFT" }), "numeric name"),
        (json!({ "name": "Weekly" }), "missing template type"),
        (json!({ "name": "Weekly", "template_type": "ARCHIVED" }), "unknown template type"),
        (json!({ "id": -4, "name": "Weekly", "template_type": "DRAFT" }), "negative id"),
    ];

    for (invalid_body, desc) in invalid_cases {
        let response = app.save_newsletter(&invalid_body).await;
        assert_eq!(
            400,
            response.status().as_u16(),
            "Did not return 400 when payload was {desc}"
        );

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["code"], 400, "No JSON error body when payload was {desc}");
        assert!(body["message"].is_string());
    }
}

#[tokio::test]
async fn malformed_json_gets_a_json_error_body() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .post(format!("{}/v1/newsletters", app.address))
        .header("Content-Type", "application/json")
        .body("{\"name\": ")
        .send()
        .await
        .expect("POST request failed");
    assert_eq!(response.status().as_u16(), 400);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn resaving_a_sample_keeps_its_creation_time() {
    let app = spawn_app().await;

    let listed: Value = app.send_get("v1/newsletters").await.json().await.unwrap();
    let sample = &listed["newsletters"][1];
    assert_eq!(sample["id"], 2);
    assert_eq!(sample["created_at"], "2024-02-01T09:00:00Z");

    let response = app
        .save_newsletter(&json!({
            "id": 2,
            "name": "Monthly Product Update",
            "subject": "What's new this month",
            "template_type": "READY"
        }))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["created_at"], "2024-02-01T09:00:00Z");
    assert_ne!(body["updated_at"], sample["updated_at"]);
}

#[tokio::test]
async fn standalone_delete_always_succeeds() {
    let app = spawn_app().await;

    let response = app.send_delete("v1/newsletters/1").await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = app.send_get("v1/newsletters").await.json().await.unwrap();
    assert_eq!(body["newsletters"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn duplicate_returns_201_with_new_name() {
    let app = spawn_app().await;

    let response = app
        .send_post("v1/newsletters/3/duplicate", &json!({ "name": "Spring Promotion (copy)" }))
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["name"], "Spring Promotion (copy)");
    assert_eq!(body["template_type"], "NEWSLETTER");
    assert_ne!(body["id"], 3);
}

#[tokio::test]
async fn duplicate_rejects_invalid_name() {
    let app = spawn_app().await;

    let response = app
        .send_post("v1/newsletters/3/duplicate", &json!({ "name": "   " }))
        .await;
    assert_eq!(response.status().as_u16(), 400);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], 400);
    assert!(body["message"].as_str().unwrap().contains("cannot be empty"));
}

#[tokio::test]
async fn statuses_and_mode_are_exposed() {
    let app = spawn_app().await;

    let statuses: Value = app.send_get("v1/newsletters/statuses").await.json().await.unwrap();
    assert_eq!(statuses["statuses"], json!(["DRAFT", "READY", "SENT"]));

    let mode: Value = app.send_get("v1/newsletters/mode").await.json().await.unwrap();
    assert_eq!(mode["connected"], false);
    assert_eq!(mode["mode"], "standalone");
}
