use crate::helpers::spawn_app;
use serde_json::Value;

#[tokio::test]
async fn catalog_lists_five_template_names() {
    let app = spawn_app().await;

    let response = app.send_get("v1/templates").await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["templates"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn known_template_is_returned() {
    let app = spawn_app().await;

    let body: Value = app.send_get("v1/templates/Welcome").await.json().await.unwrap();
    assert_eq!(body["found"], true);
    assert!(body["html"].as_str().unwrap().contains("Welcome aboard"));
}

#[tokio::test]
async fn unknown_template_falls_back_to_default_fragment() {
    let app = spawn_app().await;

    let response = app.send_get("v1/templates/Quarterly%20Report").await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["name"], "Quarterly Report");
    assert_eq!(body["found"], false);
    assert_eq!(body["html"], "<p>Start writing your newsletter content here...</p>");
}
