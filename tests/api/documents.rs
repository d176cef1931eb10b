use crate::helpers::spawn_app;
use serde_json::{Value, json};

#[tokio::test]
async fn button_component_is_built_from_color_name() {
    let app = spawn_app().await;

    let response = app
        .build_component(&json!({
            "kind": "button",
            "text": "Shop Now",
            "url": "https://acme.example/sale",
            "color": "Success Green"
        }))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    let html = body["html"].as_str().unwrap();
    assert!(html.contains("background-color: #28a745; color: #ffffff;"));
    assert!(html.contains(r#"href="https://acme.example/sale""#));
}

#[tokio::test]
async fn unknown_component_kind_is_rejected() {
    let app = spawn_app().await;

    let response = app.build_component(&json!({ "kind": "carousel" })).await;
    assert_eq!(response.status().as_u16(), 400);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], 400);
    assert!(body["message"].as_str().unwrap().contains("carousel"));
}

#[tokio::test]
async fn render_returns_a_full_html_document() {
    let app = spawn_app().await;

    let component: Value = app
        .build_component(&json!({ "kind": "text", "text": "Fresh deals inside" }))
        .await
        .json()
        .await
        .unwrap();
    let fragment = component["html"].as_str().unwrap();

    let response = app
        .render_document(&json!({
            "title": "Spring Sale",
            "company": "Acme Co",
            "content": fragment,
            "header_color": { "red": 0.0, "green": 0.667, "blue": 0.267 }
        }))
        .await;
    assert_eq!(response.status().as_u16(), 200);
    assert!(
        response.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );

    let document = response.text().await.unwrap();
    assert!(document.starts_with("<!DOCTYPE html>"));
    assert!(document.contains("<title>Spring Sale</title>"));
    assert!(document.contains("background-color: #00AA44;"));
    assert!(document.contains(&format!(r#"<td class="body-text">{fragment}</td>"#)));
}

#[tokio::test]
async fn render_applies_defaults_for_missing_fields() {
    let app = spawn_app().await;

    let document = app.render_document(&json!({})).await.text().await.unwrap();
    assert!(document.contains("<h1>Newsletter</h1>"));
    assert!(document.contains("Your Company •"));
    assert!(document.contains("background-color: #007BFF;"));
}

#[tokio::test]
async fn render_rejects_malformed_header_color() {
    let app = spawn_app().await;

    for color in [json!("#12"), json!({ "red": 2.0, "green": 0.0, "blue": 0.0 })] {
        let response = app.render_document(&json!({ "header_color": color })).await;
        assert_eq!(response.status().as_u16(), 400, "accepted header color {color}");
    }
}

#[tokio::test]
async fn extract_recovers_content_and_company_from_rendered_document() {
    let app = spawn_app().await;

    let document = app
        .render_document(&json!({
            "company": "Acme Co",
            "content": "<p>Hello subscribers</p>"
        }))
        .await
        .text()
        .await
        .unwrap();

    let body: Value = app
        .send_post("v1/documents/extract", &json!({ "document": document }))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body["content"], "<p>Hello subscribers</p>");
    assert_eq!(body["company_name"], "Acme Co");
}

#[tokio::test]
async fn extract_from_unrendered_template_reports_placeholders() {
    let app = spawn_app().await;

    let body: Value = app
        .send_post(
            "v1/documents/extract",
            &json!({ "document": "<p>{{COMPANY}} • {{DATE}}</p><td class=\"body-text\">{{CONTENT}}</td>" }),
        )
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body["content"], "");
    assert_eq!(body["company_name"], "{{COMPANY}}");
}
