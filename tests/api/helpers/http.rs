use crate::helpers::TestApp;
use reqwest::Response;
use serde_json::Value;

impl TestApp {
    pub async fn send_get(&self, endpoint: &str) -> Response {
        self.api_client
            .get(format!("{}/{}", self.address, endpoint))
            .send()
            .await
            .expect("GET request failed")
    }

    pub async fn send_get_with_query(&self, endpoint: &str, query: &[(&str, &str)]) -> Response {
        self.api_client
            .get(format!("{}/{}", self.address, endpoint))
            .query(query)
            .send()
            .await
            .expect("GET request with query failed")
    }

    pub async fn send_post(&self, endpoint: &str, payload: &Value) -> Response {
        self.api_client
            .post(format!("{}/{}", self.address, endpoint))
            .json(payload)
            .send()
            .await
            .expect("POST request failed")
    }

    pub async fn send_delete(&self, endpoint: &str) -> Response {
        self.api_client
            .delete(format!("{}/{}", &self.address, endpoint))
            .send()
            .await
            .expect("Failed to execute DELETE request.")
    }

    pub async fn save_newsletter(&self, payload: &Value) -> Response {
        self.send_post("v1/newsletters", payload).await
    }

    pub async fn search_newsletters(&self, term: &str, type_filter: &str) -> Response {
        self.send_get_with_query("v1/newsletters/search", &[("term", term), ("type", type_filter)])
            .await
    }

    pub async fn render_document(&self, payload: &Value) -> Response {
        self.send_post("v1/documents/render", payload).await
    }

    pub async fn build_component(&self, payload: &Value) -> Response {
        self.send_post("v1/documents/components", payload).await
    }
}
