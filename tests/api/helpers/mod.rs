mod http;

use letterpress::configuration::{self, ServiceModeConfig};
use letterpress::startup::Application;
use letterpress::telemetry;
use std::sync::OnceLock;

#[derive(Debug)]
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
}

static TRACING: OnceLock<()> = OnceLock::new();

pub fn init_tracing() {
    TRACING.get_or_init(|| {
        let default_filter_level = "info".to_string();
        let subscriber_name = "test".to_string();

        if std::env::var("TEST_LOG").is_ok() {
            let subscriber = telemetry::get_subscriber(
                subscriber_name,
                default_filter_level,
                std::io::stdout,
            );
            telemetry::init_subscriber(subscriber).expect("Failed to init tracing");
        } else {
            let subscriber = telemetry::get_subscriber(
                subscriber_name,
                default_filter_level,
                std::io::sink,
            );
            telemetry::init_subscriber(subscriber).expect("Failed to init tracing");
        };
    });
}

/// Boots the application in standalone mode on a random port.
pub async fn spawn_app() -> TestApp {
    init_tracing();

    let configuration = {
        let mut c = configuration::get_config().expect("Failed to read configuration.");
        c.application.port = 0;
        c.application.host = "127.0.0.1".to_string();
        c.application.mode = ServiceModeConfig::Standalone;
        c
    };

    let application = Application::build(configuration)
        .await
        .expect("Failed to build application.");
    let application_port = application.port();
    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address: format!("http://127.0.0.1:{}", application_port),
        port: application_port,
        api_client: reqwest::Client::new(),
    }
}
