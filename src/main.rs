use letterpress::configuration::get_config;
use letterpress::startup::Application;
use letterpress::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = get_config()?;

    let subscriber = get_subscriber(
        "letterpress".into(),
        config.application.log_level.clone(),
        std::io::stdout,
    );
    init_subscriber(subscriber)?;

    let application = Application::build(config).await?;
    application.run_until_stopped().await
}
