use crate::configuration::{Configuration, DatabaseConfigs, ServiceModeConfig};
use crate::newsletter_service::NewsletterService;
use crate::repository::PgNewsletterStore;
use crate::routes::{
    document_routes, health_check, json_error_handler, newsletter_routes, query_error_handler,
    template_routes,
};
use crate::templating::TemplateCatalog;
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub type AppNewsletterService = NewsletterService<PgNewsletterStore>;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(config: Configuration) -> Result<Self, anyhow::Error> {
        let service = match config.application.mode {
            ServiceModeConfig::Connected => {
                let connection_pool = get_connection_pool(&config.database);
                sqlx::migrate!("./migrations")
                    .run(&connection_pool)
                    .await
                    .context("Failed to migrate the database")?;
                NewsletterService::connected(PgNewsletterStore::new(connection_pool))
            }
            ServiceModeConfig::Standalone => {
                tracing::warn!("No database configured; serving sample newsletters");
                NewsletterService::standalone()
            }
        };

        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener = TcpListener::bind(address)
            .with_context(|| "Failed to bind TCP listener for application")?;
        let port = listener
            .local_addr()
            .with_context(|| "Failed to read local address of TCP listener")?
            .port();
        let server = run(listener, service, TemplateCatalog::new())
            .context("Failed to run Actix web server")?;

        tracing::info!(port, mode = ?config.application.mode, "Application built");
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), anyhow::Error> {
        self.server.await.context("Server stopped with an error")
    }
}

pub fn get_connection_pool(config: &DatabaseConfigs) -> PgPool {
    PgPoolOptions::new().connect_lazy_with(config.connect_options())
}

fn run(
    tcp_listener: TcpListener,
    service: AppNewsletterService,
    catalog: TemplateCatalog,
) -> Result<Server, anyhow::Error> {
    let service = web::Data::new(service);
    let catalog = web::Data::new(catalog);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .configure(configure_routes)
            .app_data(service.clone())
            .app_data(catalog.clone())
    })
    .listen(tcp_listener)
    .with_context(|| "Failed to bind Actix server to TCP listener")?
    .run();

    Ok(server)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health_check", web::get().to(health_check))
        .service(
            web::scope("/v1")
                .service(web::scope("/newsletters").configure(newsletter_routes))
                .service(web::scope("/templates").configure(template_routes))
                .service(web::scope("/documents").configure(document_routes)),
        );
}
