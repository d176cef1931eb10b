use crate::routes::{build_component, extract_parts, get_template, list_templates, render_html};
use actix_web::web;

pub fn template_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_templates))
        .route("/{name}", web::get().to(get_template));
}

pub fn document_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/components", web::post().to(build_component))
        .route("/render", web::post().to(render_html))
        .route("/extract", web::post().to(extract_parts));
}
