use crate::routes::{
    delete_newsletter, duplicate_newsletter, get_mode, get_statuses, list_newsletters,
    save_newsletter, search_newsletters,
};
use actix_web::web;

pub fn newsletter_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_newsletters))
        .route("", web::post().to(save_newsletter))
        .route("/search", web::get().to(search_newsletters))
        .route("/statuses", web::get().to(get_statuses))
        .route("/mode", web::get().to(get_mode))
        .route("/{id}", web::delete().to(delete_newsletter))
        .route("/{id}/duplicate", web::post().to(duplicate_newsletter));
}
