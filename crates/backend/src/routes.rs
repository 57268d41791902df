use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// All API routes of the application
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // MASTER DATA
        // ========================================
        .route("/api/master", get(handlers::master_data::list_kinds))
        .route(
            "/api/master/:table",
            get(handlers::master_data::list_all).post(handlers::master_data::create),
        )
        .route(
            "/api/master/:table/active",
            get(handlers::master_data::list_active),
        )
        .route(
            "/api/master/:table/testdata",
            post(handlers::master_data::insert_test_data),
        )
        .route(
            "/api/master/:table/:id",
            get(handlers::master_data::get_by_id)
                .put(handlers::master_data::update)
                .delete(handlers::master_data::delete),
        )
        // ========================================
        // SYSTEM LOG
        // ========================================
        .route(
            "/api/logs",
            get(handlers::logs::list_all).delete(handlers::logs::clear_all),
        )
}
