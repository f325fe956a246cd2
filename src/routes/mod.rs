// Route exports
pub mod error;
pub mod licensing;
pub mod matches;
pub mod planning;

use actix_web::web;

pub use error::{handle_json_payload_error, ApiError};
pub use matches::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(matches::configure)
            .configure(planning::configure)
            .configure(licensing::configure),
    );
}

/// JSON extractor config with structured error bodies
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(4 * 1024 * 1024)
        .error_handler(handle_json_payload_error)
}
