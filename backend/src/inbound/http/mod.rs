//! HTTP transport for the GraphQL schema and the health probes.
//!
//! Handlers expect `web::Data<HotelSchema>` and `web::Data<HealthState>` in
//! app data.

use actix_web::web;

pub mod graphql;
pub mod health;

/// Register every HTTP route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    graphql::configure(cfg);
    cfg.service(health::ready).service(health::live);
}
