//! Hotel booking GraphQL API.
//!
//! Hexagonal layout: [`domain`] holds records, ports, and services;
//! [`outbound`] implements the driven ports (memory, PostgreSQL, bcrypt,
//! JWT); [`inbound`] exposes the driving ports over GraphQL on Actix.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod seeding;
pub mod settings;

pub use domain::TraceId;
pub use middleware::Trace;
