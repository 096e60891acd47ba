//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use hotel_api::domain::ports::{PasswordHasher, TokenIssuer};
use hotel_api::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) hasher: Arc<dyn PasswordHasher>,
    pub(crate) tokens: Arc<dyn TokenIssuer>,
}

impl ServerConfig {
    /// Configuration binding `bind_addr` with an in-memory store.
    #[must_use]
    pub fn new(
        bind_addr: SocketAddr,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            hasher,
            tokens,
        }
    }

    /// Persist through PostgreSQL instead of memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
