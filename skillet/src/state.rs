//! Application-wide state (shared between endpoint functions).

use actix_web::web::Data;
use skillet_configuration::Configuration;
use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqlitePool};



/// Central application state.
///
/// Use [`ApplicationState`] instead as it already wraps this struct
/// in [`actix_web::web::Data`]!
///
/// If you need mutable state, opt for internal mutability as the struct
/// is internally essentially wrapped in an `Arc` by actix.
/// For more information about mutable state, see
/// <https://actix.rs/docs/application#shared-mutable-state>.
pub struct ApplicationStateInner {
    /// The configuration that this server was loaded with.
    #[allow(unused)]
    pub configuration: Configuration,

    /// SQLite database connection pool.
    pub database_pool: SqlitePool,
}

impl ApplicationStateInner {
    pub fn new(configuration: Configuration, database_pool: SqlitePool) -> Self {
        Self {
            configuration,
            database_pool,
        }
    }

    /// Checks out a single connection from the database pool.
    ///
    /// Waits when the pool is exhausted, failing only once the pool's
    /// acquire timeout is reached.
    #[inline]
    pub async fn acquire_database_connection(
        &self,
    ) -> Result<PoolConnection<Sqlite>, sqlx::Error> {
        self.database_pool.acquire().await
    }
}


/// Central application state, wrapped in an actix [`Data`] wrapper.
///
/// This enables usage in endpoint functions.
/// See <https://actix.rs/docs/application#state> for more information.
///
/// # Examples
/// ```no_run
/// # use actix_web::get;
/// # use skillet::api::errors::EndpointResult;
/// # use skillet::state::ApplicationState;
/// #[get("")]
/// pub async fn some_endpoint(
///     state: ApplicationState,
/// ) -> EndpointResult {
///     // state.database_pool, state.configuration, ...
///     # todo!();
/// }
/// ```
pub type ApplicationState = Data<ApplicationStateInner>;
