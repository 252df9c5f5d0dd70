use std::time::Duration;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{middleware, App};
use miette::{Context, IntoDiagnostic};
use skillet_configuration::{Configuration, DatabaseConfiguration};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::state::ApplicationState;

pub mod api;
pub mod cli;
pub mod logging;
pub mod state;


pub async fn establish_database_connection_pool(
    database_configuration: &DatabaseConfiguration,
) -> Result<SqlitePool, sqlx::Error> {
    let connection_options = SqliteConnectOptions::new()
        .filename(&database_configuration.file_path)
        .create_if_missing(database_configuration.create_if_missing)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true);


    SqlitePoolOptions::new()
        .idle_timeout(Some(Duration::from_secs(60 * 20)))
        .max_lifetime(Some(Duration::from_secs(60 * 60)))
        .min_connections(1)
        .max_connections(database_configuration.maximum_connections)
        .test_before_acquire(true)
        .connect_with(connection_options)
        .await
}


/// Connects to the SQLite database the configuration points at
/// and applies any pending migrations.
pub async fn connect_and_set_up_database(
    configuration: &Configuration,
) -> miette::Result<SqlitePool> {
    let database_pool = establish_database_connection_pool(&configuration.database)
        .await
        .into_diagnostic()
        .wrap_err("Failed to establish database connection pool.")?;

    skillet_database::MIGRATOR
        .run(&database_pool)
        .await
        .into_diagnostic()
        .wrap_err("Failed to apply pending database migrations.")?;

    info!(
        database_file_path = %configuration.database.file_path.display(),
        "Database connected and fully migrated."
    );

    Ok(database_pool)
}


/// Constructs the actix application: all routers plus the shared
/// application state.
///
/// Outer middleware that doesn't affect routing semantics (CORS,
/// request tracing) is applied by the server binary on top of this;
/// everything else, including path normalization, lives here so that
/// in-process tests exercise the exact routing the server runs with.
///
/// # Development note
/// [`NormalizePath::trim`][middleware::NormalizePath] means a request
/// for e.g. `GET /recipes/5` OR `GET /recipes/5/` reaches the correct
/// endpoint both times.
pub fn create_application(
    state: ApplicationState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(middleware::NormalizePath::trim())
        .app_data(state)
        .service(api::endpoints::health::health_router())
        .service(api::endpoints::recipes::recipes_router())
        .service(api::openapi::api_docs_router())
        .service(api::endpoints::home::get_home_page)
}
