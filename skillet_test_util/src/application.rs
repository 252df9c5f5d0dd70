use std::path::PathBuf;
use std::str::FromStr;

use actix_http::{
    header::{HeaderName, HeaderValue},
    Method,
};
use actix_web::{test, web};
use skillet::create_application;
use skillet::state::{ApplicationState, ApplicationStateInner};
use skillet_configuration::{
    BasePathsConfiguration,
    Configuration,
    DatabaseConfiguration,
    HttpConfiguration,
    LoggingConfiguration,
};
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool};

use crate::TestResponse;


/// A full in-process instance of the backend: real routing, real
/// middleware, real state, backed by a fresh in-memory SQLite database.
///
/// Obtain one with [`prepare_test_application`], insert sample data
/// through the `sample_*` modules, then drive it with [`Self::request`].
pub struct TestApplication {
    state: ApplicationState,

    database_pool: SqlitePool,
}

impl TestApplication {
    pub async fn acquire_database_connection(&self) -> PoolConnection<Sqlite> {
        self.database_pool
            .acquire()
            .await
            .expect("failed to acquire database connection")
    }

    pub fn request<U>(&self, method: Method, endpoint: U) -> TestRequestBuilder<'_>
    where
        U: AsRef<str>,
    {
        TestRequestBuilder {
            application: self,
            method,
            endpoint: endpoint.as_ref().to_string(),
            headers: Vec::new(),
        }
    }
}


pub struct TestRequestBuilder<'a> {
    application: &'a TestApplication,

    method: Method,

    endpoint: String,

    headers: Vec<(HeaderName, HeaderValue)>,
}

impl TestRequestBuilder<'_> {
    pub fn with_header<N, V>(mut self, header_name: N, header_value: V) -> Self
    where
        N: Into<HeaderName>,
        V: Into<HeaderValue>,
    {
        self.headers.push((header_name.into(), header_value.into()));
        self
    }

    pub async fn send(self) -> TestResponse {
        let service =
            test::init_service(create_application(self.application.state.clone())).await;

        let mut test_request = test::TestRequest::with_uri(&self.endpoint).method(self.method);

        for (header_name, header_value) in self.headers {
            test_request = test_request.insert_header((header_name, header_value));
        }

        let service_response = test::call_service(&service, test_request.to_request()).await;

        TestResponse::from_service_response(service_response).await
    }
}


fn test_configuration() -> Configuration {
    Configuration {
        configuration_file_path: PathBuf::from(":in-memory:"),
        base_paths: BasePathsConfiguration {
            base_data_directory_path: PathBuf::from("./data"),
        },
        logging: LoggingConfiguration {
            console_output_level_filter: "info".to_string(),
            log_file_output_level_filter: "info".to_string(),
            log_file_output_directory: PathBuf::from("./data/logs"),
        },
        http: HttpConfiguration {
            host: "127.0.0.1".to_string(),
            port: 8866,
        },
        database: DatabaseConfiguration {
            file_path: PathBuf::from(":memory:"),
            maximum_connections: 1,
            create_if_missing: true,
        },
    }
}


async fn prepare_in_memory_database() -> SqlitePool {
    let connection_options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("failed to parse in-memory SQLite URL")
        .foreign_keys(true);

    // A single never-recycled connection: in-memory SQLite databases
    // live and die with their connection.
    let database_pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(connection_options)
        .await
        .expect("failed to create in-memory SQLite pool");

    skillet_database::MIGRATOR
        .run(&database_pool)
        .await
        .expect("failed to apply database migrations");

    database_pool
}


/// Sets up a [`TestApplication`] on top of a freshly migrated
/// in-memory database.
pub async fn prepare_test_application() -> TestApplication {
    let database_pool = prepare_in_memory_database().await;

    let state = web::Data::new(ApplicationStateInner::new(
        test_configuration(),
        database_pool.clone(),
    ));

    TestApplication {
        state,
        database_pool,
    }
}
