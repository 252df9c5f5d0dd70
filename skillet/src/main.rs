use actix_cors::Cors;
use actix_web::{web, HttpServer};
use clap::Parser;
use miette::{Context, IntoDiagnostic, Result};
use skillet::cli::CLIArgs;
use skillet::logging::initialize_tracing;
use skillet::state::ApplicationStateInner;
use skillet::{connect_and_set_up_database, create_application};
use skillet_configuration::Configuration;
use tracing::info;
use tracing_actix_web::TracingLogger;


#[tokio::main]
async fn main() -> Result<()> {
    let arguments = CLIArgs::parse();

    let configuration = match arguments.configuration_file_path.as_ref() {
        Some(path) => {
            println!("Loading configuration: {}.", path.display());
            Configuration::load_from_path(path)
        }
        None => {
            println!("Loading configuration at default path.");
            Configuration::load_from_default_path()
        }
    }
    .into_diagnostic()
    .wrap_err("Failed to load configuration file.")?;


    configuration
        .base_paths
        .create_base_data_directory_if_missing()
        .into_diagnostic()
        .wrap_err("Failed to create the base data directory.")?;

    configuration
        .logging
        .create_log_file_output_directory_if_missing()
        .into_diagnostic()
        .wrap_err("Failed to create the log file output directory.")?;

    let logging_guard = initialize_tracing(
        configuration.logging.console_output_level_filter(),
        configuration.logging.log_file_output_level_filter(),
        &configuration.logging.log_file_output_directory,
        "skillet.log",
    )
    .into_diagnostic()
    .wrap_err("Failed to initialize tracing.")?;

    info!(
        configuration_file_path = %configuration.configuration_file_path.display(),
        "Configuration loaded."
    );


    let database_pool = connect_and_set_up_database(&configuration).await?;

    let state = web::Data::new(ApplicationStateInner::new(
        configuration.clone(),
        database_pool,
    ));


    let server = HttpServer::new(move || {
        // FIXME Restrict allowed origins to the website's domain before this
        //       is deployed anywhere public.
        let cors = Cors::permissive().expose_headers(vec![
            "Date",
            "Content-Type",
            "Last-Modified",
            "Content-Length",
        ]);

        create_application(state.clone())
            .wrap(cors)
            .wrap(TracingLogger::default())
    })
    .bind((
        configuration.http.host.as_str(),
        configuration.http.port as u16,
    ))
    .into_diagnostic()
    .wrap_err("Failed to set up actix HTTP server.")?;

    info!(
        host = %configuration.http.host,
        port = configuration.http.port,
        "HTTP server initialized and running."
    );

    server
        .run()
        .await
        .into_diagnostic()
        .wrap_err("Errored while running actix HTTP server.")?;

    // Flushes any remaining buffered log entries.
    drop(logging_guard);

    Ok(())
}
