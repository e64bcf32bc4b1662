use std::process::ExitCode;

use tokio::io::{self, AsyncWriteExt, BufReader};
use tracing::{Dispatch, Level, dispatcher, error};
use tracing_subscriber::fmt as tracing_fmt;
use vitrine::{
    api::ApiClient,
    application::{
        commands, console, controller::ViewController, error::AppError, error::ErrorReport,
    },
    cache::{CacheConfig, ViewCache},
    config::{self, Command},
    infra::{error::InfraError, telemetry},
    session::SessionStore,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report_application_error(&error);
            ExitCode::FAILURE
        }
    }
}

fn report_application_error(error: &AppError) {
    let report = ErrorReport::from_error(error);
    if dispatcher::has_been_set() {
        error!(error = %report.joined(), "application error");
    } else {
        let subscriber = tracing_fmt()
            .with_max_level(Level::ERROR)
            .with_writer(std::io::stderr)
            .finish();
        let dispatch = Dispatch::new(subscriber);
        dispatcher::with_default(&dispatch, || {
            error!(error = %report.joined(), "application error");
        });
    }
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()?;
    telemetry::init(&settings.logging)?;

    let api = ApiClient::new(
        settings.api.base_url.as_str(),
        settings.api.processor_url.as_str(),
    )
    .map_err(AppError::Client)?;
    let cache = ViewCache::new(CacheConfig::from(&settings.cache));
    let session = SessionStore::new(settings.session.token_file.clone());
    let mut controller = ViewController::new(api, cache, session, settings.view.format);
    controller.start().await?;

    match cli_args.command {
        Command::Console => {
            let input = BufReader::new(io::stdin());
            console::run(&mut controller, input, io::stdout()).await?;
        }
        command => {
            let output = commands::dispatch(&mut controller, command).await?;
            print_output(&output).await?;
        }
    }
    Ok(())
}

async fn print_output(output: &str) -> Result<(), InfraError> {
    let mut stdout = io::stdout();
    stdout.write_all(output.as_bytes()).await?;
    if !output.ends_with('\n') {
        stdout.write_all(b"\n").await?;
    }
    stdout.flush().await?;
    Ok(())
}
