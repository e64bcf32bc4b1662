//! Interactive session.
//!
//! Lines are split with shell quoting rules and parsed with the same command
//! tree as the binary. `help`, `view [NAME]`, `quit` and `exit` are handled
//! here. Each line runs to completion before the next is read.

use clap::{CommandFactory, Parser};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::{
    application::{commands, controller::ViewController, error::ErrorReport, view::View},
    config::Command,
    infra::error::InfraError,
};

const PROMPT: &str = "vitrine> ";

#[derive(Debug, Parser)]
#[command(
    name = "vitrine",
    no_binary_name = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
struct ConsoleLine {
    #[command(subcommand)]
    command: Command,
}

enum Step {
    Print(String),
    Quit,
}

/// Run the read-dispatch-print loop until `quit`, `exit` or end of input.
pub async fn run<R, W>(
    controller: &mut ViewController,
    input: R,
    mut output: W,
) -> Result<(), InfraError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let initial = controller.current_view();
    let banner = match controller.navigate(initial).await {
        Ok(rendered) => rendered,
        Err(err) => format_error(&err),
    };
    write_block(&mut output, &banner).await?;
    output.write_all(PROMPT.as_bytes()).await?;
    output.flush().await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match step(controller, &line).await {
            Step::Print(text) => write_block(&mut output, &text).await?,
            Step::Quit => break,
        }
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;
    }
    output.flush().await?;
    Ok(())
}

async fn step(controller: &mut ViewController, line: &str) -> Step {
    let words = match shell_words::split(line) {
        Ok(words) => words,
        Err(err) => return Step::Print(format!("error: {err}")),
    };
    let Some(first) = words.first() else {
        return Step::Print(String::new());
    };
    debug!(command = %first, "console line");

    match first.as_str() {
        "quit" | "exit" => Step::Quit,
        "help" => Step::Print(ConsoleLine::command().render_help().to_string()),
        "view" => Step::Print(switch_view(controller, words.get(1)).await),
        _ => match ConsoleLine::try_parse_from(&words) {
            Ok(ConsoleLine { command }) => match commands::dispatch(controller, command).await {
                Ok(rendered) => Step::Print(rendered),
                Err(err) => Step::Print(format_error(&err)),
            },
            Err(err) => Step::Print(err.render().to_string()),
        },
    }
}

async fn switch_view(controller: &mut ViewController, name: Option<&String>) -> String {
    let view = match name {
        Some(name) => match name.parse::<View>() {
            Ok(view) => view,
            Err(err) => return format!("error: {err}"),
        },
        None => controller.current_view(),
    };
    match controller.navigate(view).await {
        Ok(rendered) => rendered,
        Err(err) => format_error(&err),
    }
}

fn format_error(err: &dyn std::error::Error) -> String {
    let report = ErrorReport::from_error(err);
    warn!(error = %report.joined(), "console command failed");
    format!("error: {}", report.joined())
}

async fn write_block<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<(), InfraError> {
    if text.is_empty() {
        return Ok(());
    }
    output.write_all(text.as_bytes()).await?;
    if !text.ends_with('\n') {
        output.write_all(b"\n").await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use httpmock::MockServer;
    use tempfile::TempDir;

    use super::*;
    use crate::{
        api::ApiClient,
        cache::{CacheConfig, ViewCache},
        presentation::ViewFormat,
        session::SessionStore,
    };

    const BRANDS: &str = r#"[{"id":2,"name":"Acme","description":null}]"#;

    fn controller(server: &MockServer, dir: &TempDir) -> ViewController {
        let api = ApiClient::new(&server.base_url(), &server.base_url())
            .expect("client")
            .with_token("tok");
        ViewController::new(
            api,
            ViewCache::new(CacheConfig::default()),
            SessionStore::new(dir.path().join("session.token")),
            ViewFormat::Text,
        )
    }

    async fn run_script(controller: &mut ViewController, script: &str) -> String {
        let mut output = Vec::new();
        run(controller, script.as_bytes(), &mut output)
            .await
            .expect("console run");
        String::from_utf8(output).expect("utf-8 output")
    }

    #[tokio::test]
    async fn lists_are_cached_across_lines() {
        let server = MockServer::start();
        let dir = TempDir::new().expect("tmp dir");
        let list = server.mock(|when, then| {
            when.method("GET").path("/brand");
            then.status(200)
                .header("content-type", "application/json")
                .body(BRANDS);
        });
        let mut controller = controller(&server, &dir);

        let out = run_script(&mut controller, "brands list\nview brands\nquit\nbrands list\n").await;

        assert_eq!(out.matches("#2 Acme").count(), 2);
        list.assert_calls(1);
    }

    #[tokio::test]
    async fn quoted_arguments_reach_the_form() {
        let server = MockServer::start();
        let dir = TempDir::new().expect("tmp dir");
        let create = server.mock(|when, then| {
            when.method("POST")
                .path("/brand")
                .json_body_includes(r#"{"name":"Acme Tools"}"#);
            then.status(201);
        });
        server.mock(|when, then| {
            when.method("GET").path("/brand");
            then.status(200)
                .header("content-type", "application/json")
                .body(BRANDS);
        });
        let mut controller = controller(&server, &dir);

        run_script(&mut controller, "brands create --name \"Acme Tools\"\n").await;

        create.assert();
    }

    #[tokio::test]
    async fn errors_are_printed_and_the_loop_continues() {
        let server = MockServer::start();
        let dir = TempDir::new().expect("tmp dir");
        server.mock(|when, then| {
            when.method("DELETE").path("/product/id/5");
            then.status(500).body("boom");
        });
        let mut controller = controller(&server, &dir);

        let out = run_script(
            &mut controller,
            "products delete 5\nfrobnicate\nview nowhere\nview processor\n",
        )
        .await;

        assert!(out.contains("error: server returned status 500: boom"));
        assert!(out.contains("unrecognized subcommand"));
        assert!(out.contains("error: unknown view `nowhere`"));
        assert!(out.contains("processor pause"));
    }

    #[tokio::test]
    async fn nested_console_is_rejected() {
        let server = MockServer::start();
        let dir = TempDir::new().expect("tmp dir");
        let mut controller = controller(&server, &dir);

        let out = run_script(&mut controller, "console\n").await;

        assert!(out.contains("already in a console session"));
    }

    #[tokio::test]
    async fn help_lists_commands() {
        let server = MockServer::start();
        let dir = TempDir::new().expect("tmp dir");
        let mut controller = controller(&server, &dir);

        let out = run_script(&mut controller, "help\n").await;

        assert!(out.contains("products"));
        assert!(out.contains("discounts"));
    }
}
