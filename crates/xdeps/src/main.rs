//! xdeps - Entry Point
//!
//! Loads configuration, wires the providers and runs one command. Ctrl-C
//! cancels the in-flight request; the process then exits with the
//! cancellation error.

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::warn;
use xdeps::cli::{Cli, execute};
use xdeps::infrastructure::init_app;
use xdeps::infrastructure::logging::{init_logging, log_config_loaded};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    init_logging(&config.logging)?;
    if let Some(path) = cli.config_loader().config_file() {
        log_config_loaded(&path, path.exists());
    }

    let app = init_app(config).await?;
    let token = CancellationToken::new();
    let ctx = app.request_context().with_cancellation(token.clone());

    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupted, cancelling request");
            token.cancel();
        }
    });

    let result = execute(&cli.command, app.defs_service().as_ref(), &ctx).await;
    interrupt.abort();

    println!("{}", serde_json::to_string_pretty(&result?)?);
    Ok(())
}
