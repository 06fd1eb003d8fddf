use anyhow::Context;
use automl_samples::app;
use automl_samples::config::cli::ListModelEvaluationsArgs;
use automl_samples::utils::logger;
use automl_samples::{AutoMlClient, AutoMlError, ClientConfig};
use clap::Parser;

#[tokio::main]
async fn main() {
    let args = ListModelEvaluationsArgs::parse();

    if args.common.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.common.verbose);
    }
    tracing::debug!("CLI args: {:?}", args);

    if let Err(e) = run(&args).await {
        if let Some(err) = e.downcast_ref::<AutoMlError>() {
            tracing::error!("Suggestion: {}", err.recovery_suggestion());
        }
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: &ListModelEvaluationsArgs) -> anyhow::Result<()> {
    let config = ClientConfig::load(args.common.config.as_deref())
        .context("failed to load client configuration")?;
    let client = AutoMlClient::new(config).await?;
    tracing::debug!("Using endpoint {}", client.config().base_url());

    let mut stdout = std::io::stdout().lock();
    app::list_model_evaluations::run(
        &client,
        &args.project_id,
        &args.compute_region,
        &args.model_id,
        &args.filter,
        &mut stdout,
    )
    .await?;

    Ok(())
}
