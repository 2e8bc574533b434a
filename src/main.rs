use clap::Parser;
use lldap_lister::{cli::Args, config, lister::Lister, report, resources};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let logger = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(std::io::stderr);
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .expect("Fallback should be valid");

    Registry::default().with(logger).with(env_filter).init();

    let args = Args::parse();
    let scope = args.scope();

    info!(%scope, "Listing LLDAP resources");

    let registry = resources::registry().inspect_err(|err| error!("registry: {}", err))?;
    let client = config::connect()
        .await
        .inspect_err(|err| error!("client: {}", err))?;

    let lister = Lister::new(client, registry);
    let failed = report::print_all(&lister, &scope, &mut std::io::stdout().lock()).await;

    info!(failed, "Done");

    Ok(())
}
