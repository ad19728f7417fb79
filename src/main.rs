use static_actor::model::Config;
use static_actor::runtime::{setup_tracing, ActorOptions, ActorSystem};
use static_actor::static_actor::create;
use tracing::{error, info};

/// Used when no configuration file is given on the command line.
const DEFAULT_CONFIG: &str = "value = true\n";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let text = match std::env::args().nth(1) {
        Some(path) => {
            info!(%path, "Loading configuration");
            std::fs::read_to_string(&path)?
        }
        None => DEFAULT_CONFIG.to_string(),
    };
    let config = Config::from_toml_str(&text)?;

    let system = ActorSystem::new("static-demo");
    let actor = create(&system, &ActorOptions::default())?;
    info!(actor = %actor, "Static actor created");

    actor.tell(config).await?;

    if let Err(e) = system.shutdown().await {
        error!(error = %e, "Shutdown failed");
        return Err(e.into());
    }

    info!("Application completed successfully");
    Ok(())
}
