/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use faucet_verify::prelude::*;
use std::sync::Arc;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let config = Arc::new(Config::new());
    debug!("Configuration: {:?}", config);
    info!("Verifying faucet service '{}'", config.container.service);

    let runtime = Arc::new(DockerCompose::new(&config.container));
    let api = Arc::new(Client::new(&config)?);
    let verifier = Verifier::new(config, runtime, api);

    verifier
        .run_with(|report| {
            print!("{report}");
        })
        .await;

    Ok(())
}
