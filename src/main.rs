use clap::Parser;

use sigverify::client::Client;
use sigverify::clock::{Clock, ClockError};
use sigverify::cmdargs::{Args, SubCommand};
use sigverify::config::{Config, ConfigError};
use sigverify::http::start_server;
use sigverify::logging::TracingSetup;
use sigverify::service::ServiceHandler;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> color_eyre::Result<()> {
    dotenv::dotenv().ok();
    color_eyre::install().ok();

    let args = Args::parse();
    let config = build_configuration(&args)?;
    let services = ServiceHandler::from_config(&config)?;

    TracingSetup::with_setup(config, |config| async move {
        match args.command {
            SubCommand::Serve => start_server(config, services).await?,
            SubCommand::Sign(sign_args) => {
                let timestamp = resolve_timestamp(sign_args.timestamp, services.clock())?;
                println!("{}", services.verifier().sign(&sign_args.message, timestamp));
            }
            SubCommand::Send(send_args) => {
                let timestamp = resolve_timestamp(send_args.timestamp, services.clock())?;
                let client = Client::new(send_args.url);
                let response = client
                    .send(services.verifier(), &send_args.message, timestamp)
                    .await?;
                println!("{}", response.status);
            }
        }

        Ok(())
    })
    .await
}

fn build_configuration(args: &Args) -> Result<Config, ConfigError> {
    let mut config = Config::from_env();

    if let Some(t) = &args.telemetry_url {
        config.set_telemetry_url(t.clone());
    }

    if let Some(s) = &args.secret_key {
        config.set_secret_key(s);
    }

    if let Some(b) = &args.bind_ip {
        config.set_bind_ip(b);
    }

    config.validate_configuration().map(|_| config)
}

fn resolve_timestamp(timestamp: Option<i64>, clock: &dyn Clock) -> Result<i64, ClockError> {
    match timestamp {
        Some(t) => Ok(t),
        None => clock.now(),
    }
}
