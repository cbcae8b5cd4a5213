use clap::Parser;
use serde_json::Value;

use hmtl_config::{
    cli::Args,
    log_info, log_warn,
    util::{io::SerialTransport, log},
    ConfigValidator, HmtlConfig, Session,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    log::init(args.verbose);
    args.check()?;

    let config = match &args.file {
        Some(path) => {
            let mut document = HmtlConfig::read_document(path)?;

            if let Some(address) = args.address {
                log_info!("* Setting address to {}", address);
                if let Some(header) = document.get_mut("header").and_then(Value::as_object_mut) {
                    header.insert("address".to_string(), Value::from(address));
                }
            }

            log_info!(
                "****** Config read from '{}':\n{}",
                path.display(),
                serde_json::to_string_pretty(&document)?
            );

            Some(ConfigValidator::load(document)?)
        }
        None => None,
    };

    let mut session = Session::<SerialTransport>::open(args.session_config()).await?;

    if args.print_config {
        session.read_config().await?;
        session.print_config().await?;
        return Ok(());
    }

    if let Some(config) = &config {
        let report = session.send_configuration(config).await?;
        if !report.failed_outputs.is_empty() {
            log_warn!("Module rejected outputs {:?}", report.failed_outputs);
        }
    } else if let Some(address) = args.address {
        session.send_address(address).await?;
    }

    if args.verbose {
        session.print_config().await?;
    }

    if args.write_config {
        session.write_config().await?;
    }

    Ok(())
}
