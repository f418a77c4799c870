//! Scan for one FeliCa or Type-B card on an attached RC-S380 and print its
//! identifier.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use log::debug;

use rcs380::constants::{RCS380_PRODUCT_ID, SONY_VENDOR_ID};
use rcs380::transport::{UsbTransport, list_devices};
use rcs380::{CardTechnology, Error, SessionConfig, detect_card};

const USAGE: &str = "Usage: rcs380-scan [F | B | -F | -B]";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Card technology: F (FeliCa, default) or B (ISO 14443 Type B)
    #[arg(allow_hyphen_values = true)]
    technology: Option<String>,

    /// Give up after this many sense-requests
    #[arg(long)]
    attempts: Option<u32>,

    /// Give up after this many seconds of polling
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// List USB devices and exit
    #[arg(long)]
    list: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.list {
        for dev in list_devices().context("enumerating USB devices")? {
            let marker = if dev.matches(SONY_VENDOR_ID, RCS380_PRODUCT_ID) {
                "*"
            } else {
                " "
            };
            println!("{} {}", marker, dev);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let technology = match cli.technology.as_deref() {
        None => CardTechnology::default(),
        Some(arg) => match arg.parse::<CardTechnology>() {
            Ok(t) => t,
            Err(e) => {
                debug!("{}", e);
                eprintln!("{}", USAGE);
                return Ok(ExitCode::FAILURE);
            }
        },
    };

    let mut config = SessionConfig::default();
    if let Some(n) = cli.attempts {
        config = config.with_max_attempts(n);
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_deadline(Duration::from_secs(secs));
    }

    println!("NFC {} scanning...", technology);

    let transport = match UsbTransport::open() {
        Ok(t) => t,
        Err(Error::DeviceNotFound {
            vendor_id,
            product_id,
        }) => {
            println!("Can not open device {:04x}/{:04x}", vendor_id, product_id);
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => return Err(e).context("opening RC-S380"),
    };

    let card = detect_card(transport, technology, config)
        .with_context(|| format!("scanning for a {} card", technology))?;
    println!("{}", card);
    Ok(ExitCode::SUCCESS)
}
