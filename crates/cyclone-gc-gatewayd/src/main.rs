//! Gateway daemon for the cyclone-gc graphics coprocessor.
//!
//! Reads framed wire commands from a channel device (or stdin) and
//! forwards each one through the gateway to the instruction FIFO.
//! Malformed commands are logged and dropped; bus failures and FIFO
//! timeouts terminate the daemon.

mod bus;
mod frame;

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use cyclone_gc_gateway::{Gateway, GatewayError, HandshakeConfig};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Channel device to read wire commands from ("-" for stdin).
    #[arg(long, default_value = "-")]
    channel: PathBuf,

    /// Milliseconds to sleep between full-flag polls while the
    /// instruction FIFO is full.
    #[arg(long, default_value_t = 130)]
    backoff_ms: u64,

    /// Give up on a command after this many full-flag polls. Blocks
    /// forever when omitted.
    #[arg(long)]
    max_attempts: Option<NonZeroU32>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = HandshakeConfig {
        backoff: Duration::from_millis(args.backoff_ms),
        max_attempts: args.max_attempts,
    };
    let mut gateway = Gateway::new(bus::TraceBus::new(), config);

    let reader: Box<dyn Read> = if args.channel.as_os_str() == "-" {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(&args.channel)
            .with_context(|| format!("opening channel {}", args.channel.display()))?;
        Box::new(file)
    };
    let mut reader = BufReader::new(reader);

    log::info!("cyclone-gc-gatewayd: listening on {}", args.channel.display());
    run(&mut gateway, &mut reader)
}

fn run(
    gateway: &mut Gateway<bus::TraceBus>,
    reader: &mut impl Read,
) -> anyhow::Result<()> {
    let mut dispatched: u64 = 0;
    let mut rejected: u64 = 0;

    while let Some(command) = frame::read_command(reader)? {
        match gateway.handle(&command) {
            Ok(()) => dispatched += 1,
            // Already logged by the gateway; drop the command and keep
            // the stream alive.
            Err(GatewayError::Protocol(_)) => rejected += 1,
            Err(e) => return Err(anyhow::anyhow!("{e}")).context("dispatch failed"),
        }
    }

    log::info!("channel closed: {dispatched} dispatched, {rejected} rejected");
    Ok(())
}
