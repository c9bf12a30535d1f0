//! stream-commp: compute a Filecoin piece commitment from stdin.
//!
//! Usage:
//!   some-data-source | stream-commp
//!   some-data-source | stream-commp --pad-piece-size 34359738368
//!
//! The report goes to stderr so the tool can sit inside a pipeline without
//! disturbing pass-through consumers.

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;
use commp::{extend_commp, to_hex, Calc};
use tracing::debug;

/// Read size aligned to whole quads so large streams bypass the carry
/// buffer entirely.
const BUF_SIZE: usize = (16 << 20) / 128 * 127;

#[derive(Parser)]
#[command(name = "stream-commp")]
#[command(about = "Compute a Filecoin piece commitment (commP) over stdin", long_about = None)]
struct Cli {
    /// Optional target power-of-two padded piece size, larger than the
    /// natural size of the input, to pad the commitment up to
    #[arg(short = 'p', long, value_name = "BYTES")]
    pad_piece_size: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let calc = Calc::default();
    let mut payload: u64 = 0;
    {
        let mut stdin = io::stdin().lock();
        let mut buf = vec![0u8; BUF_SIZE];
        loop {
            let n = stdin.read(&mut buf).context("reading stdin")?;
            if n == 0 {
                break;
            }
            calc.write(&buf[..n])?;
            payload += n as u64;
        }
    }
    debug!(bytes = payload, "stream consumed");

    let (mut commp, mut padded_size) = calc
        .digest()
        .context("collapsing the accumulated stream")?;

    if let Some(target) = cli.pad_piece_size {
        commp = extend_commp(&commp, padded_size, target)
            .context("padding the commitment to the requested piece size")?;
        padded_size = target;
    }

    eprintln!(
        "\nCommP:          {}\nPayload:        {:>12} bytes\nUnpadded piece: {:>12} bytes\nPadded piece:   {:>12} bytes",
        to_hex(&commp),
        payload,
        padded_size / 128 * 127,
        padded_size,
    );

    Ok(())
}
