use crate::{logger::LogOptions, utils::print_error};
use anyhow::Context;
use clap::Parser;
use curve_oracle::Request;
use std::io::Write;

mod logger;
mod utils;

/// Print reference secp256k1 public keys and BN254 G2 multiples.
#[derive(Parser)]
#[command(name = "curve-oracle", version, long_about = None)]
struct Cli {
    /// `computeG2Point` or `getECDSAPubKey`
    command: String,
    /// Scalar in decimal
    #[arg(allow_hyphen_values = true)]
    scalar: String,
    /// Limb 1-4 for `computeG2Point`, X or Y for `getECDSAPubKey`
    #[arg(allow_hyphen_values = true)]
    selector: String,

    #[clap(flatten)]
    log: LogOptions,
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let request = Request::parse(&cli.command, &cli.scalar, &cli.selector)
        .context("could not parse arguments")?;
    tracing::info!("running {request:?}");
    let mut output = request.execute().with_context(|| {
        format!(
            "could not compute {} for scalar {:?}",
            request.command(),
            cli.scalar
        )
    })?;
    if request.trailing_newline() {
        output.push('\n');
    }
    Ok(output)
}

fn main() {
    let cli = Cli::parse();
    cli.log.try_setup_logger();

    let result = run(&cli).and_then(|output| {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(output.as_bytes())
            .and_then(|_| stdout.flush())
            .context("could not write result to stdout")
    });
    if let Err(e) = result {
        print_error(e);
        std::process::exit(1);
    }
}
