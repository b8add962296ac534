//! Print a random hex-encoded secret suitable for `JWT_SECRET`

use clap::Parser;
use color_eyre::Result;
use rand::RngCore;
use std::fmt::Write;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a random secret for JWT_SECRET")]
struct Args {
    /// Number of random bytes (printed as twice as many hex characters)
    #[arg(short, long, default_value_t = 64, value_parser = clap::value_parser!(u16).range(16..))]
    length: u16,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let mut bytes = vec![0u8; usize::from(args.length)];
    rand::thread_rng().fill_bytes(&mut bytes);

    let mut secret = String::with_capacity(bytes.len() * 2);
    for byte in &bytes {
        write!(secret, "{:02x}", byte)?;
    }

    println!("{secret}");
    Ok(())
}
