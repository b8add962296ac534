//! Print a signed bearer token for calling the API

use axum_helpers::{JwtAuth, JwtConfig, ACCESS_TOKEN_TTL};
use clap::Parser;
use color_eyre::Result;
use core_config::FromEnv;

#[derive(Parser, Debug)]
#[command(author, version, about = "Issue a JWT signed with JWT_SECRET")]
struct Args {
    /// Subject (`sub` claim) of the token
    #[arg(short, long)]
    subject: String,

    /// Token lifetime in seconds
    #[arg(short, long, default_value_t = ACCESS_TOKEN_TTL)]
    ttl_secs: i64,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    core_config::load_dotenv();

    let args = Args::parse();
    if args.ttl_secs <= 0 {
        color_eyre::eyre::bail!("--ttl-secs must be positive");
    }

    let auth = JwtAuth::new(&JwtConfig::from_env()?);
    let token = auth.create_token(&args.subject, args.ttl_secs)?;

    println!("{token}");
    Ok(())
}
