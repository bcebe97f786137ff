use anyhow::Result;
use clap::Parser;
use log::info;
use node_cmd::{CoreArgs, Env};

/// Validates the core connection flags and prints the node options they produce.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[clap(flatten)]
    core: CoreArgs,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut env = Env::new();
    cli.core.parse_into(&mut env)?;

    if env.is_empty() {
        info!("No core flags given, using node defaults");
    }

    println!("{}", serde_json::to_string_pretty(&env)?);

    Ok(())
}
