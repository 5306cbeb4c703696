use clap::{Parser, Subcommand, ValueEnum};
use factor_edit_apps::FactorEditConfig;
use schemars::schema_for;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = env!("CARGO_BIN_NAME"))]
struct Args {
    #[command(subcommand)]
    subcommand: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate JSON schema for the given config kind.
    Schema {
        /// Kind of config file.
        #[arg(value_enum, ignore_case = true)]
        kind: ConfigKind,
    },
    /// Print the default setting as TOML.
    Default,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ConfigKind {
    FactorEditConfig,
}

fn main() -> anyhow::Result<()> {
    factor_edit_apps::utils::init_tracing();
    let args = Args::parse();
    debug!(?args);

    match args.subcommand {
        Command::Schema { kind } => {
            let schema = match kind {
                ConfigKind::FactorEditConfig => schema_for!(FactorEditConfig),
            };
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
        Command::Default => {
            print!("{}", toml::to_string(&FactorEditConfig::default())?);
        }
    }
    Ok(())
}
