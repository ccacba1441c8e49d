use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

/// Convert a Wavefront .obj triangle mesh into a .msh file.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Input .obj file
    #[arg(value_name = "INPUT", allow_hyphen_values = true)]
    input: PathBuf,

    /// Output .msh file, created or truncated
    #[arg(value_name = "OUTPUT", allow_hyphen_values = true)]
    output: PathBuf,
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    info!("converting {}", cli.input.display());

    obj2msh::convert_file(&cli.input, &cli.output).with_context(|| {
        format!(
            "failed to convert {} into {}",
            cli.input.display(),
            cli.output.display()
        )
    })?;

    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Usage errors exit here with status 2, before any file is touched.
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    run(&cli)
}
