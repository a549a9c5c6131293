use std::io::Read;

use anyhow::{bail, Context, Result};
use exordial_core::{config::Config, generator::PetitionGenerator, types::PetitionRequest};
use tracing::info;

/// Usage: `exordial <request.json | -> [backend]`
///
/// Reads a petition request (JSON) from the given file or stdin, runs
/// the selected backend and prints the assembled draft to stdout. A
/// typed failure goes to stderr with a nonzero exit.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "exordial=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let args: Vec<String> = std::env::args().skip(1).collect();

    let request = read_request(args.first().map(String::as_str))?;
    let map = exordial_agent::backends(&config);

    let choice = args.get(1).map(String::as_str);
    let Some(backend) = exordial_agent::resolve(&map, choice, &config) else {
        bail!(
            "backend desconhecido ou sem credenciais: {}",
            choice.unwrap_or(&config.default_backend)
        );
    };

    info!(
        backend = choice.unwrap_or(&config.default_backend),
        petition_type = %request.petition_type,
        "generating petition draft"
    );

    match backend.generate(&request).await {
        Ok(draft) => {
            println!("{draft}");
            Ok(())
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

fn read_request(path: Option<&str>) -> Result<PetitionRequest> {
    let data = match path {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read request from stdin")?;
            buf
        },
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read request file: {p}"))?,
    };
    serde_json::from_str(&data).context("invalid petition request JSON")
}
