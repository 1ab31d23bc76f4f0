use std::fs::File;
use std::io::{self, BufReader};

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    let config = krishi_cli::Config::from_env()?;
    krishi_observability::init_with(config.log_format);

    let stdout = io::stdout().lock();
    match std::env::args().nth(1) {
        Some(path) => {
            let file = File::open(&path).with_context(|| format!("failed to open {path}"))?;
            krishi_cli::run(&config, BufReader::new(file), stdout)
        }
        None => {
            tracing::debug!("no input path given; reading stdin");
            krishi_cli::run(&config, io::stdin().lock(), stdout)
        }
    }
}
