use anyhow::{bail, Result};
use std::path::Path;

use crate::cli::config::{Config, CONFIG_FILENAME};
use crate::cli::InitArgs;

pub fn execute_init(args: InitArgs) -> Result<()> {
    // Check if config already exists
    if Path::new(CONFIG_FILENAME).exists() && !args.force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            CONFIG_FILENAME
        );
    }

    let config = Config::default().with_overrides(args.host, args.port, args.data_file);
    config.save()?;

    eprintln!("Created {}", CONFIG_FILENAME);
    eprintln!("  host: {}", config.host);
    eprintln!("  port: {}", config.port);
    if let Some(ref data_file) = config.data_file {
        eprintln!("  data_file: {}", data_file);
    }
    eprintln!();
    eprintln!("Next: bloglist serve");

    Ok(())
}
