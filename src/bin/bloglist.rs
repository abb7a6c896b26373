use clap::Parser;
use bloglist::cli::{commands, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init(args) => commands::execute_init(args)?,
        Commands::Serve(args) => {
            bloglist::native::init_tracing();
            commands::execute_serve(args).await?
        }
        Commands::Stats(args) => commands::execute_stats(args)?,
    }

    Ok(())
}
