use clap::Parser;
use miette::Result;
use colornodes::cli::{Cli, Commands};
use colornodes::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Nodes(args) => colornodes::cli::nodes::run(args, &printer)?,
        Commands::Rgb(args) => {
            let config = colornodes::cli::load_config(cli.config.as_deref())?;
            colornodes::cli::rgb::run(args, &config, &printer)?
        }
        Commands::Invert(args) => colornodes::cli::invert::run(args, &printer)?,
        Commands::Replace(args) => {
            let config = colornodes::cli::load_config(cli.config.as_deref())?;
            colornodes::cli::replace::run(args, &config, &printer)?
        }
        Commands::Run(args) => colornodes::cli::run::run(args, &printer)?,
        Commands::Completions(args) => colornodes::cli::completions::run(args)?,
    }

    Ok(())
}
