use anyhow::{Context, Result};
use cli::Cli;
use std::process::ExitCode;

mod cli;
mod wizard;

fn main() -> ExitCode {
    if let Err(e) = try_main() {
        eprintln!("{}: {e:#}", console::style("Error").red());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main() -> Result<()> {
    use clap::Parser;
    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::Config => wizard::run(),
        cli::Commands::Render => {
            println!("Loading configuration...");
            let contents = std::fs::read_to_string(wizard::CONFIG_FILE).with_context(|| {
                format!(
                    "Failed to load {} contents - run 'book-cover-3d config' first",
                    wizard::CONFIG_FILE
                )
            })?;
            let config: wizard::Configuration =
                toml::from_str(&contents).with_context(|| "Failed to parse TOML")?;

            let html = book_cover_3d::render_page(&config.cover, config.page_title());
            std::fs::write(&config.outfile, html).with_context(|| {
                format!("Failed to write preview to {}", config.outfile.display())
            })?;

            println!();
            println!("  Preview: {}", config.outfile.display());
            if let Some(href) = config.cover.href_opt() {
                println!("  Links to: {}", href);
            }

            Ok(())
        }
    }
}
