//! CLI front end for the sceneforge gateway.
//!
//! `styles` prints the option list served by the gateway; `generate` runs
//! one retry-wrapped generation and saves the returned image locally.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use sceneforge::api::types::StyleInfo;
use sceneforge::client::{save_data_uri, GenerateClient};

#[derive(Parser, Debug)]
#[command(name = "forgectl", about = "CLI for the sceneforge generation gateway", version)]
struct Cli {
    /// Gateway base URL
    #[arg(global = true, long, default_value = "http://127.0.0.1:8080")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the styles the gateway accepts
    Styles,
    /// Generate an image and save it to disk
    Generate {
        /// Style name, as listed by `styles`
        #[arg(long)]
        style: String,
        /// Scene description to render
        #[arg(long)]
        prompt: String,
        /// Directory the image is written to
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Styles => {
            let styles: Vec<StyleInfo> = reqwest::get(format!("{}/styles", cli.server))
                .await?
                .json()
                .await?;

            for style in styles {
                println!("{} - {}", style.name, style.description);
            }
        }
        Commands::Generate { style, prompt, out } => {
            let client = GenerateClient::new(cli.server);
            let generated = client.generate_with_retry(&style, &prompt).await?;

            eprintln!("prompt: {}", generated.prompt);

            let path = save_data_uri(&generated.image, &style, &out)?;
            println!("{}", path.display());
        }
    }

    Ok(())
}
