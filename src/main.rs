use clap::{Parser, ValueEnum};
use log::debug;
use recipe_card::{loader, normalize, CardConfig, RecipeCard, RecipeMetadata};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "recipe-card",
    version,
    about = "Print recipe summary cards from schema.org JSON-LD or HTML pages"
)]
struct Cli {
    /// JSON-LD or HTML files; `-` reads standard input
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Configuration file (defaults to ./recipe-card.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Plain-text card
    Text,
    /// Display-ready card as JSON
    Json,
    /// Normalized card fields as JSON
    Fields,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CardConfig::load_from(path)?,
        None => CardConfig::load()?,
    };
    debug!("{:#?}", config);

    let mut failed = false;
    for input in &cli.inputs {
        match load(input, config.max_search_depth) {
            Ok(metadata) => print_card(&metadata, &config, cli.format)?,
            Err(e) => {
                eprintln!("{}: {}", input.display(), e);
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
    Ok(())
}

fn load(input: &Path, max_depth: usize) -> Result<RecipeMetadata, recipe_card::CardError> {
    if input.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        loader::from_unknown_str_bounded(&content, max_depth)
    } else {
        loader::from_path_bounded(input, max_depth)
    }
}

fn print_card(
    metadata: &RecipeMetadata,
    config: &CardConfig,
    format: OutputFormat,
) -> Result<(), serde_json::Error> {
    let fields = normalize(metadata, config);
    match format {
        OutputFormat::Fields => println!("{}", serde_json::to_string_pretty(&fields)?),
        OutputFormat::Json => {
            let card = RecipeCard::new(&fields, config);
            println!("{}", serde_json::to_string_pretty(&card)?);
        }
        OutputFormat::Text => println!("{}", RecipeCard::new(&fields, config)),
    }
    Ok(())
}
