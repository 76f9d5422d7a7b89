use clap::Parser;
use pixfind::io::{load_rgba_needle, load_rgba_pixels};
use pixfind::{ClipRect, KernelChoice, Location, SearchConfig, Searcher};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "pixfind CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for the search.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum KernelConfig {
    #[default]
    Auto,
    Scalar,
    Wide,
}

impl From<KernelConfig> for KernelChoice {
    fn from(value: KernelConfig) -> Self {
        match value {
            KernelConfig::Auto => KernelChoice::Auto,
            KernelConfig::Scalar => KernelChoice::Scalar,
            KernelConfig::Wide => KernelChoice::Wide,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ClipConfig {
    x: usize,
    y: usize,
    width: usize,
    height: usize,
}

impl From<ClipConfig> for ClipRect {
    fn from(value: ClipConfig) -> Self {
        ClipRect::new(value.x, value.y, value.width, value.height)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Config {
    haystack_path: String,
    needle_path: String,
    clip: Option<ClipConfig>,
    kernel: KernelConfig,
    output_path: Option<String>,
}

#[derive(Debug, Serialize)]
struct Output {
    found: bool,
    x: i64,
    y: i64,
}

impl From<Location> for Output {
    fn from(value: Location) -> Self {
        let (x, y) = value.to_signed();
        Self {
            found: value.is_found(),
            x,
            y,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("pixfind=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.haystack_path.is_empty() || config.needle_path.is_empty() {
        return Err("haystack_path and needle_path must be set in the config".into());
    }

    let search_cfg = SearchConfig {
        kernel: config.kernel.into(),
    };
    search_cfg.validate()?;

    let haystack = load_rgba_pixels(&config.haystack_path)?;
    let needle = load_rgba_needle(&config.needle_path)?;
    let searcher = Searcher::new(needle).with_config(search_cfg);

    let view = haystack.view();
    let location = match config.clip {
        Some(clip) => searcher.find_in(view, clip.into())?,
        None => searcher.find(view)?,
    };

    let output = Output::from(location);
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_config_parses() {
        let config: Config = serde_json::from_str(EXAMPLE_JSON).unwrap();
        assert_eq!(config.haystack_path, "screen.png");
        let clip: ClipRect = config.clip.unwrap().into();
        assert_eq!(clip, ClipRect::new(0, 0, 800, 600));
        assert_eq!(KernelChoice::from(config.kernel), KernelChoice::Auto);
    }

    #[test]
    fn not_found_serializes_sentinel() {
        let json = serde_json::to_string(&Output::from(Location::NotFound)).unwrap();
        assert_eq!(json, r#"{"found":false,"x":-1,"y":-1}"#);
    }
}
