// ABOUTME: Main entry point for the anicii slideshow
// ABOUTME: Parses flags, verifies startup requirements, and runs the display loop

use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::path::PathBuf;

use anicii_cli::config::{CliOverrides, FileConfig, SlideshowConfig};
use anicii_cli::constants::renderer as renderer_constants;
use anicii_cli::output::{print_tag_catalog, CliOutput};
use anicii_cli::{renderer, slideshow};
use anicii_sdk::TagCatalog;

#[derive(Parser)]
#[command(name = "anicii")]
#[command(about = "Anime images as ASCII art, on a loop", long_about = None)]
struct Cli {
    /// Include NSFW tags in random selection
    #[arg(long)]
    nsfw: bool,

    /// Seconds to wait between images
    #[arg(short, long)]
    interval: Option<u64>,

    /// Directory where images are saved
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Do not save images to disk
    #[arg(long)]
    no_save: bool,

    /// Comma-separated tags to search instead of a random one
    #[arg(short, long, value_delimiter = ',')]
    tags: Vec<String>,

    /// Render with ANSI colors
    #[arg(short, long)]
    color: bool,

    /// Fill rendered character backgrounds
    #[arg(long)]
    fill: bool,

    /// Print artist and tag details under each image
    #[arg(long)]
    caption: bool,

    /// List available tags and exit
    #[arg(long)]
    list_tags: bool,

    /// Disable colored status output
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            nsfw: self.nsfw,
            interval: self.interval,
            output_dir: self.output_dir.clone(),
            no_save: self.no_save,
            tags: self.tags.clone(),
            color: self.color,
            fill: self.fill,
            caption: self.caption,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    // Determine if color should be used
    let use_color = !cli.no_color
        && env::var("NO_COLOR").is_err()
        && env::var("TERM").unwrap_or_default() != "dumb";
    let out = CliOutput::with_color(use_color);

    let catalog = TagCatalog::builtin();

    if cli.list_tags {
        print_tag_catalog(&catalog, use_color);
        return Ok(());
    }

    if let Err(err) = renderer::ensure_installed().await {
        out.error(&err.to_string());
        eprintln!();
        eprintln!("anicii renders images through {}:", renderer_constants::BINARY);
        eprintln!("  {}", renderer_constants::INSTALL_URL);
        std::process::exit(1);
    }

    let file_config = FileConfig::load().unwrap_or_default();
    let config = SlideshowConfig::resolve(cli.overrides(), file_config, &catalog);

    // Fatal: the loop never starts without a usable output directory
    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    log::debug!("resolved configuration: {:?}", config);

    slideshow::run(&config, &catalog, &out).await
}

fn init_logging() {
    let default_level = if env::var_os("ANICII_VERBOSE").is_some() {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "anicii");

        let interval_arg = cli
            .get_arguments()
            .find(|arg| arg.get_id() == "interval")
            .expect("interval argument should exist");
        assert!(!interval_arg.is_required_set());
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["anicii"]).unwrap();
        assert!(!cli.nsfw);
        assert_eq!(cli.interval, None);
        assert!(!cli.no_save);
        assert!(cli.tags.is_empty());
        assert!(!cli.color);
        assert!(!cli.fill);
        assert!(!cli.caption);
        assert!(!cli.list_tags);
    }

    #[test]
    fn test_parse_comma_separated_tags() {
        let cli = Cli::try_parse_from(["anicii", "--tags", "waifu,maid"]).unwrap();
        assert_eq!(cli.tags, vec!["waifu".to_string(), "maid".to_string()]);
    }

    #[test]
    fn test_parse_display_flags() {
        let cli =
            Cli::try_parse_from(["anicii", "--color", "--fill", "--caption", "--nsfw"]).unwrap();
        assert!(cli.color);
        assert!(cli.fill);
        assert!(cli.caption);
        assert!(cli.nsfw);
    }

    #[test]
    fn test_parse_short_flags() {
        let cli = Cli::try_parse_from([
            "anicii", "-i", "30", "-o", "/tmp/out", "-t", "waifu", "-c",
        ])
        .unwrap();
        assert_eq!(cli.interval, Some(30));
        assert_eq!(cli.output_dir, Some(PathBuf::from("/tmp/out")));
        assert_eq!(cli.tags, vec!["waifu".to_string()]);
        assert!(cli.color);
    }

    #[test]
    fn test_overrides_conversion() {
        let cli = Cli::try_parse_from(["anicii", "--nsfw", "--no-save", "-i", "5"]).unwrap();
        let overrides = cli.overrides();
        assert!(overrides.nsfw);
        assert!(overrides.no_save);
        assert_eq!(overrides.interval, Some(5));
    }
}
