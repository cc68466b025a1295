// ABOUTME: Console output utilities for status messages, captions, and tag listings
// ABOUTME: Provides consistent owo-colors formatting with TTY-aware color handling

use anicii_sdk::{format_bytes, CatalogTag, ImageRecord, TagCatalog};
use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// Centralized CLI output utilities for consistent formatting
pub struct CliOutput {
    use_color: bool,
}

impl CliOutput {
    /// Create new CLI output utility with TTY detection
    pub fn new() -> Self {
        Self {
            use_color: std::io::stderr().is_terminal(),
        }
    }

    /// Create CLI output utility with explicit color setting
    pub fn with_color(use_color: bool) -> Self {
        Self { use_color }
    }

    pub fn use_color(&self) -> bool {
        self.use_color
    }

    /// Display an error message
    pub fn error(&self, message: &str) {
        if self.use_color {
            eprintln!("{} {}", "error:".red().bold(), message);
        } else {
            eprintln!("error: {}", message);
        }
    }

    /// Display a warning message
    pub fn warning(&self, message: &str) {
        if self.use_color {
            eprintln!("{} {}", "warning:".yellow().bold(), message);
        } else {
            eprintln!("warning: {}", message);
        }
    }

    /// Display an informational message
    pub fn info(&self, message: &str) {
        if self.use_color {
            eprintln!("{} {}", "info:".blue().bold(), message);
        } else {
            eprintln!("info: {}", message);
        }
    }

    /// Display a success message
    pub fn success(&self, message: &str) {
        if self.use_color {
            eprintln!("{} {}", "success:".green().bold(), message);
        } else {
            eprintln!("success: {}", message);
        }
    }
}

impl Default for CliOutput {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats the caption block printed below a rendered image.
pub struct CaptionFormatter {
    use_color: bool,
}

impl CaptionFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    pub fn format(&self, image: &ImageRecord) -> String {
        let mut lines = Vec::new();

        if let Some(artist) = &image.artist {
            let mut artist_line = artist.name.clone();
            if let Some(link) = artist
                .twitter
                .as_deref()
                .or(artist.pixiv.as_deref())
                .or(artist.patreon.as_deref())
            {
                artist_line.push_str(&format!(" ({})", link));
            }
            lines.push(self.labeled("artist", &artist_line));
        }

        if !image.tags.is_empty() {
            let names: Vec<&str> = image.tags.iter().map(|tag| tag.name.as_str()).collect();
            lines.push(self.labeled("tags", &names.join(", ")));
        }

        lines.push(self.labeled(
            "size",
            &format!(
                "{}x{}, {}",
                image.width,
                image.height,
                format_bytes(image.byte_size as usize)
            ),
        ));

        if let Some(source) = &image.source {
            lines.push(self.labeled("source", source));
        }

        if image.is_nsfw {
            lines.push(self.labeled("nsfw", "yes"));
        }

        lines.join("\n")
    }

    fn labeled(&self, label: &str, value: &str) -> String {
        // Pad before styling so ANSI escapes don't throw off the column width
        let padded = format!("{:<8}", label);
        if self.use_color {
            format!("  {}{}", padded.dimmed(), value)
        } else {
            format!("  {}{}", padded, value)
        }
    }
}

/// Print both tag pools for `--list-tags`.
pub fn print_tag_catalog(catalog: &TagCatalog, use_color: bool) {
    print_pool("General tags", catalog.general(), use_color);
    println!();
    print_pool("Explicit tags (require --nsfw)", catalog.explicit(), use_color);
}

fn print_pool(heading: &str, pool: &[CatalogTag], use_color: bool) {
    if use_color {
        println!("{}", heading.bold());
    } else {
        println!("{}", heading);
    }
    for tag in pool {
        println!("  {:<18}{}", tag.name, tag.description);
    }
}
