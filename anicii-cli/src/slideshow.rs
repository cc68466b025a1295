// ABOUTME: The sequential fetch-download-render-save slideshow loop
// ABOUTME: Applies a fixed cooldown on failures and a visible countdown between images

use crate::config::SlideshowConfig;
use crate::constants::timeouts;
use crate::output::{CaptionFormatter, CliOutput};
use crate::renderer::RendererInvoker;
use crate::saver::{self, SaveOutcome};
use anicii_sdk::{FetchOptions, ImageRecord, RetryConfig, SearchClient, TagCatalog};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};
use tokio::time::sleep;

/// Run the slideshow until the process is interrupted.
///
/// Strictly sequential phases: fetch, download, render, caption, save, wait.
/// Any phase failure logs, cools down for a fixed 5 seconds, and restarts
/// from fetching. No signal handler is installed; Ctrl-C terminates
/// immediately, including mid-countdown.
pub async fn run(config: &SlideshowConfig, catalog: &TagCatalog, out: &CliOutput) -> Result<()> {
    let client = SearchClient::new()?;
    let invoker = RendererInvoker::from_config(config);
    let captions = CaptionFormatter::new(out.use_color());
    let retry = RetryConfig {
        max_attempts: config.max_retries,
        ..Default::default()
    };
    let options = FetchOptions {
        nsfw: config.nsfw,
        custom_tags: config.custom_tags.clone(),
        timeout: Duration::from_millis(config.timeout_ms),
    };

    loop {
        let image = match client.fetch_one(&options, catalog, &retry).await {
            Ok(image) => image,
            Err(err) => {
                out.warning(&format!("image search failed: {}", err));
                if let Some(help) = err.help_text() {
                    log::debug!("{}", help);
                }
                sleep(timeouts::FAILURE_COOLDOWN).await;
                continue;
            }
        };

        log::debug!("showing image {} from {}", image.image_id, image.url);

        // Download and render failures are not distinguished here; both
        // restart the loop after the same cooldown.
        if let Err(err) = show_one(&client, &invoker, &captions, config, out, &image).await {
            out.warning(&format!("unexpected error: {}", err));
            sleep(timeouts::FAILURE_COOLDOWN).await;
            continue;
        }

        countdown(config.interval_secs).await;
    }
}

async fn show_one(
    client: &SearchClient,
    invoker: &RendererInvoker,
    captions: &CaptionFormatter,
    config: &SlideshowConfig,
    out: &CliOutput,
    image: &ImageRecord,
) -> Result<()> {
    let bytes = client
        .download(&image.url, Duration::from_millis(config.timeout_ms))
        .await?;

    invoker.render(&bytes, &image.url).await?;

    if config.caption {
        println!("{}", captions.format(image));
    }

    // Saving is best-effort: a failure is logged but never restarts the loop
    if !config.no_save {
        match saver::save(&bytes, &image.url, &config.output_dir) {
            Ok(SaveOutcome::Written(path)) => {
                out.success(&format!("saved {}", path.display()));
            }
            Ok(SaveOutcome::AlreadyExists(path)) => {
                out.info(&format!("already saved as {}", path.display()));
            }
            Err(err) => {
                out.warning(&format!("could not save image: {}", err));
            }
        }
    }

    Ok(())
}

/// Visual countdown over `interval_secs`, updated on a fixed short tick.
async fn countdown(interval_secs: u64) {
    if interval_secs == 0 {
        return;
    }

    let pb = ProgressBar::new(interval_secs);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:25.cyan/blue}] {pos}/{len}s")
            .unwrap()
            .progress_chars("=>-"),
    );
    pb.set_message("next image in");

    let total = Duration::from_secs(interval_secs);
    let start = Instant::now();
    loop {
        let elapsed = start.elapsed();
        if elapsed >= total {
            break;
        }
        pb.set_position(elapsed.as_secs());
        sleep(Duration::from_millis(timeouts::PROGRESS_BAR_TICK_MS)).await;
    }

    pb.finish_and_clear();
}
