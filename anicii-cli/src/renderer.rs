// ABOUTME: Invokes the external ascii-image-converter on a temporary image file
// ABOUTME: Streams converter output to the terminal and always removes the temp file

use crate::config::SlideshowConfig;
use crate::constants::renderer;
use anyhow::{anyhow, Context, Result};
use std::io::Write;
use std::path::Path;
use std::process::Stdio;
use tempfile::NamedTempFile;
use tokio::process::Command;

/// Probe for the converter binary. A missing binary is a fatal startup error
/// for the CLI; anything else the probe reports is left to surface later.
pub async fn ensure_installed() -> Result<()> {
    let probe = Command::new(renderer::BINARY)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await;

    match probe {
        Ok(_) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            Err(anyhow!("{} was not found on PATH", renderer::BINARY))
        }
        Err(err) => Err(err).with_context(|| format!("failed to probe {}", renderer::BINARY)),
    }
}

pub struct RendererInvoker {
    binary: String,
    color: bool,
    fill: bool,
}

impl RendererInvoker {
    pub fn from_config(config: &SlideshowConfig) -> Self {
        Self::with_binary(renderer::BINARY, config.color, config.fill)
    }

    /// Use a different converter binary. Used by tests to substitute a stub.
    pub fn with_binary(binary: impl Into<String>, color: bool, fill: bool) -> Self {
        Self {
            binary: binary.into(),
            color,
            fill,
        }
    }

    /// Write `bytes` to a temporary file, run the converter on it, and stream
    /// its stdout to the terminal. The temporary file is removed on every
    /// exit path; removal failures are logged and swallowed.
    ///
    /// The converter runs without a timeout, unlike the network calls. A hung
    /// converter stalls the loop.
    pub async fn render(&self, bytes: &[u8], source_url: &str) -> Result<()> {
        let temp = write_temp_image(bytes, source_url)?;
        let result = self.invoke(temp.path()).await;

        if let Err(err) = temp.close() {
            log::warn!("failed to remove temporary render file: {}", err);
        }

        result
    }

    async fn invoke(&self, path: &Path) -> Result<()> {
        let mut command = Command::new(&self.binary);
        command.args(renderer::BASE_ARGS);
        if self.color {
            command.arg(renderer::COLOR_FLAG);
        }
        if self.fill {
            command.arg(renderer::FILL_FLAG);
        }
        command
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped());

        let child = command
            .spawn()
            .with_context(|| format!("failed to start {}", self.binary))?;
        let output = child
            .wait_with_output()
            .await
            .with_context(|| format!("failed to wait for {}", self.binary))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!(
                "{} exited with {}: {}",
                self.binary,
                output.status,
                stderr.trim()
            ));
        }

        Ok(())
    }
}

fn write_temp_image(bytes: &[u8], source_url: &str) -> Result<NamedTempFile> {
    // Keep the source extension so the converter can sniff the format
    let suffix = extension_of(source_url)
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default();

    let mut file = tempfile::Builder::new()
        .prefix("anicii-")
        .suffix(&suffix)
        .tempfile()
        .context("failed to create temporary render file")?;
    file.write_all(bytes)
        .context("failed to write temporary render file")?;

    Ok(file)
}

fn extension_of(url: &str) -> Option<&str> {
    let without_query = url.split(['?', '#']).next().unwrap_or(url);
    let segment = without_query.rsplit('/').next()?;
    let (_, ext) = segment.rsplit_once('.')?;
    if ext.is_empty() || ext.len() > 5 {
        None
    } else {
        Some(ext)
    }
}
