//! Sprig - resolve a design document to a UI node tree
//!
//! Usage: sprig <layout.json> [assets.json]
//!
//! Reads a designer-exported layout document, resolves it against the
//! optional asset manifest, and writes the resolved tree as pretty
//! JSON on stdout. Diagnostics go to stderr.

use std::fs;
use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use sprig_cli::Manifest;
use sprig_engine::elements::{StaticFontProvider, StaticPrefabProvider, StaticSpriteProvider};
use sprig_engine::{Builder, Providers};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let layout_path = args
        .next()
        .context("usage: sprig <layout.json> [assets.json]")?;
    let manifest_path = args.next();

    let text = fs::read_to_string(&layout_path)
        .with_context(|| format!("reading layout document {layout_path}"))?;

    let (sprites, fonts) = match &manifest_path {
        Some(path) => {
            let manifest_text =
                fs::read_to_string(path).with_context(|| format!("reading asset manifest {path}"))?;
            Manifest::parse(&manifest_text)
                .with_context(|| format!("parsing asset manifest {path}"))?
                .into_providers()
        }
        None => (StaticSpriteProvider::new(), StaticFontProvider::new()),
    };
    let prefabs = StaticPrefabProvider::new();

    let output = Builder::new()
        .build_str(
            &text,
            Providers {
                sprites: &sprites,
                fonts: &fonts,
                prefabs: &prefabs,
            },
        )
        .with_context(|| format!("resolving {layout_path}"))?;

    if !output.warnings.is_empty() {
        tracing::info!("resolved with {} warning(s)", output.warnings.len());
    }

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    serde_json::to_writer_pretty(&mut stdout, &output.root)?;
    writeln!(stdout)?;

    Ok(())
}
