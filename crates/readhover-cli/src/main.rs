//! readhover: look up Readwise highlights from a hovered link.

use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use readhover_core::{JsonSettingsFile, Settings, SettingsStore};
use readhover_runtime::{HoverSession, HoverState, ModifierKeys};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod host;
mod vault;

use cli::{Cli, Command, SettingsCmd};
use host::{LogNotifier, StdoutClipboard};
use vault::FsVault;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Lookup {
            url,
            vault,
            copy,
            alt,
            meta,
        } => {
            let found = lookup(&vault.vault, &url, copy, ModifierKeys { alt, meta }).await?;
            if !found {
                std::process::exit(1);
            }
        }
        Command::Settings { cmd } => settings(cmd)?,
    }
    Ok(())
}

async fn lookup(vault_dir: &Path, url: &str, copy: bool, keys: ModifierKeys) -> anyhow::Result<bool> {
    let settings = Settings::load_from(&JsonSettingsFile::for_vault(vault_dir))?;
    if !settings.is_trigger_link(url) {
        anyhow::bail!(
            "{} is not a highlight link (expected it to contain {:?})",
            url,
            settings.trigger_host
        );
    }

    let vault = FsVault::open(vault_dir)?;
    info!("Scanning {}", vault.root().display());

    let mut session = HoverSession::new(
        settings,
        Arc::new(vault),
        Arc::new(StdoutClipboard),
        Arc::new(LogNotifier),
    );

    let Some(result) = session.on_hover(url).await else {
        return Ok(false);
    };
    println!("{}", result.popup_text());

    if !copy {
        session.on_pointer_leave();
        return Ok(true);
    }

    session.on_pointer_move(keys);
    match session.take_pending() {
        Some(pending) => {
            if let HoverState::Committed(choice) = pending.finished().await {
                info!("Copied {:?}", choice);
            }
        }
        None => eprintln!("Nothing to copy: the note has no complete Metadata section"),
    }
    Ok(true)
}

fn settings(cmd: SettingsCmd) -> anyhow::Result<()> {
    match cmd {
        SettingsCmd::Show { vault } => {
            let settings = Settings::load_from(&JsonSettingsFile::for_vault(&vault.vault))?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        SettingsCmd::SetHost { host, vault } => {
            update_settings(&vault.vault, |s| s.set_trigger_host(&host))?;
        }
        SettingsCmd::SetDelay { millis, vault } => {
            update_settings(&vault.vault, |s| {
                s.copy_delay_ms = millis;
                Ok(())
            })?;
        }
    }
    Ok(())
}

fn update_settings(
    vault_dir: &Path,
    change: impl FnOnce(&mut Settings) -> readhover_core::Result<()>,
) -> anyhow::Result<()> {
    let store = JsonSettingsFile::for_vault(vault_dir);
    let mut settings = Settings::load_from(&store)?;
    change(&mut settings)?;
    store.save(&settings)?;
    info!("Saved {}", store.path().display());
    Ok(())
}
