use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "readhover")]
#[command(about = "Look up Readwise highlights in a notes vault")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Args, Clone)]
pub struct VaultArg {
    /// Vault root directory.
    #[arg(long, env = "READHOVER_VAULT", default_value = ".")]
    pub vault: PathBuf,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the highlight a link points at.
    Lookup {
        url: String,
        #[command(flatten)]
        vault: VaultArg,
        /// Stage the clipboard copy and print what gets copied.
        #[arg(long)]
        copy: bool,
        /// Copy as if alt were held (bare article URL).
        #[arg(long, requires = "copy")]
        alt: bool,
        /// Copy as if meta were held (article URL with text fragment).
        #[arg(long, requires = "copy")]
        meta: bool,
    },
    Settings {
        #[command(subcommand)]
        cmd: SettingsCmd,
    },
}

#[derive(Subcommand)]
pub enum SettingsCmd {
    Show {
        #[command(flatten)]
        vault: VaultArg,
    },
    SetHost {
        host: String,
        #[command(flatten)]
        vault: VaultArg,
    },
    SetDelay {
        millis: u64,
        #[command(flatten)]
        vault: VaultArg,
    },
}
