//! localterra-genesis
//!
//! Rewrites an exported genesis for LocalTerra and prints the result to
//! stdout. The input file is never modified.
//!
//! Usage:
//!   localterra-genesis --genesis <path> [--indent] migrate-code <codeID=path>...
//!   localterra-genesis --genesis <path> [--indent] migrate-into-localterra <voting-power>
//!                      [--initial-height <height>] [--profile <path>]

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use localterra_core::GenesisError;
use localterra_genesis::{
    migrate_code, migrate_into_localterra, CodeArg, Genesis, LocalValidatorProfile,
};

// ── CLI definition ────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "localterra-genesis",
    version,
    about = "Turn an exported Terra genesis into a LocalTerra genesis"
)]
struct Args {
    /// Genesis file to read.
    #[arg(long, global = true, default_value = "genesis.json")]
    genesis: PathBuf,

    /// Pretty-print the output with tab indentation.
    #[arg(long, global = true, default_value_t = false)]
    indent: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Overwrite the bytecode and code hash of stored codes with new wasm files.
    MigrateCode {
        /// One or more `codeID=path-to-wasm-file` pairs.
        #[arg(required = true, value_name = "CODE_ID=PATH")]
        codes: Vec<CodeArg>,
    },

    /// Append the LocalTerra validator and accounts and set the chain ID.
    MigrateIntoLocalterra {
        /// Voting power of the local validator (bonds power x 1,000,000 uluna).
        voting_power: u64,

        /// New initial height. "0" keeps the height of the input genesis.
        #[arg(long, default_value = "0")]
        initial_height: String,

        /// JSON file overriding fields of the built-in LocalTerra validator profile.
        #[arg(long)]
        profile: Option<PathBuf>,
    },
}

// ── Main ─────────────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    // stdout carries the genesis; logs go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn,localterra=info")),
        )
        .init();

    let args = Args::parse();
    let genesis_path = expand_tilde(&args.genesis);
    let mut genesis = load_genesis(&genesis_path)?;

    match args.command {
        Command::MigrateCode { codes } => cmd_migrate_code(&mut genesis, &codes)?,

        Command::MigrateIntoLocalterra {
            voting_power,
            initial_height,
            profile,
        } => {
            let profile = load_profile(profile.as_deref())?;
            migrate_into_localterra(&mut genesis, &profile, voting_power, &initial_height)
                .context("migrating genesis into localterra")?;
        }
    }

    write_genesis(&genesis, args.indent)
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn cmd_migrate_code(genesis: &mut Genesis, codes: &[CodeArg]) -> anyhow::Result<()> {
    for arg in codes {
        let path = expand_tilde(&arg.path);
        let code = read_file(&path)
            .with_context(|| format!("loading wasm file for code {}", arg.code_id))?;
        migrate_code(genesis, arg.code_id, &code)
            .with_context(|| format!("migrating code {} from {}", arg.code_id, path.display()))?;
    }
    info!(count = codes.len(), "codes migrated");
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_genesis(path: &Path) -> anyhow::Result<Genesis> {
    let data = read_file(path).context("failed to read genesis file")?;
    let genesis = Genesis::from_slice(&data)
        .with_context(|| format!("failed to parse genesis {}", path.display()))?;
    info!(path = %path.display(), bytes = data.len(), "genesis loaded");
    Ok(genesis)
}

/// Load the validator profile override, or the built-in LocalTerra profile.
fn load_profile(path: Option<&Path>) -> anyhow::Result<LocalValidatorProfile> {
    let Some(path) = path else {
        return Ok(LocalValidatorProfile::default());
    };
    let path = expand_tilde(path);
    let json = std::fs::read_to_string(&path).map_err(|source| GenesisError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let profile = LocalValidatorProfile::from_json(&json)
        .with_context(|| format!("loading validator profile {}", path.display()))?;
    info!(path = %path.display(), chain_id = %profile.chain_id, "validator profile loaded");
    Ok(profile)
}

fn read_file(path: &Path) -> Result<Vec<u8>, GenesisError> {
    std::fs::read(path).map_err(|source| GenesisError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn write_genesis(genesis: &Genesis, indent: bool) -> anyhow::Result<()> {
    let bytes = genesis.to_json(indent).context("failed to marshal genesis")?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&bytes).context("writing genesis to stdout")?;
    stdout.flush()?;
    Ok(())
}

/// Expand a leading `~` to the user's home directory (`HOME` or `USERPROFILE`).
fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Ok(home) = std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE")) {
            return PathBuf::from(home).join(stripped);
        }
    }
    path.to_path_buf()
}
