//! `genjson-codegen` — generate JSON serializer headers from a declaration tree.
//!
//! Usage:
//!   genjson-codegen -i <tree.json> -o <output-dir> [-c genjson.toml] [--check]

mod config;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use genjson_codegen_lib::{
    commit_all, discover, discover_scopes, Codegen, CommitSummary, FileCommitter,
    SerializerGenerator,
};
use genjson_ir::DeclarationTree;
use tracing::info;

use config::GenConfig;

#[derive(Parser, Debug)]
#[command(name = "genjson-codegen")]
#[command(about = "Generate JSON serializer headers from a declaration tree")]
struct Args {
    /// Declaration tree (JSON) exported by the host tool
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory
    #[arg(short, long)]
    output: PathBuf,

    /// Optional genjson.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only report files that would change; fail if any would
    #[arg(long)]
    check: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    let summary = generate(&args)?;

    if args.check && summary.outdated > 0 {
        anyhow::bail!("{} generated file(s) are out of date", summary.outdated);
    }
    Ok(())
}

fn generate(args: &Args) -> anyhow::Result<CommitSummary> {
    let config = GenConfig::load(args.config.as_deref())?;

    info!("Reading declaration tree from {}", args.input.display());
    let input = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let tree: DeclarationTree = serde_json::from_str(&input)
        .with_context(|| format!("invalid declaration tree {}", args.input.display()))?;

    info!("GenJson code generation started.");
    let units = if config.scan.include_external {
        discover_scopes(&tree.scopes, &tree.sources)?
    } else {
        discover(&tree)?
    };

    let generator = SerializerGenerator::new(config.generator_options());
    let code = generator.generate(&units)?;

    let mut committer = if args.check {
        FileCommitter::check(&args.output)
    } else {
        FileCommitter::new(&args.output)
    };
    info!("Committing {} file(s) to {}", code.files.len(), committer.root().display());
    Ok(commit_all(&code, &mut committer)?)
}
