use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use clover_merge::{convert, ingest, merge, output, prefix};

/// Token accepted by --remove-prefix to mean "strip the CI workspace root".
const GITHUB_WORKSPACE_TOKEN: &str = "github_workspace";

/// clover-merge — Merge Clover XML coverage reports (e.g. from parallel test
/// shards) into a single SimpleCov-style coverage.json.
#[derive(Parser)]
#[command(name = "clover-merge", version, about)]
struct Cli {
    /// Glob pattern matching the Clover XML reports to merge.
    pattern: String,

    /// Path prefix to strip from file paths so they become repo-relative.
    /// Pass "github_workspace" to use the GITHUB_WORKSPACE environment
    /// variable. A trailing '/' is appended if missing.
    #[arg(long, default_value = "")]
    remove_prefix: String,

    /// Where to write the merged JSON.
    #[arg(long, default_value = "coverage.json")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    log::info!("Coverage file pattern: {}", cli.pattern);
    let files = ingest::expand(&cli.pattern)?;
    log::info!(
        "Coverage files: {}",
        files
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let reports = ingest::read_reports(&files).context("Failed to read coverage reports")?;

    let file_maps = convert::to_file_maps(reports.iter().flat_map(|r| &r.files));
    log::debug!("Converted coverage: {file_maps:?}");

    let merged = merge::merge(file_maps);
    log::debug!("Merged coverage: {merged:?}");

    let prefix_str = resolve_prefix(&cli.remove_prefix)
        .context("Failed to resolve the prefix to remove")?;
    let result = prefix::remove_prefix(merged, &prefix_str);
    log::debug!("With prefixes removed: {result:?}");

    let written = output::write(&result, &cli.output)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;
    log::info!("Wrote merged coverage to {}", written.display());
    println!("{}", written.display());

    Ok(())
}

/// Resolve the --remove-prefix value: substitute the workspace-root token
/// from the environment, then make sure a non-empty prefix ends with '/'
/// (diffs and review tools use repo-relative paths, so the separator itself
/// must go too).
fn resolve_prefix(raw: &str) -> Result<String> {
    let mut prefix = if raw == GITHUB_WORKSPACE_TOKEN {
        std::env::var("GITHUB_WORKSPACE")
            .context("--remove-prefix=github_workspace but GITHUB_WORKSPACE is not set")?
    } else {
        raw.to_string()
    };

    if !prefix.is_empty() && !prefix.ends_with('/') {
        prefix.push('/');
    }

    Ok(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefix_empty() {
        assert_eq!(resolve_prefix("").unwrap(), "");
    }

    #[test]
    fn test_resolve_prefix_appends_slash() {
        assert_eq!(resolve_prefix("/workspace").unwrap(), "/workspace/");
        assert_eq!(resolve_prefix("/workspace/").unwrap(), "/workspace/");
    }
}
