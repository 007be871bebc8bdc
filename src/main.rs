//! verlog - CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use verlog::changelog::{CHANGELOG_HEADER, build_markdown, transform_commit, write_changelog};
use verlog::error::VersionError;
use verlog::git::{
    collect_commits, collect_tag_names, github_repo_url, open_repository, resolve_ref,
};
use verlog::version::{next_hotfix_version, next_version};

/// Derive version tags and generate changelogs from git history.
#[derive(Parser, Debug)]
#[command(name = "verlog")]
#[command(about = "Derive version tags and generate changelogs from git history")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a changelog section from commits between two refs
    Changelog {
        /// Ref the comparison starts from (e.g. origin/release)
        target: String,

        /// Ref the comparison ends at (e.g. origin/main)
        origin: String,

        /// Output file path; prints to stdout when omitted
        output: Option<PathBuf>,

        /// Version string for the section heading
        version: Option<String>,
    },

    /// Derive the next version tag from existing tags
    Version {
        /// Bump kind: major or patch
        bump: Option<String>,

        /// Target channel: release or rc
        target: Option<String>,

        /// Derive a hotfix tag for the latest stable base instead
        #[arg(long)]
        hotfix: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Changelog {
            target,
            origin,
            output,
            version,
        } => run_changelog(&target, &origin, output.as_deref(), version.as_deref()),
        Commands::Version {
            bump,
            target,
            hotfix,
        } => run_version(bump.as_deref(), target.as_deref(), hotfix),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Generate and write (or print) the changelog section.
fn run_changelog(
    target: &str,
    origin: &str,
    output: Option<&std::path::Path>,
    version: Option<&str>,
) -> Result<ExitCode> {
    let repo = open_repository(".")
        .context("Not a git repository. Run verlog from within a git repository.")?;

    let target_oid = resolve_ref(&repo, target)
        .with_context(|| format!("Failed to resolve ref '{target}'"))?;
    let origin_oid = resolve_ref(&repo, origin)
        .with_context(|| format!("Failed to resolve ref '{origin}'"))?;

    // Link-less entries when the remote can't be parsed.
    let repo_url = github_repo_url(&repo);

    let commits = collect_commits(&repo, target_oid, origin_oid, repo_url.as_deref())
        .context("Failed to collect commits")?;

    let classified: Vec<_> = commits
        .iter()
        .map(|c| transform_commit(&c.subject, &c.body))
        .collect();

    let section = build_markdown(version.unwrap_or(""), &classified);

    match output {
        Some(path) => {
            write_changelog(path, &section).context("Failed to write changelog")?;
            println!("✅ {} updated", path.display());
        }
        None => println!("{CHANGELOG_HEADER}{section}"),
    }

    Ok(ExitCode::SUCCESS)
}

/// Resolve and print the next version tag as `VERSION=<value>`.
fn run_version(bump: Option<&str>, target: Option<&str>, hotfix: bool) -> Result<ExitCode> {
    let repo = open_repository(".")
        .context("Not a git repository. Run verlog from within a git repository.")?;

    let tags = collect_tag_names(&repo).context("Failed to list tags")?;

    if hotfix {
        let version = next_hotfix_version(&tags);
        println!("🚑 Next hotfix version: {version}");
        println!("VERSION={version}");
        return Ok(ExitCode::SUCCESS);
    }

    let (Some(bump), Some(target)) = (bump, target) else {
        eprintln!(
            "❌ Missing args.\n\
             Usage:\n  \
             verlog version <major|patch> <release|rc>\n  \
             verlog version --hotfix  # no bump/target required"
        );
        return Ok(ExitCode::FAILURE);
    };

    match next_version(&tags, bump, target) {
        Ok(version) => {
            if target == "rc" {
                println!("🚀 Next beta version: {version}");
            } else {
                println!("🚀 Next release version: {version}");
            }
            println!("VERSION={version}");
            Ok(ExitCode::SUCCESS)
        }
        Err(VersionError::InvalidTarget(_)) => {
            eprintln!("❌ Invalid target. Use 'rc' or 'release'.");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
