use std::path::Path;

use dialoguer::Confirm;
use thiserror::Error;
use tracing::{info, warn};

use bump_changelog::{BatchStamp, ChangelogEntry, prepend_to_files};
use bump_core::{Author, Classification, VersionPolicy};
use bump_git::Repository;
use bump_scan::{changes_files, rewrite_versions, scan_repository};

use crate::commands::{BumpArgs, error_chain};
use crate::config::{BumpConfig, CONFIG_FILE};
use crate::error::{CliError, Result};
use crate::report::{Outcome, Report};
use crate::repos::{Checkout, discover};

/// Anything that can go wrong while processing a single checkout. Caught
/// at the loop boundary; never aborts the batch.
#[derive(Debug, Error)]
enum RepoError {
    #[error(transparent)]
    Scan(#[from] bump_scan::ScanError),

    #[error(transparent)]
    Changelog(#[from] bump_changelog::ChangelogError),

    #[error(transparent)]
    Git(#[from] bump_git::GitError),

    #[error("confirmation prompt failed")]
    Prompt(#[source] std::io::Error),
}

pub(crate) fn run(args: &BumpArgs, checkouts: &Path) -> Result<()> {
    let policy = VersionPolicy::new(&args.policy.target_version, &args.policy.alternate_version)?;

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| checkouts.join(CONFIG_FILE));
    let config = BumpConfig::load(&config_path)?;

    let author = args
        .author
        .clone()
        .or_else(|| config.author.clone())
        .ok_or(CliError::MissingAuthor)?;
    let bug = args
        .bug
        .clone()
        .or_else(|| config.bug.clone())
        .ok_or(CliError::MissingBug)?;

    // One timestamp for the whole batch, so every updated repository
    // carries the same changelog header.
    let stamp = BatchStamp::now();

    let repos = discover(checkouts, args.policy.repo.as_deref())?;

    let mut report = Report::new();
    for checkout in repos {
        let outcome = if config.is_excluded(&checkout.name) {
            Outcome::Excluded
        } else {
            process(&checkout, &policy, &author, &bug, &stamp, args)
        };

        if let Outcome::Failed(reason) = &outcome {
            warn!(repo = %checkout.name, %reason, "repository failed, continuing");
        }
        report.record(checkout.name, outcome);
    }

    print!("{}", report.render());
    Ok(())
}

fn process(
    checkout: &Checkout,
    policy: &VersionPolicy,
    author: &Author,
    bug: &str,
    stamp: &BatchStamp,
    args: &BumpArgs,
) -> Outcome {
    match try_process(checkout, policy, author, bug, stamp, args) {
        Ok(outcome) => outcome,
        Err(error) => Outcome::Failed(error_chain(&error)),
    }
}

fn try_process(
    checkout: &Checkout,
    policy: &VersionPolicy,
    author: &Author,
    bug: &str,
    stamp: &BatchStamp,
    args: &BumpArgs,
) -> std::result::Result<Outcome, RepoError> {
    let scan = scan_repository(&checkout.path, policy)?;

    let Classification::Eligible { new_version } = scan.classification else {
        return Ok(Outcome::Classified(scan.classification));
    };

    if args.dry_run {
        return Ok(Outcome::WouldBump { new_version });
    }

    // Open the repository before rewriting: a checkout with unrelated
    // edits must not have them swept into the bump commit.
    let repo = if args.no_commit {
        None
    } else {
        let repo = Repository::open(&checkout.path)?;
        if !repo.is_working_tree_clean()? {
            return Ok(Outcome::DirtyWorkTree);
        }
        Some(repo)
    };

    info!(
        repo = %checkout.name,
        from = ?scan.versions,
        to = %new_version,
        "updating repository"
    );

    rewrite_versions(&scan.spec_files, &new_version)?;

    let entry = ChangelogEntry::new(stamp.clone(), author.clone(), new_version.clone(), bug);
    prepend_to_files(&changes_files(&checkout.path), &entry)?;

    let Some(repo) = repo else {
        return Ok(Outcome::Bumped {
            new_version,
            sha: None,
        });
    };

    if args.confirm && !confirmed(&repo, &checkout.name)? {
        return Ok(Outcome::Declined);
    }

    let commit = repo.commit_all(&format!("Bump version to {new_version}"))?;

    Ok(Outcome::Bumped {
        new_version,
        sha: Some(commit.sha),
    })
}

fn confirmed(repo: &Repository, name: &str) -> std::result::Result<bool, RepoError> {
    println!("{}", repo.workdir_diff()?);

    Confirm::new()
        .with_prompt(format!("Commit version bump for {name}?"))
        .default(false)
        .interact()
        .map_err(|e| match e {
            dialoguer::Error::IO(io_err) => RepoError::Prompt(io_err),
        })
}
