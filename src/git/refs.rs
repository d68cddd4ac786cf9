//! Reference enumeration and branch checkout inside a fresh clone

use super::common::{non_empty_lines, run_git};
use super::error::CloneError;
use crate::constants::git::REMOTE_NAME;
use crate::logger::Logger;
use crate::utils::CancelFlag;
use std::path::Path;

/// Remote-tracking branches of `origin`, symbolic refs such as `origin/HEAD` excluded
pub fn remote_branches(repo_dir: &Path) -> Result<Vec<String>, CloneError> {
    let prefix = format!("refs/remotes/{REMOTE_NAME}/");
    let output = run_git(
        repo_dir,
        &[
            "for-each-ref",
            "--format=%(refname:short)\t%(symref)",
            prefix.as_str(),
        ],
        "for-each-ref",
    )?;

    Ok(non_empty_lines(&output)
        .filter_map(|line| {
            let (name, symref) = line.split_once('\t').unwrap_or((line, ""));
            symref.trim().is_empty().then(|| name.trim().to_string())
        })
        .collect())
}

/// All tags of the repository
pub fn tags(repo_dir: &Path) -> Result<Vec<String>, CloneError> {
    let output = run_git(
        repo_dir,
        &["for-each-ref", "--format=%(refname:short)", "refs/tags/"],
        "for-each-ref",
    )?;

    Ok(non_empty_lines(&output).map(str::to_string).collect())
}

/// Local branch name for a remote-tracking branch (`origin/x` -> `x`)
pub fn local_branch_name(remote_branch: &str) -> &str {
    remote_branch
        .strip_prefix(REMOTE_NAME)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(remote_branch)
}

/// Pull, then force-checkout a same-named local branch for every remote branch
///
/// Pull failures are only warnings; a checkout failure is logged and the loop
/// moves on to the next branch. Returns the number of branches checked out.
pub fn checkout_all_branches(
    repo_dir: &Path,
    branches: &[String],
    logger: &Logger,
    label: &str,
    cancel: &CancelFlag,
) -> usize {
    let mut checked_out = 0;

    for (idx, branch) in branches.iter().enumerate() {
        if cancel.is_cancelled() {
            logger.warn(
                label,
                &format!(
                    "Cancelled, skipping checkout of {} remaining branch(es)",
                    branches.len() - idx
                ),
            );
            break;
        }

        let local = local_branch_name(branch);

        if let Err(e) = run_git(repo_dir, &["pull", "--ff-only", REMOTE_NAME], "pull") {
            logger.warn(label, &format!("Pull before checking out {local} failed: {e}"));
        }

        logger.info(label, &format!("Checking out branch: {local}"));
        match run_git(
            repo_dir,
            &["checkout", "--force", "-B", local, branch.as_str()],
            "checkout",
        ) {
            Ok(_) => checked_out += 1,
            Err(e) => logger.error(label, &format!("Error checking out branch {local}: {e}")),
        }
    }

    checked_out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_branch_name() {
        assert_eq!(local_branch_name("origin/main"), "main");
        assert_eq!(local_branch_name("origin/feature/login"), "feature/login");
        assert_eq!(local_branch_name("upstream/main"), "upstream/main");
        assert_eq!(local_branch_name("originals"), "originals");
    }

    #[test]
    fn test_checkout_stops_when_cancelled() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let cancel = CancelFlag::new();
        cancel.cancel();

        let checked_out = checkout_all_branches(
            temp_dir.path(),
            &["origin/main".to_string()],
            &Logger::default(),
            "repo",
            &cancel,
        );
        assert_eq!(checked_out, 0);
    }
}
