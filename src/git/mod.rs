//! Change-set extraction from a local git repository.
//!
//! Builds the same changed-file descriptors a hosted pull request would
//! provide by diffing two revisions with libgit2. Each delta yields one
//! descriptor carrying the change status, addition/deletion counts, and
//! the rendered unified-diff patch text; binary deltas produce a
//! descriptor without a patch, which the analyzer skips over.
use std::error::Error;
use std::path::Path;

use git2::{Delta, DiffOptions, ObjectType, Repository, Tree};

use crate::analyzer::types::FileDescriptor;

/// Wrapper around a `git2::Repository` scoped to revision diffing.
pub struct ChangeSet {
    repo: Repository,
}

/// Map libgit2 delta kinds onto the wire status tags.
fn status_tag(status: Delta) -> &'static str {
    match status {
        Delta::Added => "added",
        Delta::Deleted => "removed",
        Delta::Renamed => "renamed",
        Delta::Copied => "copied",
        _ => "modified",
    }
}

impl ChangeSet {
    /// Open the git repository that contains `path`.
    pub fn open(path: &Path) -> Result<Self, Box<dyn Error>> {
        let repo = Repository::discover(path)?;
        Ok(Self { repo })
    }

    /// Resolve a revision string to the tree it points at.
    fn tree_for(&self, rev: &str) -> Result<Tree<'_>, Box<dyn Error>> {
        let object = self.repo.revparse_single(rev)?;
        let peeled = object.peel(ObjectType::Tree)?;
        peeled
            .into_tree()
            .map_err(|_| format!("{rev} does not resolve to a tree").into())
    }

    /// Diff `base..head` and emit one descriptor per changed file.
    pub fn pr_files(&self, base: &str, head: &str) -> Result<Vec<FileDescriptor>, Box<dyn Error>> {
        let base_tree = self.tree_for(base)?;
        let head_tree = self.tree_for(head)?;

        let mut opts = DiffOptions::new();
        let diff =
            self.repo
                .diff_tree_to_tree(Some(&base_tree), Some(&head_tree), Some(&mut opts))?;

        let mut files = Vec::new();
        for (idx, delta) in diff.deltas().enumerate() {
            let filename = delta
                .new_file()
                .path()
                .or_else(|| delta.old_file().path())
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_default();
            let status = status_tag(delta.status()).to_string();

            match git2::Patch::from_diff(&diff, idx)? {
                Some(mut patch) => {
                    let (_, additions, deletions) = patch.line_stats()?;
                    let buf = patch.to_buf()?;
                    files.push(FileDescriptor {
                        filename,
                        status,
                        additions,
                        deletions,
                        patch: Some(String::from_utf8_lossy(&buf).into_owned()),
                    });
                }
                // Binary delta: no textual patch to analyze.
                None => files.push(FileDescriptor {
                    filename,
                    status,
                    additions: 0,
                    deletions: 0,
                    patch: None,
                }),
            }
        }

        Ok(files)
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
