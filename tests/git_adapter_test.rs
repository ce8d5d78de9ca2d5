//! Integration tests for the git adapter against real repositories.

mod common;

use common::TestRepo;
use gemmit::error::GitError;
use gemmit::git::{get_changed_files, get_diff};

#[tokio::test]
async fn test_get_diff_clean_worktree_reports_no_changes() {
    let repo = TestRepo::new();
    repo.commit_file("a.txt", "hello\n", "init");

    let err = get_diff(repo.path(), false).await.unwrap_err();
    assert!(matches!(err, GitError::NoChanges { staged: false }));
    assert_eq!(err.to_string(), "No changes detected.");
}

#[tokio::test]
async fn test_get_diff_empty_repo_reports_no_changes() {
    let repo = TestRepo::new();

    let err = get_diff(repo.path(), false).await.unwrap_err();
    assert!(matches!(err, GitError::NoChanges { staged: false }));
}

#[tokio::test]
async fn test_get_diff_contains_modification() {
    let repo = TestRepo::new();
    repo.commit_file("a.txt", "old line\n", "init");
    repo.write_file("a.txt", "new line\n");

    let diff = get_diff(repo.path(), false).await.unwrap();
    assert!(diff.contains("-old line"));
    assert!(diff.contains("+new line"));
}

#[tokio::test]
async fn test_get_diff_staged_requires_staged_changes() {
    let repo = TestRepo::new();
    repo.commit_file("a.txt", "old\n", "init");
    repo.write_file("a.txt", "new\n");

    // Modified but unstaged: the staged diff is empty.
    let err = get_diff(repo.path(), true).await.unwrap_err();
    assert!(matches!(err, GitError::NoChanges { staged: true }));
    assert_eq!(err.to_string(), "No staged changes detected.");

    repo.stage("a.txt");
    let diff = get_diff(repo.path(), true).await.unwrap();
    assert!(diff.contains("+new"));
}

#[tokio::test]
async fn test_fully_staged_change_leaves_worktree_diff_empty() {
    let repo = TestRepo::new();
    repo.commit_file("a.txt", "old\n", "init");
    repo.write_file("a.txt", "new\n");
    repo.stage("a.txt");

    // `git diff` compares worktree to index, which now agree.
    let err = get_diff(repo.path(), false).await.unwrap_err();
    assert!(matches!(err, GitError::NoChanges { staged: false }));
}

#[tokio::test]
async fn test_get_changed_files_staged_filter() {
    let repo = TestRepo::new();
    repo.commit_file("a.txt", "old\n", "init");

    // Staged modification plus an untracked file.
    repo.write_file("a.txt", "new\n");
    repo.stage("a.txt");
    repo.write_file("b.txt", "untracked\n");

    let staged = get_changed_files(repo.path(), true).await.unwrap();
    assert_eq!(staged, vec!["a.txt"]);

    let all = get_changed_files(repo.path(), false).await.unwrap();
    assert_eq!(all, vec!["a.txt", "b.txt"]);
}

#[tokio::test]
async fn test_get_changed_files_staged_addition() {
    let repo = TestRepo::new();
    repo.commit_file("a.txt", "content\n", "init");

    repo.write_file("new.txt", "fresh\n");
    repo.stage("new.txt");

    let staged = get_changed_files(repo.path(), true).await.unwrap();
    assert_eq!(staged, vec!["new.txt"]);
}

#[tokio::test]
async fn test_get_changed_files_clean_worktree_is_empty() {
    let repo = TestRepo::new();
    repo.commit_file("a.txt", "content\n", "init");

    let files = get_changed_files(repo.path(), false).await.unwrap();
    assert!(files.is_empty());
}
