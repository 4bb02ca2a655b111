//! Concurrent invocations against one repository.
//!
//! Separate processes committing at the same time must never produce
//! duplicate snapshot ids or lose a snapshot.

use std::collections::HashSet;
use std::fs;
use std::process::{Command, Stdio};
use std::thread;

use tempfile::TempDir;

use myvcs::core::paths::RepoPaths;
use myvcs::core::types::{SnapshotId, TrackedName};
use myvcs::engine::{self, Request, Response};
use myvcs::repo::{HistoryIndex, Repository};

const WRITERS: usize = 4;
const COMMITS_EACH: usize = 5;

#[test]
fn parallel_processes_commit_without_collisions() {
    let dir = TempDir::new().unwrap();
    let bin = assert_cmd::cargo::cargo_bin("myvcs");

    let run = |args: &[&str]| {
        let status = Command::new(&bin)
            .args(args)
            .current_dir(dir.path())
            .env_remove("MYVCS_REPO")
            .env_remove("MYVCS_CONFIG")
            .env_remove("XDG_CONFIG_HOME")
            .env("HOME", dir.path())
            .stdout(Stdio::null())
            .status()
            .expect("spawn myvcs");
        assert!(status.success(), "myvcs {:?} failed", args);
    };

    run(&["init"]);
    let files: Vec<String> = (0..WRITERS).map(|i| format!("file{i}.txt")).collect();
    for file in &files {
        fs::write(dir.path().join(file), file).unwrap();
        run(&["add", file]);
    }

    thread::scope(|scope| {
        for file in &files {
            let run = &run;
            scope.spawn(move || {
                for _ in 0..COMMITS_EACH {
                    run(&["commit", file]);
                }
            });
        }
    });

    let repo = Repository::open(dir.path().join("MyRepo")).unwrap();
    let commits = repo.history().list_commits().unwrap();
    assert_eq!(commits.len(), WRITERS * COMMITS_EACH);

    let timestamps: HashSet<_> = commits.iter().map(|id| id.timestamp).collect();
    assert_eq!(timestamps.len(), commits.len(), "timestamps are repository-unique");

    for file in &files {
        let history = repo
            .history()
            .timestamps_for(&TrackedName::new(file.as_str()).unwrap())
            .unwrap();
        assert_eq!(history.len(), COMMITS_EACH);
        assert!(history.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn parallel_threads_commit_same_file() {
    let dir = TempDir::new().unwrap();
    let repo = Repository::at(dir.path().join("MyRepo"));
    repo.init().unwrap();
    let name = TrackedName::new("shared.txt").unwrap();
    repo.add(&name, b"shared").unwrap();

    let ids: Vec<SnapshotId> = thread::scope(|scope| {
        let handles: Vec<_> = (0..WRITERS)
            .map(|_| {
                scope.spawn(|| {
                    let repo = Repository::open(dir.path().join("MyRepo")).unwrap();
                    (0..COMMITS_EACH)
                        .map(|_| repo.commit(&name).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), WRITERS * COMMITS_EACH);
    assert_eq!(
        repo.history().timestamps_for(&name).unwrap().len(),
        WRITERS * COMMITS_EACH
    );
}

#[test]
fn commit_with_working_copy_is_not_split_by_concurrent_add() {
    const ROUNDS: usize = 200;

    let dir = TempDir::new().unwrap();
    let paths = RepoPaths::in_workdir(dir.path(), "MyRepo");
    engine::execute(&paths, Request::Init).unwrap();
    engine::execute(
        &paths,
        Request::Add {
            name: "f".into(),
            content: b"B".to_vec(),
        },
    )
    .unwrap();

    let committed: Vec<SnapshotId> = thread::scope(|scope| {
        let committer = scope.spawn(|| {
            (0..ROUNDS)
                .map(|_| {
                    let request = Request::Commit {
                        name: "f".into(),
                        refresh: Some(b"A".to_vec()),
                    };
                    match engine::execute(&paths, request).unwrap() {
                        Response::Committed { id } => id,
                        other => panic!("unexpected {other:?}"),
                    }
                })
                .collect()
        });
        scope.spawn(|| {
            for _ in 0..ROUNDS {
                let request = Request::Add {
                    name: "f".into(),
                    content: b"B".to_vec(),
                };
                engine::execute(&paths, request).unwrap();
            }
        });
        committer.join().unwrap()
    });

    let store = Repository::open(paths.root()).unwrap().store();
    let mismatched = committed
        .iter()
        .filter(|id| store.read(id).unwrap() != b"A")
        .count();
    assert_eq!(mismatched, 0, "snapshots must hold the refreshed content");
}
