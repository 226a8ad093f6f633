use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::fixture::ChildPath;
use assert_fs::prelude::*;

pub fn mediaorg() -> Command {
    Command::cargo_bin("mediaorg").unwrap()
}

/// Create a directory of files whose contents carry no readable metadata.
pub fn setup_source_dir(temp_dir: &TempDir, names: &[&str]) -> ChildPath {
    let source_dir = temp_dir.child("source");
    source_dir.create_dir_all().unwrap();
    for name in names {
        source_dir.child(name).write_str("not really a photo").unwrap();
    }
    source_dir
}
