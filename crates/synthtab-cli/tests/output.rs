use std::fs;
use std::path::{Path, PathBuf};

use synthtab_cli::config::{DEFAULT_OUTPUT_FILE, OutputTarget, write_bytes_atomic};

fn temp_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("synthtab_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

#[test]
fn missing_out_means_stdout() {
    assert_eq!(OutputTarget::resolve(None), OutputTarget::Stdout);
    assert_eq!(
        OutputTarget::resolve(Some(Path::new("-"))),
        OutputTarget::Stdout
    );
}

#[test]
fn directory_out_gets_default_file_name() {
    let dir = temp_dir("out_dir");
    assert_eq!(
        OutputTarget::resolve(Some(dir.as_path())),
        OutputTarget::File(dir.join(DEFAULT_OUTPUT_FILE))
    );
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn file_out_is_used_as_is() {
    let path = Path::new("some/where/table.csv");
    assert_eq!(
        OutputTarget::resolve(Some(path)),
        OutputTarget::File(path.to_path_buf())
    );
}

#[test]
fn atomic_write_creates_parents_and_replaces_contents() {
    let dir = temp_dir("atomic");
    let path = dir.join("nested").join("table.csv");

    write_bytes_atomic(&path, b"a,b\n1,2\n").expect("first write");
    write_bytes_atomic(&path, b"a\n").expect("second write");

    assert_eq!(fs::read_to_string(&path).expect("read"), "a\n");
    let leftovers: Vec<_> = fs::read_dir(path.parent().expect("parent"))
        .expect("list dir")
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn file_target_writes_bytes() {
    let dir = temp_dir("target");
    let target = OutputTarget::resolve(Some(dir.as_path()));
    target.write(b"Age\n30\n").expect("write");

    let written = fs::read_to_string(dir.join(DEFAULT_OUTPUT_FILE)).expect("read");
    assert_eq!(written, "Age\n30\n");
    assert_eq!(target.to_string(), dir.join(DEFAULT_OUTPUT_FILE).display().to_string());

    fs::remove_dir_all(&dir).ok();
}
