use std::fs;
use std::io::Read;
use std::sync::Arc;

use osfs::utils::logging::setup_logging;
use osfs::{DirBatch, ErrorKind, FileSystem, FixedVolumes, MultiRootFs, SingleRootFs};

// Helper to build a sandbox standing in for the host root
fn setup_test_env() -> tempfile::TempDir {
    setup_logging();
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("etc")).unwrap();
    fs::create_dir_all(dir.path().join("var/log")).unwrap();
    fs::write(dir.path().join("etc/hosts"), b"127.0.0.1 localhost\n").unwrap();
    fs::write(dir.path().join("etc/passwd"), b"root:x:0:0\n").unwrap();
    fs::write(dir.path().join("etc/group"), b"root:x:0:\n").unwrap();
    dir
}

fn names(entries: &[osfs::DirEntry]) -> Vec<String> {
    entries.iter().map(|e| e.name().to_string()).collect()
}

fn every_operation_fails_invalid<F: FileSystem>(fs: &F, name: &str) {
    assert!(fs.open(name).unwrap_err().is_invalid(), "open {name:?}");
    assert!(fs.stat(name).unwrap_err().is_invalid(), "stat {name:?}");
    assert!(fs.read_file(name).unwrap_err().is_invalid(), "readfile {name:?}");
    assert!(fs.read_dir(name).unwrap_err().is_invalid(), "readdir {name:?}");
}

const MALFORMED: &[&str] = &[
    "", "/", "/etc", "etc/", "etc//hosts", "..", "./etc", "etc/.", "etc/..", "a/../b", "a/./b",
];

#[test]
fn test_malformed_paths_rejected_on_both_variants() {
    let dir = setup_test_env();
    let single = SingleRootFs::with_root(dir.path());
    let multi = MultiRootFs::new(FixedVolumes::from_letters("C"));

    for name in MALFORMED {
        every_operation_fails_invalid(&single, name);
        every_operation_fails_invalid(&multi, name);
    }
}

#[test]
fn test_single_root_scenario() {
    let dir = setup_test_env();
    let fs = SingleRootFs::with_root(dir.path());

    let err = fs.open("/").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidPath));
    assert_eq!(err.to_string(), "open /: invalid argument");

    assert!(fs.open(".").is_ok());
    assert!(fs.open("etc/hosts").is_ok());
    assert!(fs.read_file("etc/hosts").is_ok());
    assert!(fs.read_file(".").is_err());
    assert!(fs.read_dir(".").is_ok());
    assert!(fs.read_dir("etc/hosts").is_err());
}

#[test]
fn test_single_root_open_root_matches_host_root() {
    let dir = setup_test_env();
    let fs = SingleRootFs::with_root(dir.path());

    let via_open = fs.open(".").unwrap().stat().unwrap();
    let via_host = fs::metadata(dir.path()).unwrap();
    assert!(via_open.is_dir());
    assert_eq!(via_open.host().unwrap().is_dir(), via_host.is_dir());
    assert_eq!(via_open.modified().unwrap(), via_host.modified().unwrap());
}

#[test]
fn test_single_root_file_handle_reads_content() {
    let dir = setup_test_env();
    let fs = SingleRootFs::with_root(dir.path());

    let mut handle = fs.open("etc/hosts").unwrap();
    assert!(!handle.is_dir());

    let mut content = String::new();
    handle.read_to_string(&mut content).unwrap();
    assert_eq!(content, "127.0.0.1 localhost\n");
    assert_eq!(handle.stat().unwrap().name(), "hosts");

    assert!(handle.read_dir(-1).is_err());

    handle.close().unwrap();
    handle.close().unwrap();
    let err = handle.read(&mut [0u8; 4]).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Closed));
}

#[test]
fn test_single_root_directory_handle_pages() {
    let dir = setup_test_env();
    let fs = SingleRootFs::with_root(dir.path());

    let mut handle = fs.open("etc").unwrap();
    assert!(handle.is_dir());
    assert!(handle.read(&mut [0u8; 4]).unwrap_err().is_dir_error());

    let mut seen = Vec::new();
    loop {
        match handle.read_dir(2).unwrap() {
            DirBatch::Entries(entries) => seen.extend(names(&entries)),
            DirBatch::EndOfDirectory => break,
        }
    }
    assert_eq!(seen, ["group", "hosts", "passwd"]);
    assert!(handle.read_dir(-1).unwrap().into_entries().is_empty());
}

#[test]
fn test_single_root_entry_info() {
    let dir = setup_test_env();
    let fs = SingleRootFs::with_root(dir.path());

    let entries = fs.read_dir(".").unwrap();
    assert_eq!(names(&entries), ["etc", "var"]);
    assert!(entries.iter().all(|e| e.is_dir()));

    let entries = fs.read_dir("etc").unwrap();
    let hosts = entries.iter().find(|e| e.name() == "hosts").unwrap();
    let info = hosts.info().unwrap();
    assert_eq!(info.len(), 20);
    assert!(!info.mode().is_dir());
}

#[test]
fn test_errors_carry_logical_path() {
    let dir = setup_test_env();
    let fs = SingleRootFs::with_root(dir.path());

    let err = fs.read_file("var/log/missing.log").unwrap_err();
    assert_eq!(err.path(), "var/log/missing.log");
    assert!(err.is_not_exist());
    assert!(!err.to_string().contains(&*dir.path().to_string_lossy()));
}

#[test]
fn test_multi_root_scenario_single_volume() {
    setup_logging();
    let fs = MultiRootFs::new(FixedVolumes::from_letters("C"));

    let mut root = fs.open(".").unwrap();
    let first = root.read_dir(-1).unwrap();
    assert!(!first.is_end());
    assert_eq!(names(&first.into_entries()), ["C:"]);

    let second = root.read_dir(-1).unwrap();
    assert!(!second.is_end());
    assert!(second.into_entries().is_empty());
    assert!(root.read_dir(1).unwrap().is_end());

    assert!(fs.read_file(".").unwrap_err().is_dir_error());
    assert!(fs.read_file("C:").unwrap_err().is_dir_error());
    assert!(fs.stat(".").unwrap().is_dir());
    assert!(fs.stat("C:").unwrap().is_dir());
    assert_eq!(names(&fs.read_dir(".").unwrap()), ["C:"]);
}

#[test]
fn test_multi_root_no_volumes() {
    setup_logging();
    let fs = MultiRootFs::new(FixedVolumes::new(0));

    let err = fs.stat("C:").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::NotExist));

    let mut root = fs.open(".").unwrap();
    assert!(root.as_root().unwrap().is_exhausted());
    assert!(root.read_dir(5).unwrap().is_end());
    assert!(fs.read_dir(".").unwrap().is_empty());
}

#[test]
fn test_multi_root_missing_prefix_is_not_exist() {
    let fs = MultiRootFs::new(FixedVolumes::from_letters("CD"));
    for name in ["Windows", "Users/Public", "etc/hosts"] {
        for err in [
            fs.open(name).unwrap_err(),
            fs.stat(name).unwrap_err(),
            fs.read_file(name).unwrap_err(),
            fs.read_dir(name).unwrap_err(),
        ] {
            assert!(matches!(err.kind(), ErrorKind::NotExist), "{err}");
        }
    }
}

#[test]
fn test_multi_root_stat_tracks_live_mounts() {
    let probe = Arc::new(FixedVolumes::new(0));
    let fs = MultiRootFs::new(Arc::clone(&probe));

    for letter in 'A'..='Z' {
        let name = format!("{letter}:");
        assert!(fs.stat(&name).unwrap_err().is_not_exist());
        probe.mount(letter);
        assert!(fs.stat(&name).unwrap().is_synthetic());
    }
    assert_eq!(fs.volumes().unwrap().len(), 26);
}

#[test]
fn test_multi_root_pagination_covers_snapshot() {
    let fs = MultiRootFs::new(FixedVolumes::from_letters("ACDEGHXZ"));
    let expected = names(&fs.read_dir(".").unwrap());
    assert_eq!(expected.len(), 8);

    for counts in [vec![1isize; 9], vec![3, 3, 3], vec![-1], vec![2, 0], vec![7, 1, 1]] {
        let mut root = fs.open(".").unwrap();
        let mut seen = Vec::new();
        let mut ended = false;
        for count in counts {
            match root.read_dir(count).unwrap() {
                DirBatch::Entries(entries) => {
                    assert!(!ended || entries.is_empty());
                    seen.extend(names(&entries));
                }
                DirBatch::EndOfDirectory => {
                    assert!(count > 0);
                    ended = true;
                }
            }
        }
        assert_eq!(seen, expected);
    }
}

#[cfg(unix)]
#[test]
fn test_os_root_fs_on_single_root_host() {
    let fs = osfs::os_root_fs();
    assert!(fs.open("/").unwrap_err().is_invalid());
    assert!(fs.open(".").is_ok());
    assert!(fs.stat(".").unwrap().is_dir());
    if std::path::Path::new("/etc/hosts").is_file() {
        assert!(fs.open("etc/hosts").is_ok());
    }
}

#[cfg(windows)]
#[test]
fn test_os_root_fs_on_lettered_host() {
    let fs = osfs::os_root_fs();
    let volumes = names(&fs.read_dir(".").unwrap());
    assert!(!volumes.is_empty());
    assert!(fs.read_file(".").unwrap_err().is_dir_error());

    if volumes.iter().any(|v| v == "C:") {
        assert!(fs.open("C:").is_ok());
        assert!(fs.read_file("C:").unwrap_err().is_dir_error());
        if std::path::Path::new("C:\\Windows\\system.ini").is_file() {
            assert!(!fs.read_file("C:/Windows/system.ini").unwrap().is_empty());
        }
    }
}
