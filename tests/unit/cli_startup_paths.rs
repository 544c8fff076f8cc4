use super::{parse_args, resolve_startup_file, CliCommand, StartupFile};
use tempfile::tempdir;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn no_arg_starts_with_empty_document() {
    let dir = tempdir().unwrap();
    assert_eq!(resolve_startup_file(dir.path(), None).unwrap(), None);
}

#[test]
fn existing_relative_file_is_opened() {
    let dir = tempdir().unwrap();
    let cwd = dir.path();
    std::fs::create_dir_all(cwd.join("notes")).unwrap();
    let file = cwd.join("notes").join("a.txt");
    std::fs::write(&file, "hello\n").unwrap();

    let startup = resolve_startup_file(cwd, Some("notes/a.txt")).unwrap();

    assert_eq!(startup, Some(StartupFile::Existing(file)));
}

#[test]
fn missing_file_becomes_save_target() {
    let dir = tempdir().unwrap();
    let cwd = dir.path();

    let startup = resolve_startup_file(cwd, Some("draft.txt")).unwrap();

    assert_eq!(startup, Some(StartupFile::New(cwd.join("draft.txt"))));
    assert!(!cwd.join("draft.txt").exists());
}

#[test]
fn absolute_path_ignores_cwd() {
    let dir = tempdir().unwrap();
    let other = tempdir().unwrap();
    let file = other.path().join("b.txt");
    std::fs::write(&file, "").unwrap();

    let startup = resolve_startup_file(dir.path(), Some(file.to_str().unwrap())).unwrap();

    assert_eq!(startup, Some(StartupFile::Existing(file)));
}

#[test]
fn directory_arg_is_rejected() {
    let dir = tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("sub")).unwrap();

    let err = resolve_startup_file(dir.path(), Some("sub")).unwrap_err();

    assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
}

#[test]
fn parse_args_handles_flags_and_path() {
    assert_eq!(parse_args(args(&[])), Ok(CliCommand::Run(None)));
    assert_eq!(
        parse_args(args(&["a.txt"])),
        Ok(CliCommand::Run(Some("a.txt".to_string())))
    );
    assert_eq!(parse_args(args(&["--help"])), Ok(CliCommand::Help));
    assert_eq!(parse_args(args(&["a.txt", "-V"])), Ok(CliCommand::Version));
    assert!(parse_args(args(&["--bogus"])).is_err());
    assert!(parse_args(args(&["a.txt", "b.txt"])).is_err());
}
