use super::*;
use tempfile::tempdir;

#[test]
fn read_appends_newline_after_every_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no_trailing.txt");
    fs::write(&path, "alpha\nbeta").unwrap();

    let provider = LocalFileProvider::new();
    let content = provider.read_text(&path).unwrap();

    assert_eq!(content, "alpha\nbeta\n");
}

#[test]
fn read_normalizes_crlf() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("crlf.txt");
    fs::write(&path, "one\r\ntwo\r\n").unwrap();

    let content = LocalFileProvider::new().read_text(&path).unwrap();

    assert_eq!(content, "one\ntwo\n");
}

#[test]
fn read_treats_lone_cr_as_line_end() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cr.txt");
    fs::write(&path, "one\rtwo\r").unwrap();

    let content = LocalFileProvider::new().read_text(&path).unwrap();

    assert_eq!(content, "one\ntwo\n");
}

#[test]
fn read_mixed_line_endings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mixed.txt");
    fs::write(&path, "a\rb\r\n\r\nc\nd\r\re").unwrap();

    let content = LocalFileProvider::new().read_text(&path).unwrap();

    assert_eq!(content, "a\nb\n\nc\nd\n\ne\n");
}

#[test]
fn read_empty_file_is_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    File::create(&path).unwrap();

    assert_eq!(LocalFileProvider::new().read_text(&path).unwrap(), "");
}

#[test]
fn read_missing_file_is_not_found() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let err = LocalFileProvider::new().read_text(&path).unwrap_err();

    assert!(matches!(err, FileError::NotFound(p) if p == path));
}

#[test]
fn read_directory_is_not_a_file() {
    let dir = tempdir().unwrap();
    let err = LocalFileProvider::new().read_text(dir.path()).unwrap_err();
    assert!(matches!(err, FileError::NotAFile(_)));
}

#[test]
fn read_invalid_utf8_is_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("binary.bin");
    fs::write(&path, [0x66, 0x6f, 0xff, 0xfe, b'\n']).unwrap();

    let err = LocalFileProvider::new().read_text(&path).unwrap_err();

    match err {
        FileError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::InvalidData),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn write_is_verbatim() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let rope = Rope::from_str("no newline at end");

    LocalFileProvider::new().write_text(&path, &rope).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "no newline at end");
}

#[test]
fn write_truncates_existing_file_and_creates_parents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("out.txt");
    let provider = LocalFileProvider::new();

    provider
        .write_text(&path, &Rope::from_str("a much longer first version\n"))
        .unwrap();
    provider.write_text(&path, &Rope::from_str("short\n")).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "short\n");
}

#[test]
fn write_then_read_round_trips_newline_terminated_text() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("round.txt");
    let text = "first line\nsecond line\n\nfourth\n";
    let provider = LocalFileProvider::new();

    provider.write_text(&path, &Rope::from_str(text)).unwrap();

    assert_eq!(provider.read_text(&path).unwrap(), text);
}

#[test]
fn write_to_directory_fails() {
    let dir = tempdir().unwrap();
    let err = LocalFileProvider::new()
        .write_text(dir.path(), &Rope::from_str("x"))
        .unwrap_err();
    assert!(matches!(err, FileError::NotAFile(_)));
}
