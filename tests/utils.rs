use recon_report::utils::{
    html_escape, parse_stty_columns, term_width, truncate_notes, write_atomic,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_term_width_is_positive() {
    // Under a test harness stdin is usually not a tty, so this normally
    // exercises the fallback; either way a usable width comes back.
    assert!(term_width() > 0);
}

#[test]
fn test_parse_stty_columns_variants() {
    assert_eq!(
        parse_stty_columns("speed 38400 baud; rows 40; columns 200; line = 0;"),
        Some(200)
    );
    assert_eq!(
        parse_stty_columns("speed 9600 baud; 40 rows; 96 columns;"),
        Some(96)
    );
    assert_eq!(parse_stty_columns("stty: 'standard input': Inappropriate ioctl"), None);
}

#[test]
fn test_truncate_notes_length_is_exact() {
    let notes = "x".repeat(500);
    for width in [3usize, 4, 10, 40, 120] {
        let truncated = truncate_notes(&notes, width);
        assert_eq!(truncated.chars().count(), width);
        assert!(truncated.ends_with("..."));
    }
}

#[test]
fn test_truncate_notes_counts_characters() {
    let notes = "é".repeat(12);
    assert_eq!(truncate_notes(&notes, 12), notes);
    assert_eq!(truncate_notes(&notes, 8), format!("{}...", "é".repeat(5)));
}

#[test]
fn test_html_escape_plain_text_unchanged() {
    assert_eq!(html_escape("sshd_config: PermitRootLogin"), "sshd_config: PermitRootLogin");
}

#[test]
fn test_write_atomic_replaces_contents() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("out.txt");

    write_atomic(&path, b"first").unwrap();
    write_atomic(&path, b"second").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "second");

    // Only the target remains; no temporary files are left behind.
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_write_atomic_missing_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("out.txt");

    let err = write_atomic(&path, b"data").unwrap_err();
    assert!(format!("{err:#}").contains("Unable to open"));
    assert!(!path.exists());
}

#[cfg(unix)]
#[test]
fn test_write_atomic_new_file_mode_follows_umask() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let reference = dir.path().join("reference.txt");
    fs::File::create(&reference).unwrap();
    let path = dir.path().join("report.csv");

    write_atomic(&path, b"data").unwrap();

    let mode = |p: &std::path::Path| fs::metadata(p).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode(&path), mode(&reference));
}

#[cfg(unix)]
#[test]
fn test_write_atomic_keeps_existing_mode() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.json");
    fs::write(&path, b"old").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

    write_atomic(&path, b"new").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    assert_eq!(fs::metadata(&path).unwrap().permissions().mode() & 0o777, 0o640);
}

#[cfg(unix)]
#[test]
fn test_write_atomic_through_symlink() {
    let dir = TempDir::new().unwrap();
    let real = dir.path().join("real.html");
    let link = dir.path().join("latest.html");
    fs::write(&real, b"old").unwrap();
    std::os::unix::fs::symlink("real.html", &link).unwrap();

    write_atomic(&link, b"new").unwrap();

    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(fs::read_to_string(&real).unwrap(), "new");
    assert_eq!(fs::read_to_string(&link).unwrap(), "new");
}
