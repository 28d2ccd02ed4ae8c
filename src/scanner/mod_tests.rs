use std::fs;

use tempfile::TempDir;

use super::*;

fn fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("ward-12")).unwrap();
    fs::write(dir.path().join("house.json"), "{}").unwrap();
    fs::write(dir.path().join("notes.txt"), "n/a").unwrap();
    fs::write(dir.path().join("ward-12/tower.json"), "{}").unwrap();
    dir
}

#[test]
fn scan_finds_plan_files_recursively() {
    let dir = fixture();
    let scanner = DirectoryScanner::new(GlobFilter::new(vec!["json".to_string()], &[]).unwrap());

    let files = scanner.scan(dir.path()).unwrap();
    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|p| p.extension().unwrap() == "json"));
}

#[test]
fn scan_respects_exclude_patterns() {
    let dir = fixture();
    let scanner = DirectoryScanner::new(
        GlobFilter::new(vec!["json".to_string()], &["**/ward-12/**".to_string()]).unwrap(),
    );

    let files = scanner.scan(dir.path()).unwrap();
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("house.json"));
}

#[test]
fn scan_of_empty_directory_is_empty() {
    let dir = TempDir::new().unwrap();
    let scanner = DirectoryScanner::new(GlobFilter::new(vec!["json".to_string()], &[]).unwrap());
    assert!(scanner.scan(dir.path()).unwrap().is_empty());
}

#[test]
fn scan_order_is_deterministic() {
    let dir = fixture();
    let scanner = DirectoryScanner::new(GlobFilter::new(vec!["json".to_string()], &[]).unwrap());

    let first = scanner.scan(dir.path()).unwrap();
    let second = scanner.scan(dir.path()).unwrap();
    assert_eq!(first, second);
}
