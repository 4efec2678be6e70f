use dupescan::scanner::{Classification, DuplicateScanner, ScanOptions};
use dupescan::table::{HashTable, Value};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn scanner_with_capacity(capacity: usize) -> DuplicateScanner<Vec<u8>> {
    DuplicateScanner::new(HashTable::new(capacity), ScanOptions::default(), Vec::new())
}

#[test]
fn test_scan_empty_directory() {
    let dir = tempdir().unwrap();
    let mut scanner = scanner_with_capacity(0);

    assert_eq!(scanner.scan(&[dir.path().to_path_buf()]), 0);
    assert!(scanner.into_table().is_empty());
}

#[test]
fn test_scan_unique_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "content a").unwrap();
    fs::write(dir.path().join("b.txt"), "content b").unwrap();
    fs::write(dir.path().join("c.txt"), "content c").unwrap();

    let mut scanner = scanner_with_capacity(0);
    assert_eq!(scanner.scan(&[dir.path().to_path_buf()]), 0);
    assert_eq!(scanner.into_table().len(), 3);
}

#[test]
fn test_scan_classic_duplicate_scenario() {
    // a.txt and b.txt share content, c.txt differs: exactly one duplicate,
    // whichever of a/b is visited second.
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    fs::write(&a, "hello").unwrap();
    fs::write(&b, "hello").unwrap();
    fs::write(dir.path().join("c.txt"), "world").unwrap();

    let mut scanner = scanner_with_capacity(0);
    let count = scanner.scan(&[dir.path().to_path_buf()]);
    assert_eq!(count, 1);

    let table = scanner.into_table();
    assert_eq!(table.len(), 2);

    // The "hello" slot holds whichever of a/b was enumerated first.
    let hello_digest = "5d41402abc4b2a76b9719d911017c592";
    match table.get(hello_digest) {
        Some(Value::Text(path)) => {
            let stored = PathBuf::from(path);
            assert!(stored == a || stored == b, "unexpected original: {:?}", stored);
        }
        other => panic!("expected a stored path for the hello digest, got {:?}", other),
    }
}

#[test]
fn test_scan_report_names_first_seen_path() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    fs::write(&a, "hello").unwrap();
    fs::write(&b, "hello").unwrap();

    let mut scanner = scanner_with_capacity(0);
    scanner.scan(&[dir.path().to_path_buf()]);
    let table = scanner.into_table();

    // Re-scan one file against the populated table: it is now a duplicate
    // of whichever copy was registered during the first pass.
    let mut sink = Vec::new();
    let mut second = DuplicateScanner::new(table, ScanOptions::default(), &mut sink);
    let classification = second.classify_file(&a);
    drop(second);

    let original = match classification {
        Classification::Duplicate(original) => original,
        other => panic!("expected Duplicate, got {:?}", other),
    };
    assert!(original == a || original == b);
    assert_eq!(
        String::from_utf8(sink).unwrap(),
        format!("{} is a duplicate of {}\n", a.display(), original.display())
    );
}

#[test]
fn test_scan_duplicates_across_nesting_depths() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("x").join("y").join("z");
    fs::create_dir_all(&nested).unwrap();
    fs::write(dir.path().join("shallow.txt"), "same bytes").unwrap();
    fs::write(nested.join("deep.txt"), "same bytes").unwrap();

    let mut scanner = scanner_with_capacity(0);
    assert_eq!(scanner.scan(&[dir.path().to_path_buf()]), 1);
}

#[test]
fn test_scan_duplicates_across_multiple_root_paths() {
    let left = tempdir().unwrap();
    let right = tempdir().unwrap();
    fs::write(left.path().join("a.txt"), "shared").unwrap();
    fs::write(right.path().join("b.txt"), "shared").unwrap();

    let mut scanner = scanner_with_capacity(0);
    let count = scanner.scan(&[left.path().to_path_buf(), right.path().to_path_buf()]);
    assert_eq!(count, 1);
}

#[test]
fn test_scan_file_argument_directly() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    fs::write(&a, "payload").unwrap();
    fs::write(&b, "payload").unwrap();

    let mut scanner = scanner_with_capacity(0);
    assert_eq!(scanner.scan(&[a.clone(), b]), 1);
}

#[test]
fn test_scan_with_tiny_bucket_count() {
    // Capacity 1 forces every digest into one chain; results are unchanged.
    let dir = tempdir().unwrap();
    for i in 0..8 {
        fs::write(dir.path().join(format!("u{}.txt", i)), format!("unique {}", i)).unwrap();
    }
    fs::write(dir.path().join("d1.txt"), "dup").unwrap();
    fs::write(dir.path().join("d2.txt"), "dup").unwrap();

    let mut scanner = scanner_with_capacity(1);
    assert_eq!(scanner.scan(&[dir.path().to_path_buf()]), 1);
    assert_eq!(scanner.into_table().len(), 9);
}

#[test]
fn test_scan_hardcoded_multi_group_counts() {
    // Three copies of one payload and two of another: 2 + 1 duplicates.
    let dir = tempdir().unwrap();
    for name in ["a", "b", "c"] {
        fs::write(dir.path().join(format!("{}.bin", name)), "group one").unwrap();
    }
    for name in ["d", "e"] {
        fs::write(dir.path().join(format!("{}.bin", name)), "group two").unwrap();
    }

    let mut scanner = scanner_with_capacity(0);
    assert_eq!(scanner.scan(&[dir.path().to_path_buf()]), 3);
}
