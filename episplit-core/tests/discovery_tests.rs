// episplit-core/tests/discovery_tests.rs

use episplit_core::discovery::find_processable_files;
use episplit_core::error::SplitError;
use std::fs::{self, File};
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_find_processable_files_recurses_and_sorts() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input_dir = dir.path();

    // Create some files
    File::create(input_dir.join("b.mkv"))?;
    File::create(input_dir.join("a.MKV"))?; // Test case insensitivity
    File::create(input_dir.join("document.txt"))?;
    File::create(input_dir.join("image.jpg"))?;
    fs::create_dir(input_dir.join("subdir"))?;
    File::create(input_dir.join("subdir").join("nested.mkv"))?;

    let files = find_processable_files(input_dir)?;

    assert_eq!(files.len(), 3);
    assert_eq!(files[0].file_name().unwrap(), "a.MKV"); // Original case preserved
    assert_eq!(files[1].file_name().unwrap(), "b.mkv");
    assert_eq!(files[2].file_name().unwrap(), "nested.mkv");

    dir.close()?;
    Ok(())
}

#[test]
fn test_find_processable_files_empty() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input_dir = dir.path();

    File::create(input_dir.join("document.txt"))?;
    fs::create_dir(input_dir.join("subdir"))?;

    let result = find_processable_files(input_dir);
    assert!(result.is_err());
    match result.err().unwrap() {
        SplitError::NoFilesFound => {} // Expected error
        e => panic!("Unexpected error type: {:?}", e),
    }

    dir.close()?;
    Ok(())
}

#[test]
fn test_find_processable_files_nonexistent_dir() {
    let non_existent_path = PathBuf::from("surely_this_does_not_exist_42_integration");
    let result = find_processable_files(&non_existent_path);

    assert!(result.is_err());
    match result.err().unwrap() {
        SplitError::Io(_) => {} // Expected error type
        e => panic!("Unexpected error type: {:?}", e),
    }
}
