//! Loading the three tables from a directory on disk.

use data_loader::{BOOKS_FILE, DataLoadError, Dataset, RATINGS_FILE, USERS_FILE};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, bytes: &[u8]) {
    fs::write(dir.join(name), bytes).unwrap();
}

fn write_valid_tables(dir: &Path) {
    // "Les Misérables" with a raw Latin-1 0xE9 byte
    let mut books = b"ISBN,Book-Title,Book-Author,Year-Of-Publication,Publisher\n\
0001,Dune,Frank Herbert,1965,Chilton\n\
0002,\"Les Mis".to_vec();
    books.push(0xE9);
    books.extend_from_slice(b"rables\",Victor Hugo,0,Gallimard\n");
    write(dir, BOOKS_FILE, &books);

    write(
        dir,
        USERS_FILE,
        b"User-ID,Location,Age\n1,\"nyc, new york, usa\",\n2,\"porto, portugal\",34\n",
    );
    write(
        dir,
        RATINGS_FILE,
        b"User-ID,ISBN,Book-Rating\n1,0001,9\n2,0002,0\n2,9999,7\n",
    );
}

#[test]
fn test_load_from_dir() {
    let dir = TempDir::new().unwrap();
    write_valid_tables(dir.path());

    let dataset = Dataset::load_from_dir(dir.path()).unwrap();

    assert_eq!(dataset.counts(), (2, 2, 3));
    assert_eq!(dataset.get_book("0002").unwrap().title, "Les Misérables");
    assert_eq!(dataset.get_user(2).unwrap().age, Some(34.0));
    // A rating for an unknown ISBN still loads; the join drops it later.
    assert_eq!(dataset.ratings()[2].isbn, "9999");
}

#[test]
fn test_missing_file_aborts_load() {
    let dir = TempDir::new().unwrap();
    write_valid_tables(dir.path());
    fs::remove_file(dir.path().join(USERS_FILE)).unwrap();

    let err = Dataset::load_from_dir(dir.path()).unwrap_err();

    assert!(matches!(err, DataLoadError::FileNotFound { .. }));
}

#[test]
fn test_missing_column_aborts_load() {
    let dir = TempDir::new().unwrap();
    write_valid_tables(dir.path());
    write(dir.path(), BOOKS_FILE, b"ISBN,Book-Title,Year-Of-Publication\n0001,Dune,1965\n");

    let err = Dataset::load_from_dir(dir.path()).unwrap_err();

    assert!(matches!(
        err,
        DataLoadError::MissingColumn { ref column, .. } if column == "Book-Author"
    ));
}
