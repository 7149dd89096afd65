//! End-to-end checks of the build and the two queries on a synthetic
//! book-crossing style dataset.

use data_loader::{Book, Dataset, RatingEvent, User, UserId};
use pipeline::{PipelineConfig, Snapshot, build};

const CATALOG_SIZE: usize = 300;
const ACTIVE_USERS: UserId = 80;
const BOOKS_PER_ACTIVE_USER: usize = 220;
const CASUAL_READERS: UserId = 260;

fn book(isbn: &str, title: &str, author: &str) -> Book {
    Book {
        isbn: isbn.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        year_of_publication: "2003".to_string(),
        publisher: "Test House".to_string(),
        image_url_s: String::new(),
        image_url_m: String::new(),
        image_url_l: String::new(),
    }
}

fn event(user_id: UserId, isbn: &str, rating: u8) -> RatingEvent {
    RatingEvent {
        user_id,
        isbn: isbn.to_string(),
        rating,
    }
}

fn catalog_isbn(i: usize) -> String {
    format!("C{i:04}")
}

/// 80 heavy readers over a 300-title catalogue, 260 casual readers of two
/// popular titles, and one rating of an ISBN missing from the book table.
fn create_test_dataset() -> Dataset {
    let mut books: Vec<Book> = (0..CATALOG_SIZE)
        .map(|i| book(&catalog_isbn(i), &format!("Catalogue Title {i:03}"), "Various"))
        .collect();
    books.push(book("P-A1", "Popular A", "Ann Author"));
    books.push(book("P-A2", "Popular A", "Reprint Author"));
    books.push(book("P-B", "Popular B", "Bob Author"));

    let mut users = Vec::new();
    let mut ratings = Vec::new();

    for user in 1..=ACTIVE_USERS {
        users.push(User {
            id: user,
            location: String::new(),
            age: None,
        });
        let start = user as usize * 3;
        for k in 0..BOOKS_PER_ACTIVE_USER {
            let i = (start + k) % CATALOG_SIZE;
            ratings.push(event(user, &catalog_isbn(i), ((user as usize + k) % 11) as u8));
        }
    }

    for reader in 0..CASUAL_READERS {
        let user = 10_000 + reader;
        users.push(User {
            id: user,
            location: String::new(),
            age: Some(30.0),
        });
        let edition = if reader % 2 == 0 { "P-A1" } else { "P-A2" };
        ratings.push(event(user, edition, 9));
        ratings.push(event(user, "P-B", 7));
    }

    ratings.push(event(1, "GHOST-ISBN", 10));

    Dataset::from_tables(books, users, ratings)
}

fn build_default(dataset: &Dataset) -> Snapshot {
    build(dataset, &PipelineConfig::default()).unwrap()
}

#[test]
fn test_top_books_bounded_sorted_and_above_threshold() {
    let dataset = create_test_dataset();
    let snapshot = build_default(&dataset);

    let top = snapshot.get_top_books();

    assert!(top.len() <= 50);
    assert!(top.windows(2).all(|w| w[0].avg_rating >= w[1].avg_rating));
    assert!(top.iter().all(|e| e.num_ratings > 250));

    let titles: Vec<&str> = top.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Popular A", "Popular B"]);
    // Both editions count toward one title; metadata comes from the first row
    assert_eq!(top[0].num_ratings, 260);
    assert_eq!(top[0].author, "Ann Author");
}

#[test]
fn test_unknown_isbn_contributes_nowhere() {
    let dataset = create_test_dataset();
    let snapshot = build_default(&dataset);

    let (_, _, loaded) = dataset.counts();
    assert_eq!(snapshot.summary().joined_ratings, loaded - 1);
    assert!(snapshot.final_ratings().iter().all(|r| r.isbn != "GHOST-ISBN"));
}

#[test]
fn test_cold_start_users_get_nothing() {
    let dataset = create_test_dataset();
    let snapshot = build_default(&dataset);

    // Casual reader, never-seen id
    for user in [10_000, 999_999] {
        assert!(!snapshot.knows_user(user));
        assert!(snapshot.recommend(user).is_empty());
    }
}

#[test]
fn test_known_users_get_at_most_five_final_titles() {
    let dataset = create_test_dataset();
    let snapshot = build_default(&dataset);

    assert!(!snapshot.similarity().is_empty());
    for &user in snapshot.similarity().users() {
        let titles = snapshot.recommend(user);
        assert!(!titles.is_empty());
        assert!(titles.len() <= 5);
        for title in &titles {
            assert!(snapshot.final_ratings().iter().any(|r| &r.title == title));
        }
    }
}

#[test]
fn test_similarity_is_symmetric_with_unit_diagonal() {
    let dataset = create_test_dataset();
    let snapshot = build_default(&dataset);
    let sim = snapshot.similarity();

    for &u in sim.users() {
        assert_eq!(sim.get(u, u), Some(1.0));
        for &v in sim.users() {
            assert_eq!(sim.get(u, v), sim.get(v, u));
        }
    }
}

#[test]
fn test_final_ratings_only_from_active_users_and_well_known_titles() {
    let dataset = create_test_dataset();
    let snapshot = build_default(&dataset);

    let final_ratings = snapshot.final_ratings();
    assert!(final_ratings.iter().all(|r| r.user_id <= ACTIVE_USERS));
    for title in snapshot.matrix().titles() {
        let count = final_ratings.iter().filter(|r| &r.title == title).count();
        assert!(count >= 50);
    }
}

#[test]
fn test_rebuild_is_identical() {
    let dataset = create_test_dataset();

    let first = build_default(&dataset);
    let second = build_default(&dataset);

    assert_eq!(first.get_top_books(), second.get_top_books());
    assert_eq!(first.similarity(), second.similarity());
    assert_eq!(first.recommend(1), second.recommend(1));
}

#[test]
fn test_single_heavy_reader_scenario() {
    let books: Vec<Book> = (0..300)
        .map(|i| book(&format!("S{i}"), &format!("Solo {i}"), "Solo"))
        .collect();
    let ratings: Vec<RatingEvent> = (0..300).map(|i| event(42, &format!("S{i}"), 10)).collect();
    let dataset = Dataset::from_tables(books, vec![], ratings);

    let snapshot = build_default(&dataset);

    assert!(snapshot.matrix().is_empty());
    assert!(snapshot.similarity().is_empty());
    assert!(snapshot.recommend(42).is_empty());
    assert!(snapshot.get_top_books().is_empty());
}

#[test]
fn test_single_title_rated_251_times_scenario() {
    let books = vec![book("X", "The One", "Someone"), book("Y", "The Other", "Else")];
    let mut ratings: Vec<RatingEvent> = (0..251).map(|u| event(u, "X", 10)).collect();
    ratings.extend((0..100).map(|u| event(u, "Y", 10)));
    let dataset = Dataset::from_tables(books, vec![], ratings);

    let snapshot = build_default(&dataset);
    let top = snapshot.get_top_books();

    assert_eq!(top.len(), 1);
    assert_eq!(top[0].title, "The One");
    assert_eq!(top[0].avg_rating, 10.0);
}
