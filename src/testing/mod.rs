//! Randomized test-data generation from fixed candidate pools.
//!
//! Pure selection, no store or HTTP side effects: callable once for a single
//! POST payload or repeatedly to build a seed batch.

use rand::Rng;

use crate::post::post_model::{Author, BlogPost};

/// Records seeded before each test, indices 0 through 10 inclusive.
pub const SEED_BATCH_SIZE: usize = 11;

const TITLES: [&str; 4] = [
    "10 things -- you won't believe #4",
    "generititle",
    "thinj",
    "bloggo",
];

const AUTHORS: [(&str, &str); 7] = [
    ("Travis", "Bickle"),
    ("James", "Brown"),
    ("Fred", "Weasley"),
    ("Ginny", "Weasley"),
    ("Forrest", "Gump"),
    ("Rachel", "Ray"),
    ("Girl", "Please"),
];

const CONTENTS: [&str; 3] = [
    "Lorem ipsum dolor sit amet, consectetur adipisicing elit,",
    "Loerl",
    "blogs",
];

fn pick<T: Copy>(pool: &[T]) -> T {
    let mut rng = rand::rng();
    pool[rng.random_range(0..pool.len())]
}

/// One valid post payload without an id.
pub fn generate_post() -> BlogPost {
    let (first, last) = pick(&AUTHORS);
    BlogPost::new(
        pick(&TITLES),
        Author {
            first_name: first.to_string(),
            last_name: last.to_string(),
        },
        pick(&CONTENTS),
    )
}

/// The fixed-size batch inserted before each test.
pub fn seed_batch() -> Vec<BlogPost> {
    (0..SEED_BATCH_SIZE).map(|_| generate_post()).collect()
}
