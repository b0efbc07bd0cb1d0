//! A simple word frequency example.
//!
//! In this example, a text is split into chunks, and each chunk is handed to a
//! Counter thread:
//! -   Each Counter thread tallies the words of its chunk in its own HashMap.
//! -   The main thread then merges the tallies into a single HashMap.
//!
//! The HashMap performs no synchronization, hence each thread owns its map, and
//! the merge happens once the threads are joined.
//!
//! Set `RUST_LOG=lineprobe=debug` to witness the rehashes.

extern crate crossbeam_utils;
extern crate lineprobe;

use lineprobe::hashmap::HashMap;
use tracing_subscriber::EnvFilter;

const TEXT: &str = "\
    it was the best of times it was the worst of times \
    it was the age of wisdom it was the age of foolishness \
    it was the epoch of belief it was the epoch of incredulity \
    it was the season of light it was the season of darkness \
    it was the spring of hope it was the winter of despair";

const NUMBER_COUNTERS: usize = 4;

fn tally(words: &[&str]) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::with_capacity(4);

    for word in words {
        *counts.get_or_insert_default(word.to_string()) += 1;
    }

    counts
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let words: Vec<_> = TEXT.split_whitespace().collect();
    let chunk = (words.len() + NUMBER_COUNTERS - 1) / NUMBER_COUNTERS;

    let tallies = crossbeam_utils::thread::scope(|scope| {
        let handles: Vec<_> = words
            .chunks(chunk)
            .map(|words| scope.spawn(move |_| tally(words)))
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().expect("Counter should not panic"))
            .collect::<Vec<_>>()
    })
    .expect("Counters should not panic");

    let mut total: HashMap<String, usize> = HashMap::new();

    for tally in tallies {
        for (word, count) in tally {
            *total.get_or_insert_default(word) += count;
        }
    }

    let mut sorted: Vec<_> = total.iter().collect();
    sorted.sort_by(|left, right| right.1.cmp(left.1).then(left.0.cmp(right.0)));

    for (word, count) in sorted.iter().take(5) {
        println!("{:>12} {}", word, count);
    }

    println!(
        "{} distinct words, capacity {}, load factor {:.2}",
        total.len(),
        total.capacity(),
        total.load_factor()
    );

    assert_eq!(Some(&10), total.get("was"));
    assert_eq!(Some(&2), total.get("times"));
    assert_eq!(words.len(), total.values().sum::<usize>());
}
