use predictrie::Trie;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_word(rng: &mut impl Rng, max_len: usize) -> String {
    let len = rng.gen_range(1..=max_len);
    (0..len)
        .map(|_| (b'a' + rng.gen_range(0..6)) as char)
        .collect()
}

#[test]
fn insert_then_contains_holds_for_many_words() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut trie = Trie::new();
    let mut model = std::collections::HashMap::new();

    for _ in 0..500 {
        let word = random_word(&mut rng, 6);
        let weight = rng.gen_range(-10.0..10.0);
        trie.insert(&word, weight);
        model.insert(word, weight);
    }

    for (word, weight) in &model {
        assert!(trie.contains(word));
        assert_eq!(Some(*weight), trie.weight_of(word));
    }
}

#[test]
fn insert_then_remove_then_contains_is_false() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut trie = Trie::new();
    let mut words = Vec::new();

    for _ in 0..200 {
        let word = random_word(&mut rng, 6);
        trie.insert(&word, rng.gen_range(0.0..10.0));
        words.push(word);
    }

    for word in &words {
        trie.remove(word);
    }

    for word in &words {
        assert!(!trie.contains(word));
    }
    assert!(trie.is_empty());
}

#[test]
fn completion_output_is_non_increasing_in_weight_under_random_inserts() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut trie = Trie::new();

    for _ in 0..300 {
        let word = random_word(&mut rng, 5);
        trie.insert(&word, rng.gen_range(0.0..100.0));
    }

    let results = trie.complete("", 300);
    let weights: Vec<f64> = results.iter().map(|w| trie.weight_of(w).unwrap()).collect();
    for pair in weights.windows(2) {
        assert!(pair[0] >= pair[1], "completion order was not non-increasing: {weights:?}");
    }

    let mut seen = std::collections::HashSet::new();
    for word in &results {
        assert!(seen.insert(word.clone()), "duplicate completion: {word}");
    }
}

#[test]
fn correction_is_non_decreasing_in_distance_under_random_inserts() {
    let mut rng = StdRng::seed_from_u64(123);
    let mut trie = Trie::new();

    for _ in 0..300 {
        let word = random_word(&mut rng, 6);
        trie.insert(&word, rng.gen_range(0.0..100.0));
    }

    let results = trie.correct_ranked("abcabc", 3, false);
    let distances: Vec<usize> = results.iter().map(|s| s.distance).collect();
    for pair in distances.windows(2) {
        assert!(pair[0] <= pair[1], "correction order was not non-decreasing: {distances:?}");
    }
    for suggestion in &results {
        assert!(trie.contains(&suggestion.word));
    }
}
