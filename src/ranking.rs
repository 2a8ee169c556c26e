use ordered_float::OrderedFloat;
use std::cmp::Ordering;

/// A single correction candidate: the stored word, its weight, and its
/// Levenshtein distance from the query.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub word: String,
    pub weight: f64,
    pub distance: usize,
}

/// US QWERTY layout, row by row, used for the optional proximity
/// tiebreak. Closeness between two keys is their row/column
/// Manhattan distance.
const QWERTY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

fn qwerty_position(c: char) -> Option<(i32, i32)> {
    let lower = c.to_ascii_lowercase();
    QWERTY_ROWS.iter().enumerate().find_map(|(row, keys)| {
        keys.find(lower)
            .map(|col| (row as i32, col as i32))
    })
}

/// Manhattan distance between two characters' QWERTY key positions.
/// Characters outside the layout (digits, punctuation) fall back to a
/// fixed penalty, since they have no row/column to compare.
fn qwerty_distance(a: char, b: char) -> i32 {
    if a == b {
        return 0;
    }
    match (qwerty_position(a), qwerty_position(b)) {
        (Some((r1, c1)), Some((r2, c2))) => (r1 - r2).abs() + (c1 - c2).abs(),
        _ => 3,
    }
}

/// Standard Levenshtein DP table with backtrace, used only to align a
/// query against a candidate word for the proximity tiebreak (the trie
/// traversal's own rolling rows don't retain enough history to recover
/// an edit script).
fn align(query: &[char], word: &[char]) -> Vec<(Option<char>, Option<char>)> {
    let (n, m) = (query.len(), word.len());
    let mut dp = vec![vec![0usize; m + 1]; n + 1];
    for i in 0..=n {
        dp[i][0] = i;
    }
    for j in 0..=m {
        dp[0][j] = j;
    }
    for i in 1..=n {
        for j in 1..=m {
            let cost = if query[i - 1] == word[j - 1] { 0 } else { 1 };
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
        }
    }

    let mut script = Vec::new();
    let (mut i, mut j) = (n, m);
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && dp[i][j] == dp[i - 1][j - 1] + (query[i - 1] != word[j - 1]) as usize
        {
            script.push((Some(query[i - 1]), Some(word[j - 1])));
            i -= 1;
            j -= 1;
        } else if i > 0 && dp[i][j] == dp[i - 1][j] + 1 {
            script.push((Some(query[i - 1]), None));
            i -= 1;
        } else {
            script.push((None, Some(word[j - 1])));
            j -= 1;
        }
    }
    script.reverse();
    script
}

/// Sum of QWERTY-distance penalties over aligned, mismatched character
/// pairs. Insertions and deletions contribute nothing (there is no
/// counterpart character to compare a key position against).
fn proximity_score(query: &str, word: &str) -> i32 {
    let query_chars: Vec<char> = query.chars().collect();
    let word_chars: Vec<char> = word.chars().collect();
    let script = align(&query_chars, &word_chars);

    script
        .into_iter()
        .filter_map(|(a, b)| match (a, b) {
            (Some(a), Some(b)) if a != b => Some(qwerty_distance(a, b)),
            _ => None,
        })
        .sum()
}

/// Orders correction candidates by `(distance ascending, weight
/// descending)`, with an optional QWERTY-proximity tiebreak (lower
/// proximity score ranks higher). Without the tiebreak the order among
/// exact (distance, weight) ties is stable but otherwise unspecified.
pub(crate) fn rank(
    found: Vec<(String, f64, usize)>,
    query: &str,
    keyboard_proximity: bool,
) -> Vec<Suggestion> {
    let mut scored: Vec<(Suggestion, i32)> = found
        .into_iter()
        .map(|(word, weight, distance)| {
            let proximity = if keyboard_proximity {
                proximity_score(query, &word)
            } else {
                0
            };
            (
                Suggestion {
                    word,
                    weight,
                    distance,
                },
                proximity,
            )
        })
        .collect();

    scored.sort_by(|(a, pa), (b, pb)| {
        a.distance
            .cmp(&b.distance)
            .then_with(|| OrderedFloat(b.weight).cmp(&OrderedFloat(a.weight)))
            .then(if keyboard_proximity {
                pa.cmp(pb)
            } else {
                Ordering::Equal
            })
    });

    scored.into_iter().map(|(s, _)| s).collect()
}
