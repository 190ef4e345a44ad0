use regex::Regex;
use std::sync::LazyLock;

static NON_ALPHANUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9 ]").unwrap());

/// Lowercases and strips everything except ASCII letters, digits and spaces.
pub fn normalize_answer(text: &str) -> String {
    let lowered = text.to_lowercase();
    NON_ALPHANUMERIC.replace_all(&lowered, "").trim().to_string()
}

/// Ratcliff/Obershelp similarity in `[0.0, 1.0]`: twice the number of
/// matching characters over the combined length.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();

    if total == 0 {
        return 1.0;
    }

    2.0 * matching_characters(&a, &b) as f64 / total as f64
}

pub fn is_answer_correct(user_answer: &str, correct_answer: &str, threshold: f64) -> bool {
    let user = normalize_answer(user_answer);
    let expected = normalize_answer(correct_answer);
    similarity_ratio(&user, &expected) >= threshold
}

fn matching_characters(a: &[char], b: &[char]) -> usize {
    let (a_start, b_start, len) = longest_common_block(a, b);
    if len == 0 {
        return 0;
    }

    len + matching_characters(&a[..a_start], &b[..b_start])
        + matching_characters(&a[a_start + len..], &b[b_start + len..])
}

// Leftmost longest block, earliest in `a` then in `b`.
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut previous = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        let mut current = vec![0usize; b.len() + 1];
        for (j, cb) in b.iter().enumerate() {
            if ca == cb {
                let run = previous[j] + 1;
                current[j + 1] = run;
                if run > best.2 {
                    best = (i + 1 - run, j + 1 - run, run);
                }
            }
        }
        previous = current;
    }

    best
}
