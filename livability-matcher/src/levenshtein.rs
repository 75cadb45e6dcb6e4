//! Edit distance between two strings.
#![forbid(unsafe_code)]

/// Count the insertions, deletions, and substitutions that turn `a` into `b`.
///
/// Works over Unicode scalar values and keeps a single row sized by the
/// shorter input.
///
/// # Examples
/// ```
/// use livability_matcher::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("yishu", "yishun"), 1);
/// assert_eq!(levenshtein("", "abc"), 3);
/// ```
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let left_chars: Vec<char> = a.chars().collect();
    let right_chars: Vec<char> = b.chars().collect();
    let (long, short) = if left_chars.len() >= right_chars.len() {
        (left_chars, right_chars)
    } else {
        (right_chars, left_chars)
    };

    let mut row: Vec<usize> = (0..=short.len()).collect();
    for (i, &long_char) in long.iter().enumerate() {
        // `diagonal` holds row[j] from the previous iteration.
        let mut diagonal = i;
        if let Some(first) = row.first_mut() {
            *first = i + 1;
        }
        for (j, &short_char) in short.iter().enumerate() {
            let above = row.get(j + 1).copied().unwrap_or_default();
            let left = row.get(j).copied().unwrap_or_default();
            let substitution = diagonal + usize::from(long_char != short_char);
            let best = substitution.min(above + 1).min(left + 1);
            diagonal = above;
            if let Some(cell) = row.get_mut(j + 1) {
                *cell = best;
            }
        }
    }
    row.last().copied().unwrap_or_default()
}
