/// Graded strength of a token-to-token match
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchStrength {
    None,
    /// Within the allowed edit distance
    Fuzzy,
    /// One token contains the other
    Substring,
    Exact,
}

impl MatchStrength {
    /// Multiplier applied to the field weight
    #[inline]
    pub fn value(self) -> f64 {
        match self {
            MatchStrength::None => 0.0,
            MatchStrength::Fuzzy => 0.7,
            MatchStrength::Substring => 0.8,
            MatchStrength::Exact => 1.0,
        }
    }

    #[inline]
    pub fn is_match(self) -> bool {
        self != MatchStrength::None
    }
}

/// Edits tolerated for a pair whose longer token has `longest` characters
#[inline]
fn allowed_edits(longest: usize) -> usize {
    if longest > 5 {
        2
    } else {
        1
    }
}

/// Compare two lower-cased tokens.
///
/// Checks run cheapest first: equality, containment either way, then
/// Levenshtein distance within the allowed edit budget.
pub fn match_strength(a: &str, b: &str) -> MatchStrength {
    if a == b {
        return MatchStrength::Exact;
    }

    if a.contains(b) || b.contains(a) {
        return MatchStrength::Substring;
    }

    let len_a = a.chars().count();
    let len_b = b.chars().count();
    let allowed = allowed_edits(len_a.max(len_b));

    // The length gap is a lower bound on the edit distance
    if len_a.abs_diff(len_b) > allowed {
        return MatchStrength::None;
    }

    if levenshtein_distance(a, b) <= allowed {
        MatchStrength::Fuzzy
    } else {
        MatchStrength::None
    }
}

/// Calculate Levenshtein edit distance between two strings.
///
/// Insertions, deletions and substitutions each cost 1; transpositions
/// get no discount.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
