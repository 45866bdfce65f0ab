//! The math behind result ranking.
//!
//! A free-text term is scored against one field value on a 0-100 scale.
//! Match quality falls through fixed tiers: exact equality beats a
//! prefix, a prefix beats a contained substring, and a substring beats
//! a scattered in-order character match. Within the scattered tier,
//! runs of adjacent characters and hits on word starts pull the score
//! up while extra target length pulls it down.
//!
//! A score of 0 always means "no match"; every real match scores at
//! least 1.

/// Score for an exact (case-insensitive) match, and for an empty query
pub const EXACT_SCORE: u8 = 100;

/// Score when the target starts with the query
pub const PREFIX_SCORE: u8 = 95;

/// Score when the target contains the query as a contiguous substring
pub const SUBSTRING_SCORE: u8 = 85;

/// Base score for a full in-order subsequence match
pub const SUBSEQUENCE_BASE: usize = 60;

/// Ceiling for a subsequence match before the length penalty
pub const SUBSEQUENCE_MAX: usize = 80;

/// Bonus per pair of adjacent matched target characters
pub const CONSECUTIVE_BONUS: usize = 5;

/// Bonus per matched character landing on a word boundary
pub const BOUNDARY_BONUS: usize = 10;

/// Ceiling on the length penalty for long targets
pub const MAX_LENGTH_PENALTY: usize = 20;

/// Word-boundary characters: a match right after one of these earns
/// the boundary bonus
fn is_boundary(c: char) -> bool {
    matches!(c, ' ' | '-' | ':')
}

/// Score how well `query` matches `target`, in `[0, 100]`
///
/// Tiers, first match wins:
/// 1. empty query matches everything (100)
/// 2. empty target matches nothing (0)
/// 3. case-insensitive equality (100)
/// 4. target starts with query (95)
/// 5. target contains query (85)
/// 6. every query character appears in order: 60 base, +5 per adjacent
///    matched pair, +10 per word-boundary hit, capped at 80, minus a
///    penalty of `min(20, (target_len - query_len) / 2)`
/// 7. an in-order prefix of the query matching more than half its
///    characters: `30 * matched / query_len`, floored
/// 8. otherwise 0
pub fn fuzzy_score(query: &str, target: &str) -> u8 {
    if query.is_empty() {
        return EXACT_SCORE;
    }
    if target.is_empty() {
        return 0;
    }

    let q: Vec<char> = query.to_lowercase().chars().collect();
    let t: Vec<char> = target.to_lowercase().chars().collect();

    if q == t {
        return EXACT_SCORE;
    }
    if t.starts_with(q.as_slice()) {
        return PREFIX_SCORE;
    }
    if q.len() <= t.len() && t.windows(q.len()).any(|w| w == q.as_slice()) {
        return SUBSTRING_SCORE;
    }

    // In-order scan: greedily match each query character at its first
    // remaining occurrence in the target.
    let mut matched = 0usize;
    let mut consecutive = 0usize;
    let mut boundaries = 0usize;
    let mut last_hit: Option<usize> = None;
    let mut ti = 0usize;

    'query: for &qc in &q {
        while ti < t.len() {
            if t[ti] == qc {
                if ti > 0 && last_hit == Some(ti - 1) {
                    consecutive += 1;
                }
                if ti == 0 || is_boundary(t[ti - 1]) {
                    boundaries += 1;
                }
                last_hit = Some(ti);
                matched += 1;
                ti += 1;
                continue 'query;
            }
            ti += 1;
        }
        break;
    }

    if matched == q.len() {
        let base = SUBSEQUENCE_BASE + CONSECUTIVE_BONUS * consecutive + BOUNDARY_BONUS * boundaries;
        let capped = base.min(SUBSEQUENCE_MAX);
        let penalty = ((t.len() - q.len()) / 2).min(MAX_LENGTH_PENALTY);
        return capped.saturating_sub(penalty) as u8;
    }

    let ratio = matched as f32 / q.len() as f32;
    if ratio > 0.5 {
        return (30.0 * ratio).floor() as u8;
    }

    0
}

/// Best [`fuzzy_score`] across several optional field values
///
/// This is the policy for scoring one term against a whole item: check
/// every searchable field and take the best match. Absent fields
/// contribute nothing.
pub fn fuzzy_score_multi(query: &str, targets: &[Option<&str>]) -> u8 {
    targets
        .iter()
        .flatten()
        .map(|target| fuzzy_score(query, target))
        .max()
        .unwrap_or(0)
}
