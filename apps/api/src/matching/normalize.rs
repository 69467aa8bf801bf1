use std::collections::HashSet;

/// Comparison key for skill and city names: trimmed and lower-cased.
/// Blank input has no key.
pub fn comparison_key(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Candidate skills as a set of comparison keys.
pub fn skill_key_set(skills: &[String]) -> HashSet<String> {
    skills.iter().filter_map(|s| comparison_key(s)).collect()
}

/// Required skills deduplicated by comparison key, in first-seen order.
/// Each item is `(key, trimmed original spelling)`.
pub fn dedup_skills(skills: &[String]) -> Vec<(String, &str)> {
    let mut seen = HashSet::new();
    skills
        .iter()
        .filter_map(|s| comparison_key(s).map(|key| (key, s.trim())))
        .filter(|(key, _)| seen.insert(key.clone()))
        .collect()
}

/// True only when both cities are present, non-blank and equal ignoring case.
pub fn cities_match(a: Option<&str>, b: Option<&str>) -> bool {
    match (a.and_then(comparison_key), b.and_then(comparison_key)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Rounds half up. Only valid for non-negative input.
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}
