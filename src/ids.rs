//! Group and unit identifier allocation
use super::error::OpError;
use super::group::ProductGroup;
use tracing::warn;

/// A group identifier is a single uppercase letter.
pub fn is_valid_group_id(id: &str) -> bool {
    let mut chars = id.chars();
    matches!((chars.next(), chars.next()), (Some('A'..='Z'), None))
}

/// Derive the next group identifier from the groups currently in the store:
/// one letter past the maximum present, `"A"` for an empty collection.
/// Malformed identifiers are skipped rather than failing the allocation.
/// Past `'Z'` there is nothing left to hand out and the create fails.
pub fn next_group_id(groups: &[ProductGroup]) -> Result<String, OpError> {
    let mut max: Option<char> = None;
    for group in groups {
        if !is_valid_group_id(&group.group_id) {
            warn!(group_id = %group.group_id, "skipping malformed group identifier");
            continue;
        }
        let letter = group.group_id.chars().next().unwrap_or('A');
        if max.is_none_or(|m| letter >= m) {
            max = Some(letter);
        }
    }

    match max {
        None => Ok("A".to_string()),
        Some('Z') => Err(OpError::IdSpaceExhausted),
        Some(letter) => {
            let next = char::from(letter as u8 + 1);
            Ok(next.to_string())
        }
    }
}

/// Unit identifiers `{group_id}{n}` for `n` in `1..=count`, ascending.
pub fn unit_ids(group_id: &str, count: u32) -> Vec<String> {
    (1..=count).map(|n| format!("{group_id}{n}")).collect()
}
