//! Angle bracket escaping for lines inside code regions.

use std::borrow::Cow;

/// Replacement text for `<`. No trailing semicolon.
pub const LT_ENTITY: &str = "&lt";

/// Replacement text for `>`. No trailing semicolon.
pub const GT_ENTITY: &str = "&gt";

/// Escape the first `<` and the first `>` of a line.
///
/// Only the first occurrence of each character is replaced; any later
/// `<` or `>` on the same line is left as is. Returns the input borrowed
/// when the line contains neither character.
///
/// # Examples
///
/// ```
/// use mdfence::markdown::escape_first_angle_brackets;
///
/// assert_eq!(escape_first_angle_brackets("<b>"), "&ltb&gt");
/// assert_eq!(escape_first_angle_brackets("<a><b>"), "&lta&gt<b>");
/// assert_eq!(escape_first_angle_brackets("x => y"), "x =&gt y");
/// ```
pub fn escape_first_angle_brackets(line: &str) -> Cow<'_, str> {
    let bytes = line.as_bytes();
    let lt = memchr::memchr(b'<', bytes);
    let gt = memchr::memchr(b'>', bytes);

    // Both are ASCII, so every match sits on a char boundary.
    let mut cuts: Vec<(usize, &str)> = [(lt, LT_ENTITY), (gt, GT_ENTITY)]
        .into_iter()
        .filter_map(|(pos, entity)| pos.map(|p| (p, entity)))
        .collect();

    if cuts.is_empty() {
        return Cow::Borrowed(line);
    }
    cuts.sort_unstable_by_key(|&(pos, _)| pos);

    let mut result = String::with_capacity(line.len() + 3 * cuts.len());
    let mut last = 0;
    for (pos, entity) in cuts {
        result.push_str(&line[last..pos]);
        result.push_str(entity);
        last = pos + 1;
    }
    result.push_str(&line[last..]);

    Cow::Owned(result)
}
