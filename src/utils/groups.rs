//! Output grouping: ciphertext printed in fixed-width groups.

/// Width of the groups the historical operators transmitted.
pub const GROUP_WIDTH: usize = 5;

/// Splits `text` into space-separated groups of `width` characters.
///
/// The last group may be shorter. A `width` of 0 returns `text` unchanged.
///
/// # Examples
///
/// ```
/// use enigma::utils::groups::format_groups;
///
/// assert_eq!(format_groups("QVPQSOKOILPUB", 5), "QVPQS OKOIL PUB");
/// ```
pub fn format_groups(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }
    let chars: Vec<char> = text.chars().collect();
    let mut grouped = String::with_capacity(text.len() + text.len() / width);
    for (i, chunk) in chars.chunks(width).enumerate() {
        if i > 0 {
            grouped.push(' ');
        }
        grouped.extend(chunk);
    }
    grouped
}
