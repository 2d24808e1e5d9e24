/// Delete every ASCII control character (0x00..=0x1F) and the plain space.
///
/// Tab, LF, CR, VT and NUL all fall inside the control range. DEL (0x7F) and
/// Unicode spaces are kept.
pub fn remove_whitespace(text: &str) -> String {
    text.chars()
        .filter(|&c| !(c == ' ' || (c as u32) < 0x20))
        .collect()
}
