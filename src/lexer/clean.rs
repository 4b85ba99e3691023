use crate::error::LexicalError;

/// Removes `/* ... */` block comments from raw source, leaving every other
/// character untouched. Comments do not nest.
pub fn strip_comments(raw: &str) -> Result<String, LexicalError> {
    let chars: Vec<char> = raw.chars().collect();
    let mut cleaned = String::with_capacity(raw.len());
    let mut index = 0;

    while index < chars.len() {
        if chars[index] == '/' && chars.get(index + 1) == Some(&'*') {
            index += 2;
            loop {
                if index + 1 >= chars.len() {
                    return Err(LexicalError::UnterminatedComment);
                }
                if chars[index] == '*' && chars[index + 1] == '/' {
                    index += 2;
                    break;
                }
                index += 1;
            }
        } else {
            cleaned.push(chars[index]);
            index += 1;
        }
    }

    Ok(cleaned)
}
