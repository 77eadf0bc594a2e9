use super::token::Token;

/// Splits text into lines, keeping each line's terminator attached to it.
///
/// Only the last line can be unterminated. Joining the tokens gives back the
/// input exactly.
///
/// ## Example
///
/// ```not_rust
/// "Hello\nWorld!" -> ["Hello\n", "World!"]
/// "Line 1\r\nLine 2\n" -> ["Line 1\r\n", "Line 2\n"]
/// ```
#[must_use]
pub fn line_tokenizer(text: &str) -> Vec<Token<String>> {
    text.split_inclusive('\n').map(Token::from).collect()
}

/// Splits a line into its content and its terminator (`"\n"`, `"\r\n"` or
/// `""`).
#[must_use]
pub fn split_line_terminator(line: &str) -> (&str, &str) {
    if let Some(content) = line.strip_suffix("\r\n") {
        (content, &line[content.len()..])
    } else if let Some(content) = line.strip_suffix('\n') {
        (content, &line[content.len()..])
    } else {
        (line, "")
    }
}
