/// Collapses every whitespace run (newlines, tabs, no-break spaces included)
/// into a single space and trims both ends.
///
/// Idempotent: normalizing already-normalized text returns it unchanged.
pub fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.chars() {
        if ch.is_whitespace() {
            // Leading whitespace never sets the flag, so nothing is emitted before
            // the first visible char.
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(ch);
        }
    }
    out
}
