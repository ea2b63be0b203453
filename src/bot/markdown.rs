/// Escapes text for Telegram's legacy `Markdown` parse mode.
pub fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '_' | '*' | '`' | '[' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}

pub fn md<T: AsRef<str>>(text: T) -> String {
    escape_markdown(text.as_ref())
}
