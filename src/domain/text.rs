//! Display-width aware text helpers for terminal rendering.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap `s` into lines of at most `width` terminal cells, breaking on
/// whitespace where possible. A `width` of 0 yields no lines.
pub fn wrap_text(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for raw_line in s.split('\n') {
        if raw_line.is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            let sep = usize::from(!current.is_empty());
            if current.width() + sep + word.width() <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
            } else {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                // A single word wider than the line is hard-broken.
                if word.width() > width {
                    let mut chunk = String::new();
                    for c in word.chars() {
                        if chunk.width() + c.width().unwrap_or(0) > width {
                            lines.push(std::mem::take(&mut chunk));
                        }
                        chunk.push(c);
                    }
                    current = chunk;
                } else {
                    current = word.to_string();
                }
            }
        }
        lines.push(current);
    }
    lines
}

/// Truncate `s` to at most `width` terminal cells, appending `…` when
/// anything was cut off.
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    for c in s.chars() {
        if out.width() + c.width().unwrap_or(0) > width.saturating_sub(1) {
            break;
        }
        out.push(c);
    }
    out.push('…');
    out
}
