use lazy_static::lazy_static;
use ratatui::{prelude::*, widgets::Paragraph};
use regex::Regex;

use crate::presentation::config::styles::Styles;

lazy_static! {
    /// One pass per line; earlier alternatives win, so comments and strings
    /// shadow everything inside them.
    static ref TOKEN: Regex = Regex::new(
        r#"(?x)
        (?P<comment>\#.*$)
        | (?P<string>"[^"]*"|'[^']*')
        | (?P<keyword>\b(?:def|class|if|elif|else|for|while|in|not|and|or|return|import|from|as|with|global|pass)\b)
        | (?P<bool>\b(?:True|False|None)\b)
        | (?P<builtin>\b(?:print|len|range|abs|int|str|Actor|Rect|keyboard|sounds|music|screen|clock|animate|exit)\b)
        | (?P<constant>\b[A-Z][A-Z0-9_]{2,}\b)
        | (?P<number>\b\d+(?:\.\d+)?\b)
        "#
    )
    .expect("token pattern is valid");
}

/// Minimal Python syntax highlighting for the course snippets. This is a
/// presentation toy, not a lexer; it only needs to make the examples
/// readable.
pub struct CodeBlock<'a> {
    code: &'a str,
    styles: &'a Styles,
}

impl<'a> CodeBlock<'a> {
    pub fn new(code: &'a str, styles: &'a Styles) -> Self {
        Self { code, styles }
    }

    /// Highlighted lines, ready to embed into a larger text body.
    pub fn lines(&self) -> Vec<Line<'static>> {
        self.code
            .lines()
            .map(|line| self.highlight_line(line))
            .collect()
    }

    fn highlight_line(&self, line: &str) -> Line<'static> {
        let mut spans = Vec::new();
        let mut cursor = 0;

        for caps in TOKEN.captures_iter(line) {
            let m = caps.get(0).expect("group 0 always matches");
            if m.start() > cursor {
                spans.push(Span::raw(line[cursor..m.start()].to_string()));
            }

            let style_name = if caps.name("comment").is_some() {
                "code_comment"
            } else if caps.name("string").is_some() {
                "code_string"
            } else if caps.name("keyword").is_some() {
                "code_keyword"
            } else if caps.name("bool").is_some() {
                "code_bool"
            } else if caps.name("builtin").is_some() {
                "code_builtin"
            } else if caps.name("constant").is_some() {
                "code_constant"
            } else {
                "code_number"
            };
            spans.push(Span::styled(
                m.as_str().to_string(),
                self.styles.style(style_name),
            ));
            cursor = m.end();
        }

        if cursor < line.len() {
            spans.push(Span::raw(line[cursor..].to_string()));
        }
        Line::from(spans)
    }
}

impl Widget for CodeBlock<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Text::from(self.lines())).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styles() -> Styles {
        json5::from_str(
            r#"{
                "code_keyword": "magenta bold",
                "code_string": "green",
                "code_comment": "dark gray",
                "code_number": "magenta",
            }"#,
        )
        .expect("test styles parse")
    }

    fn rendered(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_highlighting_preserves_text() {
        let styles = styles();
        let code = "def update():\n    bird.y += velocity  # fall";
        let block = CodeBlock::new(code, &styles);
        let lines = block.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(rendered(&lines[0]), "def update():");
        assert_eq!(rendered(&lines[1]), "    bird.y += velocity  # fall");
    }

    #[test]
    fn test_keyword_gets_keyword_style() {
        let styles = styles();
        let keyword_style = styles.style("code_keyword");
        let block = CodeBlock::new("if score > 10:", &styles);
        let line = &block.lines()[0];
        let if_span = line
            .spans
            .iter()
            .find(|s| s.content == "if")
            .expect("keyword span exists");
        assert_eq!(if_span.style, keyword_style);
    }

    #[test]
    fn test_comment_shadows_inner_tokens() {
        let styles = styles();
        let comment_style = styles.style("code_comment");
        let block = CodeBlock::new("x = 1  # if True", &styles);
        let line = &block.lines()[0];
        let comment = line
            .spans
            .iter()
            .find(|s| s.content.starts_with('#'))
            .expect("comment span exists");
        assert_eq!(comment.content, "# if True");
        assert_eq!(comment.style, comment_style);
    }
}
