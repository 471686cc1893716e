//! Markdown to HTML rendering via `pulldown-cmark`.

use pulldown_cmark::{Options, Parser, html};

/// Extensions beyond strict CommonMark: tables, strikethrough, task
/// lists, and footnotes.
const EXTENSIONS: Options = Options::ENABLE_TABLES
    .union(Options::ENABLE_STRIKETHROUGH)
    .union(Options::ENABLE_TASKLISTS)
    .union(Options::ENABLE_FOOTNOTES);

/// Render a Markdown document as an HTML fragment.
#[must_use]
pub fn to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, EXTENSIONS);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings() {
        assert_eq!(to_html("# Hello World"), "<h1>Hello World</h1>\n");
    }

    #[test]
    fn renders_inline_emphasis() {
        assert_eq!(
            to_html("**bold** and *soft*"),
            "<p><strong>bold</strong> and <em>soft</em></p>\n"
        );
    }

    #[test]
    fn tables_are_enabled() {
        let rendered = to_html("| a | b |\n| - | - |\n| 1 | 2 |");
        assert!(rendered.contains("<table>"), "{rendered}");
        assert!(rendered.contains("<td>1</td>"), "{rendered}");
    }

    #[test]
    fn strikethrough_is_enabled() {
        assert!(to_html("~~gone~~").contains("<del>gone</del>"));
    }

    #[test]
    fn task_lists_are_enabled() {
        let rendered = to_html("- [x] ship it\n- [ ] later");
        assert!(rendered.contains("checkbox"), "{rendered}");
        assert!(rendered.contains("checked"), "{rendered}");
    }

    #[test]
    fn footnotes_are_enabled() {
        let rendered = to_html("claim[^1]\n\n[^1]: source");
        assert!(rendered.contains("footnote-reference"), "{rendered}");
    }

    #[test]
    fn empty_document_renders_nothing() {
        assert_eq!(to_html(""), "");
    }
}
