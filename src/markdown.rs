use pulldown_cmark::{html, Options, Parser};

/// CommonMark with the GitHub extensions (tables, strikethrough, task lists,
/// footnotes). Raw HTML in the source is passed through untouched.
pub fn to_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_and_emphasis() {
        let html = to_html("# Title\n\nSome *emphasis* and **strong** text.");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<em>emphasis</em>"));
        assert!(html.contains("<strong>strong</strong>"));
    }

    #[test]
    fn renders_github_tables_and_strikethrough() {
        let html = to_html("| a | b |\n|---|---|\n| 1 | 2 |\n\n~~gone~~");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn rendering_is_repeatable() {
        let source = "- [x] done\n- [ ] todo\n\n```rust\nfn main() {}\n```";
        assert_eq!(to_html(source), to_html(source));
    }

    #[test]
    fn raw_html_passes_through() {
        assert!(to_html("<div class=\"box\">hi</div>").contains("<div class=\"box\">hi</div>"));
    }
}
