//! Markdown Rendering
//!
//! pulldown-cmark with:
//! - tables, strikethrough and task lists
//! - syntax highlighting for fenced code (syntect)
//! - raw HTML in the source shown as text, not injected

use pulldown_cmark::{html::push_html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use pulldown_cmark_escape::escape_html;
use std::sync::OnceLock;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

/// Syntax highlighter resources (lazy loaded)
static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

const FALLBACK_THEME: &str = "InspiredGitHub";

fn get_syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn get_theme(name: &str) -> Option<&'static Theme> {
    let themes = &THEME_SET.get_or_init(ThemeSet::load_defaults).themes;
    themes.get(name)
        .or_else(|| themes.get(FALLBACK_THEME))
        .or_else(|| themes.values().next())
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TABLES
        | Options::ENABLE_TASKLISTS
}

/// Render markdown to an HTML string
pub fn parse_markdown(text: &str, theme: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser, theme);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

/// Collect fenced code into one highlighted block; neutralize raw HTML
fn transform_events<'a>(parser: Parser<'a>, theme: &str) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut code: Option<(Option<String>, String)> = None;

    for event in parser {
        if let Some((lang, content)) = code.as_mut() {
            match event {
                Event::Text(t) => content.push_str(&t),
                Event::End(TagEnd::CodeBlock) => {
                    let html = highlight_code(content, lang.as_deref(), theme);
                    events.push(Event::Html(CowStr::from(html)));
                    code = None;
                }
                _ => {}
            }
            continue;
        }

        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(l) if !l.is_empty() => Some(l.to_string()),
                    _ => None,
                };
                code = Some((lang, String::new()));
            }
            Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),
            other => events.push(other),
        }
    }

    events
}

fn highlight_code(code: &str, lang: Option<&str>, theme: &str) -> String {
    let ss = get_syntax_set();
    let syntax = lang
        .and_then(|l| ss.find_syntax_by_token(l))
        .unwrap_or_else(|| ss.find_syntax_plain_text());

    get_theme(theme)
        .and_then(|theme| highlighted_html_for_string(code, ss, syntax, theme).ok())
        .unwrap_or_else(|| plain_code_block(code))
}

/// Unhighlighted fallback for when no theme loads
fn plain_code_block(code: &str) -> String {
    let mut html = String::from("<pre><code>");
    // Writing into a String cannot fail
    let _ = escape_html(&mut html, code);
    html.push_str("</code></pre>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_markdown() {
        let html = parse_markdown("# Title\n\nSome *text*.", FALLBACK_THEME);
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<em>text</em>"));
    }

    #[test]
    fn test_extensions() {
        let html = parse_markdown("- [x] done\n\n~~old~~\n\n| a | b |\n|---|---|\n| 1 | 2 |\n", FALLBACK_THEME);
        assert!(html.contains("checkbox"));
        assert!(html.contains("<del>old</del>"));
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_fenced_code_is_highlighted() {
        let html = parse_markdown("```rust\nfn main() {}\n```\n", FALLBACK_THEME);
        assert!(html.contains("<pre style="));
        assert!(html.contains("main"));
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let html = parse_markdown("```\nplain\n```\n", "NoSuchTheme");
        assert!(html.contains("plain"));
    }

    #[test]
    fn test_plain_code_block_escapes() {
        let html = plain_code_block("if a < b && c > \"d\" {}");
        assert_eq!(html, "<pre><code>if a &lt; b &amp;&amp; c &gt; &quot;d&quot; {}</code></pre>");
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = parse_markdown("<script>alert(1)</script>\n", FALLBACK_THEME);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
