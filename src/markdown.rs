//! Markdown Rendering
//!
//! pulldown-cmark with syntect highlighting for fenced code blocks. Used for
//! the usage notes on the showcase page.

use pulldown_cmark::{html::push_html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use std::sync::OnceLock;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

/// Syntax highlighter resources (lazy loaded)
static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

const THEME_NAME: &str = "InspiredGitHub";

fn get_syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn get_theme() -> Option<&'static Theme> {
    THEME_SET.get_or_init(ThemeSet::load_defaults).themes.get(THEME_NAME)
}

/// Render markdown to HTML
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES);
    let events = highlight_code_blocks(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

enum State {
    Normal,
    InCodeBlock { lang: Option<String>, content: String },
}

/// Replace each code block with pre-highlighted HTML
fn highlight_code_blocks(parser: Parser<'_>) -> Vec<Event<'_>> {
    let mut events = Vec::new();
    let mut state = State::Normal;

    for event in parser {
        match state {
            State::Normal => match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(l) if !l.is_empty() => Some(l.to_string()),
                        _ => None,
                    };
                    state = State::InCodeBlock { lang, content: String::new() };
                }
                other => events.push(other),
            },
            State::InCodeBlock { ref lang, ref mut content } => match event {
                Event::Text(t) => content.push_str(&t),
                Event::End(TagEnd::CodeBlock) => {
                    let html = highlight_code(content, lang.as_deref());
                    events.push(Event::Html(CowStr::from(html)));
                    state = State::Normal;
                }
                _ => {}
            },
        }
    }

    events
}

fn highlight_code(code: &str, lang: Option<&str>) -> String {
    let ss = get_syntax_set();
    let syntax = lang
        .and_then(|l| ss.find_syntax_by_token(l))
        .unwrap_or_else(|| ss.find_syntax_plain_text());

    get_theme()
        .and_then(|theme| highlighted_html_for_string(code, ss, syntax, theme).ok())
        .unwrap_or_else(|| format!("<pre><code>{}</code></pre>", escape_html(code)))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
