//! Markdown Rendering
//!
//! FAQ answers are written in Markdown. Raw HTML in the source is shown as
//! text, and links leaving the site open in a new tab.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Render markdown to HTML
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_SMART_PUNCTUATION
}

fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut in_external_link = false;

    for event in parser {
        match event {
            // --- Raw HTML is never trusted ---
            Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),

            // --- External links ---
            Event::Start(Tag::Link { dest_url, title, .. }) if is_external(&dest_url) => {
                in_external_link = true;
                let title_attr = if title.is_empty() {
                    String::new()
                } else {
                    format!(r#" title="{}""#, escape_attr(&title))
                };
                events.push(Event::Html(CowStr::from(format!(
                    r#"<a href="{}"{} target="_blank" rel="noopener noreferrer">"#,
                    escape_attr(&dest_url),
                    title_attr
                ))));
            }
            Event::End(TagEnd::Link) if in_external_link => {
                in_external_link = false;
                events.push(Event::Html(CowStr::from("</a>")));
            }

            other => events.push(other),
        }
    }

    events
}

fn is_external(url: &str) -> bool {
    let lower = url.to_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn escape_attr(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
