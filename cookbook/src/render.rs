//! Markdown to HTML with cookbook class names and heading anchors.
//!
//! ARCHITECTURE
//! ============
//! `pulldown-cmark` parses; this module rewrites the event stream before
//! handing it to `pulldown_cmark::html`. Elements that need a class or an id
//! are replaced by pre-rendered `Html` events, everything else passes through.
//! Heading events are buffered until their end tag so the slug can be
//! computed from the full heading text; the same [`Slugger`] sequence as
//! [`crate::markdown::all_headings`] guarantees matching ids.
//!
//! Raw HTML in the source is dropped.

use pulldown_cmark::{Alignment, CodeBlockKind, CowStr, Event, LinkType, Parser, Tag, TagEnd, html};

use crate::markdown::{heading_depth, parser_options, plain_text};
use crate::slug::Slugger;

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;

/// Render a document wrapped in `<div class="markdown-body">`.
#[must_use]
pub fn render_markdown(content: &str) -> String {
    let mut out = String::from("<div class=\"markdown-body\">\n");
    out.push_str(&render_body(content));
    out.push_str("</div>\n");
    out
}

/// Render a document without the wrapper element.
#[must_use]
pub fn render_body(content: &str) -> String {
    let mut out = String::with_capacity(content.len() * 3 / 2);
    html::push_html(&mut out, styled_events(content).into_iter());
    out
}

#[derive(Default)]
struct TableState {
    alignments: Vec<Alignment>,
    in_head: bool,
    cell: usize,
}

fn styled_events(content: &str) -> Vec<Event<'_>> {
    let mut slugger = Slugger::new();
    let mut out = Vec::new();
    let mut heading: Option<(u8, Vec<Event<'_>>)> = None;
    let mut table = TableState::default();

    for event in Parser::new_ext(content, parser_options()) {
        if let Some((_, buffered)) = heading.as_mut() {
            if !matches!(event, Event::End(TagEnd::Heading(_))) {
                buffered.push(event);
                continue;
            }
            if let Some((depth, inner)) = heading.take() {
                let slug = escape_html(&slugger.slug(&plain_text(&inner)));
                out.push(raw(format!(
                    "<h{depth} id=\"{slug}\" class=\"markdown-heading\"><a href=\"#{slug}\">"
                )));
                out.extend(inner.into_iter().filter_map(heading_inline));
                out.push(raw(format!("</a></h{depth}>\n")));
            }
            continue;
        }

        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                heading = Some((heading_depth(level), Vec::new()));
            }
            Event::Start(Tag::Paragraph) => out.push(raw("<p class=\"markdown-paragraph\">".to_owned())),
            Event::End(TagEnd::Paragraph) => out.push(raw("</p>\n".to_owned())),
            Event::Start(Tag::Link { link_type, dest_url, title, .. }) => {
                out.push(raw(link_open(link_type, &dest_url, &title)));
            }
            Event::End(TagEnd::Link) => out.push(raw("</a>".to_owned())),
            Event::Code(code) => out.push(inline_code(&code)),
            Event::Start(Tag::CodeBlock(kind)) => out.push(raw(code_block_open(&kind))),
            Event::End(TagEnd::CodeBlock) => out.push(raw("</code></pre>\n".to_owned())),
            Event::Start(Tag::Table(alignments)) => {
                table = TableState { alignments, ..TableState::default() };
                out.push(raw("<table class=\"markdown-table\">\n".to_owned()));
            }
            Event::Start(Tag::TableHead) => {
                table.in_head = true;
                table.cell = 0;
                out.push(raw("<thead><tr>".to_owned()));
            }
            Event::End(TagEnd::TableHead) => {
                table.in_head = false;
                out.push(raw("</tr></thead>\n<tbody>\n".to_owned()));
            }
            Event::Start(Tag::TableRow) => {
                table.cell = 0;
                out.push(raw("<tr>".to_owned()));
            }
            Event::End(TagEnd::TableRow) => out.push(raw("</tr>\n".to_owned())),
            Event::Start(Tag::TableCell) => {
                let style = alignment_style(table.alignments.get(table.cell).copied());
                let open = if table.in_head {
                    format!("<th class=\"markdown-table-header\"{style}>")
                } else {
                    format!("<td class=\"markdown-table-cell\"{style}>")
                };
                out.push(raw(open));
            }
            Event::End(TagEnd::TableCell) => {
                table.cell += 1;
                let close = if table.in_head { "</th>" } else { "</td>" };
                out.push(raw(close.to_owned()));
            }
            Event::End(TagEnd::Table) => out.push(raw("</tbody></table>\n".to_owned())),
            Event::Html(_) | Event::InlineHtml(_) => {}
            other => out.push(other),
        }
    }
    out
}

// Inside a heading the content is already wrapped in an anchor, so nested
// links keep only their text.
fn heading_inline(event: Event<'_>) -> Option<Event<'_>> {
    match event {
        Event::Start(Tag::Link { .. }) | Event::End(TagEnd::Link) => None,
        Event::Html(_) | Event::InlineHtml(_) => None,
        Event::Code(code) => Some(inline_code(&code)),
        other => Some(other),
    }
}

fn raw(html: String) -> Event<'static> {
    Event::Html(CowStr::from(html))
}

fn inline_code(code: &str) -> Event<'static> {
    raw(format!("<code class=\"markdown-inline-code\">{}</code>", escape_html(code)))
}

fn link_open(link_type: LinkType, dest: &str, title: &str) -> String {
    let href = if link_type == LinkType::Email && !dest.starts_with("mailto:") {
        format!("mailto:{dest}")
    } else {
        dest.to_owned()
    };
    let mut open = format!("<a href=\"{}\"", escape_html(&href));
    if !title.is_empty() {
        open.push_str(&format!(" title=\"{}\"", escape_html(title)));
    }
    open.push_str(" class=\"markdown-link\">");
    open
}

fn code_block_open(kind: &CodeBlockKind<'_>) -> String {
    let language = match kind {
        CodeBlockKind::Fenced(info) => code_language(info),
        CodeBlockKind::Indented => None,
    };
    match language {
        Some(lang) => format!("<pre class=\"language-{lang}\"><code class=\"markdown-code-block\">"),
        None => "<pre><code class=\"markdown-code-block\">".to_owned(),
    }
}

/// Leading word characters of a fence info string (`rust,ignore` gives `rust`).
fn code_language(info: &str) -> Option<&str> {
    let word = info.trim_start();
    let end = word
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(word.len());
    (end > 0).then(|| &word[..end])
}

fn alignment_style(alignment: Option<Alignment>) -> &'static str {
    match alignment {
        Some(Alignment::Left) => " style=\"text-align: left\"",
        Some(Alignment::Center) => " style=\"text-align: center\"",
        Some(Alignment::Right) => " style=\"text-align: right\"",
        Some(Alignment::None) | None => "",
    }
}

/// Escape text for HTML content and double-quoted attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
