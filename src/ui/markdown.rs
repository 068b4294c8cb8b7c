//! Markdown rendering for article bodies
//!
//! Articles are authored as Markdown and rendered to HTML with pulldown-cmark.
//! Raw HTML in the source is escaped, never passed through.

use leptos::prelude::*;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// Render markdown content as HTML
#[component]
pub fn Markdown(content: &'static str) -> impl IntoView {
    let html = render_article_html(content);

    view! { <div class="prose prose-invert max-w-none" inner_html=html /> }
}

fn heading_tag(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "h1",
        HeadingLevel::H2 => "h2",
        HeadingLevel::H3 => "h3",
        HeadingLevel::H4 => "h4",
        HeadingLevel::H5 => "h5",
        HeadingLevel::H6 => "h6",
    }
}

fn is_external(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Convert an article's markdown to styled HTML
pub fn render_article_html(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut html = String::with_capacity(content.len() * 2);
    // The first paragraph is the article's lead
    let mut seen_paragraph = false;

    for event in Parser::new_ext(content, options) {
        match event {
            Event::Start(tag) => match tag {
                Tag::Paragraph => {
                    if seen_paragraph {
                        html.push_str("<p class=\"mb-6\">");
                    } else {
                        seen_paragraph = true;
                        html.push_str("<p class=\"text-lg leading-relaxed mb-6\">");
                    }
                }
                Tag::Heading { level, .. } => {
                    let class = match level {
                        HeadingLevel::H1 | HeadingLevel::H2 => "text-2xl font-bold mt-10 mb-4",
                        _ => "text-xl font-semibold mt-8 mb-3",
                    };
                    html.push_str(&format!("<{} class=\"{}\">", heading_tag(level), class));
                }
                Tag::BlockQuote(_) => {
                    html.push_str(
                        "<blockquote class=\"border-l-4 border-purple-500 pl-4 my-6 text-gray-300 italic\">",
                    );
                }
                Tag::List(Some(_)) => html.push_str("<ol class=\"list-decimal pl-6 mb-6 space-y-2\">"),
                Tag::List(None) => html.push_str("<ul class=\"list-disc pl-6 mb-6 space-y-2\">"),
                Tag::Item => html.push_str("<li>"),
                Tag::Emphasis => html.push_str("<em>"),
                Tag::Strong => html.push_str("<strong class=\"font-bold\">"),
                Tag::Strikethrough => html.push_str("<del>"),
                Tag::Link { dest_url, .. } => {
                    let target = if is_external(&dest_url) {
                        " target=\"_blank\" rel=\"noopener noreferrer\""
                    } else {
                        ""
                    };
                    html.push_str(&format!(
                        "<a href=\"{}\" class=\"text-purple-400 hover:underline\"{}>",
                        escape_html(&dest_url),
                        target
                    ));
                }
                _ => {}
            },
            Event::End(tag) => match tag {
                TagEnd::Paragraph => html.push_str("</p>"),
                TagEnd::Heading(level) => html.push_str(&format!("</{}>", heading_tag(level))),
                TagEnd::BlockQuote(_) => html.push_str("</blockquote>"),
                TagEnd::List(true) => html.push_str("</ol>"),
                TagEnd::List(false) => html.push_str("</ul>"),
                TagEnd::Item => html.push_str("</li>"),
                TagEnd::Emphasis => html.push_str("</em>"),
                TagEnd::Strong => html.push_str("</strong>"),
                TagEnd::Strikethrough => html.push_str("</del>"),
                TagEnd::Link => html.push_str("</a>"),
                _ => {}
            },
            Event::Text(text) | Event::Code(text) => html.push_str(&escape_html(&text)),
            Event::Html(raw) | Event::InlineHtml(raw) => html.push_str(&escape_html(&raw)),
            Event::SoftBreak => html.push(' '),
            Event::HardBreak => html.push_str("<br />"),
            Event::Rule => html.push_str("<hr class=\"my-10 border-white/10\" />"),
            _ => {}
        }
    }

    html
}

/// Escape HTML special characters
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_paragraph_is_lead() {
        let html = render_article_html("Lead text.\n\nBody text.");
        assert!(html.starts_with("<p class=\"text-lg leading-relaxed mb-6\">Lead text.</p>"));
        assert!(html.contains("<p class=\"mb-6\">Body text.</p>"));
    }

    #[test]
    fn test_section_heading() {
        let html = render_article_html("## Key Principles");
        assert!(html.contains("<h2 class=\"text-2xl font-bold mt-10 mb-4\">Key Principles</h2>"));
    }

    #[test]
    fn test_bullet_list() {
        let html = render_article_html("- one\n- two");
        assert!(html.contains("<ul class=\"list-disc"));
        assert_eq!(html.matches("<li>").count(), 2);
    }

    #[test]
    fn test_internal_link_stays_in_tab() {
        let html = render_article_html("[Home](/)");
        assert!(html.contains("href=\"/\""));
        assert!(!html.contains("_blank"));
    }

    #[test]
    fn test_external_link_opens_new_tab() {
        let html = render_article_html("[Docs](https://example.com)");
        assert!(html.contains("target=\"_blank\""));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_article_html("<script>alert('x')</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & \"b\""), "a &amp; &quot;b&quot;");
    }
}
