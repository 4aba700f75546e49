//! HTML rendering of the filter page.
//!
//! The page embeds the dehydrated query cache in a JSON script tag (the
//! hydration boundary) next to the client view mount point, which is
//! pre-rendered with the prefetched notes.

use std::fmt::Write as _;

use notehub_core::{NotesResult, PageMetadata};
use notehub_service::{FilterPage, ServiceError};

/// Embedded page shell with `{{title}}`, `{{head}}` and `{{body}}` slots.
pub const PAGE_HTML: &str = include_str!("page.html");

/// Id of the script tag carrying the dehydrated state.
pub const STATE_SCRIPT_ID: &str = "__NOTEHUB_STATE__";

/// Id of the element the client view mounts on.
pub const CLIENT_ROOT_ID: &str = "notes-client";

pub fn render_filter_page(page: &FilterPage) -> Result<String, ServiceError> {
    let state = script_safe_json(&page.dehydrated_state.to_json()?);
    let tag_attr = page.tag.map(|t| format!(r#" data-tag="{t}""#)).unwrap_or_default();

    let mut body = String::new();
    let _ = writeln!(body, "    <h1>{}</h1>", escape_html(&page.metadata.title));
    let _ = writeln!(
        body,
        r#"    <script id="{STATE_SCRIPT_ID}" type="application/json">{state}</script>"#
    );
    let _ = writeln!(body, r#"    <div id="{CLIENT_ROOT_ID}"{tag_attr}>"#);
    if let Some(query) = page.dehydrated_state.queries.first() {
        render_notes(&mut body, &query.state.data);
    }
    body.push_str("    </div>");

    Ok(render_shell(&page.metadata, &body))
}

pub fn render_not_found(metadata: &PageMetadata) -> String {
    render_shell(metadata, "    <h1>404</h1>\n    <p>This category does not exist.</p>")
}

pub fn render_error() -> String {
    let metadata = PageMetadata {
        title: format!("{} - Error", notehub_core::APP_NAME),
        description: None,
        open_graph: None,
    };
    render_shell(&metadata, "    <h1>Something went wrong</h1>\n    <p>Please try again later.</p>")
}

fn render_notes(out: &mut String, data: &NotesResult) {
    if data.notes.is_empty() {
        out.push_str("      <p class=\"empty\">No notes found.</p>\n");
        return;
    }
    out.push_str("      <ul class=\"notes\">\n");
    for note in &data.notes {
        let _ = writeln!(
            out,
            r#"        <li class="note" data-id="{}"><h2>{}</h2><p>{}</p><span class="tag">{}</span></li>"#,
            escape_html(&note.id),
            escape_html(&note.title),
            escape_html(&note.content),
            note.tag,
        );
    }
    out.push_str("      </ul>\n");
}

fn render_shell(metadata: &PageMetadata, body: &str) -> String {
    let mut head = String::new();
    if let Some(description) = &metadata.description {
        let _ = writeln!(head, r#"  <meta name="description" content="{}">"#, escape_html(description));
    }
    if let Some(og) = &metadata.open_graph {
        let _ = writeln!(head, r#"  <link rel="canonical" href="{}">"#, escape_html(&og.url));
        let _ = writeln!(head, r#"  <meta property="og:title" content="{}">"#, escape_html(&og.title));
        let _ = writeln!(head, r#"  <meta property="og:url" content="{}">"#, escape_html(&og.url));
        for image in &og.images {
            let _ = writeln!(head, r#"  <meta property="og:image" content="{}">"#, escape_html(&image.url));
        }
    }

    PAGE_HTML
        .replace("{{title}}", &escape_html(&metadata.title))
        .replace("{{head}}", head.trim_end_matches('\n'))
        .replace("{{body}}", body)
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// JSON is valid inside `<script>` only if it cannot close the tag.
fn script_safe_json(json: &str) -> String {
    json.replace('<', "\\u003c").replace('>', "\\u003e").replace('&', "\\u0026")
}

#[cfg(test)]
mod tests {
    use super::*;
    use notehub_core::{Category, NoteQueryKey, Tag};
    use notehub_service::{DehydratedQuery, DehydratedState, QueryState, QueryStatus};

    fn page_with(data: NotesResult, tag: Option<Tag>) -> FilterPage {
        let category = tag.map_or(Category::All, Category::from);
        FilterPage {
            category,
            metadata: PageMetadata::for_category(category, "https://notes.example.com"),
            tag,
            dehydrated_state: DehydratedState {
                queries: vec![DehydratedQuery {
                    query_key: NoteQueryKey::first_page(tag),
                    state: QueryState { data, data_updated_at: 1, status: QueryStatus::Success },
                }],
            },
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;");
    }

    #[test]
    fn test_script_safe_json_cannot_close_tag() {
        let json = script_safe_json(r#"{"title":"</script><b>"}"#);
        assert!(!json.contains("</script>"));
        let back: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back["title"], "</script><b>");
    }

    #[test]
    fn test_filter_page_has_metadata_and_mount_point() {
        let html = render_filter_page(&page_with(NotesResult::default(), Some(Tag::Work))).unwrap();
        assert!(html.contains("<title>NoteHub - Work</title>"));
        assert!(html.contains(r#"<meta property="og:url" content="https://notes.example.com/notes/filter/Work">"#));
        assert!(html.contains(r#"<div id="notes-client" data-tag="Work">"#));
        assert!(html.contains(r#"<script id="__NOTEHUB_STATE__" type="application/json">"#));
        assert!(html.contains("No notes found."));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_all_page_has_no_tag_attribute() {
        let html = render_filter_page(&page_with(NotesResult::default(), None)).unwrap();
        assert!(html.contains(r#"<div id="notes-client">"#));
    }

    #[test]
    fn test_not_found_page() {
        let html = render_not_found(&PageMetadata::not_found());
        assert!(html.contains("<title>NoteHub - Not Found</title>"));
        assert!(!html.contains("og:title"));
    }
}
