//! HTML extraction for job-board listing and detail pages

use regex::Regex;
use reqwest::Url;
use scraper::{ElementRef, Html, Node, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;
use taxa_domain::JobPosting;
use taxa_domain::util::truncate_chars;

const LINK_SELECTOR: &str = "a[href*='view-job']";
const HEADING_SELECTOR: &str = "h1, h2, h3, h4, h5, h6";
const DETAIL_BLOCK_SELECTOR: &str = "article, section, main";

/// How many ancestors of a posting link are searched for its title
const MAX_ANCESTORS: usize = 6;

/// Listing snippets fall back to this many characters of container text
const MAX_SNIPPET_CHARS: usize = 600;

/// A `div` must carry more text than this to count as the detail body
const MIN_DETAIL_DIV_CHARS: usize = 200;

/// Tags whose subtree never contributes text
const SKIP_TAGS: [&str; 4] = ["script", "style", "noscript", "svg"];

// Parsed once; `None` only if a pattern above fails to parse.
static LINKS: LazyLock<Option<Selector>> = LazyLock::new(|| Selector::parse(LINK_SELECTOR).ok());
static HEADINGS: LazyLock<Option<Selector>> =
    LazyLock::new(|| Selector::parse(HEADING_SELECTOR).ok());
static PARAGRAPHS: LazyLock<Option<Selector>> = LazyLock::new(|| Selector::parse("p").ok());
static DETAIL_BLOCKS: LazyLock<Option<Selector>> =
    LazyLock::new(|| Selector::parse(DETAIL_BLOCK_SELECTOR).ok());
static DIVS: LazyLock<Option<Selector>> = LazyLock::new(|| Selector::parse("div").ok());
static LOCATION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"Location[:\s]+([^\[]+?)(?:\s{2,}|\s*\[|$)").ok());

/// Extract postings from a listing page.
///
/// Every `<a>` whose `href` contains `view-job` is a posting. Links are made
/// absolute against `root`; repeats on the same page are dropped.
pub fn extract_postings(html: &str, root: &Url) -> Vec<JobPosting> {
    let (Some(links), Some(headings), Some(paragraphs), Some(location)) = (
        LINKS.as_ref(),
        HEADINGS.as_ref(),
        PARAGRAPHS.as_ref(),
        LOCATION.as_ref(),
    ) else {
        return Vec::new();
    };

    let document = Html::parse_document(html);
    let mut seen = HashSet::new();
    let mut postings = Vec::new();
    let mut previous_heading: Option<ElementRef> = None;

    // Document order, so the last heading seen precedes the current link
    for node in document.root_element().descendants() {
        let Some(element) = ElementRef::wrap(node) else {
            continue;
        };
        if headings.matches(&element) {
            previous_heading = Some(element);
            continue;
        }
        if !links.matches(&element) {
            continue;
        }

        let Some(link) = element
            .value()
            .attr("href")
            .and_then(|href| normalize_link(href, root))
        else {
            continue;
        };
        if !seen.insert(link.to_string()) {
            continue;
        }

        let (container, heading) = find_container(element, headings);
        let title = heading
            .or(previous_heading)
            .map(inline_text)
            .unwrap_or_default();

        let text = inline_text(container);
        let location = location
            .captures(&text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();

        let description = match container.select(paragraphs).next() {
            Some(p) => inline_text(p),
            None => {
                let snippet = if title.is_empty() {
                    text.clone()
                } else {
                    text.replace(&title, "")
                };
                truncate_chars(snippet.trim(), MAX_SNIPPET_CHARS)
                    .trim()
                    .to_string()
            }
        };

        postings.push(
            JobPosting::new(link.as_str())
                .with_id(posting_id(&link))
                .with_title(title)
                .with_location(location)
                .with_description(description),
        );
    }

    postings
}

/// Walk up from the link looking for a block that holds a heading.
///
/// Returns the block (or the outermost ancestor reached) and its first
/// heading, if any.
fn find_container<'a>(
    link: ElementRef<'a>,
    headings: &Selector,
) -> (ElementRef<'a>, Option<ElementRef<'a>>) {
    let mut container = link;
    for ancestor in link
        .ancestors()
        .filter_map(ElementRef::wrap)
        .take(MAX_ANCESTORS)
    {
        container = ancestor;
        if let Some(heading) = ancestor.select(headings).next() {
            return (ancestor, Some(heading));
        }
    }
    (container, None)
}

/// Resolve `href` against the board root.
///
/// Handles scheme-relative (`//host/x`), root-relative and plain relative
/// links. Returns `None` for blank or unparseable values.
pub fn normalize_link(href: &str, root: &Url) -> Option<Url> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    root.join(href).ok()
}

/// The `id` query parameter of a posting link, or empty.
pub fn posting_id(link: &Url) -> String {
    link.query_pairs()
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default()
}

/// Pick the main text of a posting's detail page.
///
/// Preference: the largest `article`/`section`/`main` block, then any larger
/// `div` over 200 characters that is not a footer or nav, then the whole body.
pub fn detail_text(html: &str) -> String {
    let (Some(blocks), Some(divs)) = (DETAIL_BLOCKS.as_ref(), DIVS.as_ref()) else {
        return String::new();
    };

    let document = Html::parse_document(html);
    let mut best = String::new();

    for block in document.select(blocks) {
        let text = block_text(block);
        if text.chars().count() > best.chars().count() {
            best = text;
        }
    }

    for div in document.select(divs) {
        let text = block_text(div);
        let len = text.chars().count();
        if len <= best.chars().count() || len <= MIN_DETAIL_DIV_CHARS {
            continue;
        }
        let class = div.value().attr("class").unwrap_or("").to_lowercase();
        if class.contains("footer") || class.contains("nav") {
            continue;
        }
        best = text;
    }

    if best.is_empty() {
        best = block_text(document.root_element());
    }

    collapse_blank_lines(&best)
}

/// Text pieces joined with single spaces (listing fields).
fn inline_text(element: ElementRef) -> String {
    collect_text(element).join(" ")
}

/// Text pieces separated by blank lines (detail body).
fn block_text(element: ElementRef) -> String {
    collect_text(element).join("\n\n")
}

/// Recursively collect trimmed, non-empty text nodes, skipping script-like tags.
fn collect_text(element: ElementRef) -> Vec<String> {
    if SKIP_TAGS.contains(&element.value().name()) {
        return Vec::new();
    }

    let mut parts = Vec::new();
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let t = text.trim();
                if !t.is_empty() {
                    parts.push(t.to_string());
                }
            }
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    parts.extend(collect_text(child_el));
                }
            }
            _ => {}
        }
    }
    parts
}

/// Collapse runs of three or more newlines to a single blank line.
fn collapse_blank_lines(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut newlines = 0;
    for ch in text.chars() {
        if ch == '\n' {
            newlines += 1;
            if newlines <= 2 {
                result.push(ch);
            }
        } else {
            newlines = 0;
            result.push(ch);
        }
    }
    result.trim().to_string()
}
