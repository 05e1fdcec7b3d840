//! HTML response digest
//!
//! Error pages from reverse proxies and the Mealie frontend come back as
//! HTML. Instead of dumping markup, show the title and the message text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Visible text longer than this is cut off
pub const MAX_TEXT_LEN: usize = 500;

/// At most this many message elements are shown
const MAX_MESSAGES: usize = 3;

const MESSAGE_CLASS_KEYWORDS: &[&str] = &["error", "message", "alert", "warning"];

static TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").unwrap());

/// Opening or closing `div`, `p` or `span` tag
static ELEMENT_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<(/?)(div|p|span)\b([^>]*)>").unwrap());

static CLASS_ATTR: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(?is)\bclass\s*=\s*["']([^"']*)["']"#).unwrap());

static BODY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<body[^>]*>(.*)</body>").unwrap());

static SCRIPT_OR_STYLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script\b.*?</script\s*>|<style\b.*?</style\s*>").unwrap());

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());

/// Summarize an HTML document for the terminal.
///
/// Falls back to the original content when nothing readable is found.
pub fn format_html(html: &str) -> String {
    let mut result = String::new();

    if let Some(title) = TITLE.captures(html).map(|c| text_of(&c[1])) {
        if !title.is_empty() {
            result.push_str(&format!("Title: {}\n\n", title));
        }
    }

    let messages = message_texts(html);
    if !messages.is_empty() {
        result.push_str("Error/Message content:\n");
        for message in messages {
            result.push_str(&format!("- {}\n", message));
        }
    } else {
        result.push_str(&visible_text(html));
    }

    if result.trim().is_empty() {
        html.to_string()
    } else {
        result
    }
}

/// Text of elements whose class mentions an error or message
fn message_texts(html: &str) -> Vec<String> {
    let tags: Vec<_> = ELEMENT_TAG.captures_iter(html).collect();
    let mut messages = Vec::new();

    for (i, open) in tags.iter().enumerate() {
        if messages.len() == MAX_MESSAGES {
            break;
        }
        if !open[1].is_empty() || !is_message_class(&open[3]) {
            continue;
        }

        let start = open.get(0).map_or(0, |m| m.end());
        let end = closing_tag_start(&tags[i + 1..], &open[2]).unwrap_or(html.len());
        let text = text_of(&html[start..end]);
        if !text.is_empty() {
            messages.push(text);
        }
    }

    messages
}

fn is_message_class(attrs: &str) -> bool {
    CLASS_ATTR
        .captures(attrs)
        .map(|class| {
            let class = class[1].to_lowercase();
            MESSAGE_CLASS_KEYWORDS.iter().any(|k| class.contains(k))
        })
        .unwrap_or(false)
}

/// Offset of the tag closing an element named `name`, skipping nested
/// elements of the same name
fn closing_tag_start(following: &[regex::Captures<'_>], name: &str) -> Option<usize> {
    let mut depth = 0usize;
    for tag in following {
        if !tag[2].eq_ignore_ascii_case(name) {
            continue;
        }
        if tag[1].is_empty() {
            depth += 1;
        } else if depth == 0 {
            return tag.get(0).map(|m| m.start());
        } else {
            depth -= 1;
        }
    }
    None
}

/// Visible body text, one phrase per line, truncated
fn visible_text(html: &str) -> String {
    let body = BODY.captures(html).map(|c| c[1].to_string()).unwrap_or_else(|| html.to_string());
    let without_code = SCRIPT_OR_STYLE.replace_all(&body, "");
    let text = decode_entities(&TAG.replace_all(&without_code, "\n"));

    let clean: Vec<&str> = text
        .lines()
        .flat_map(|line| line.trim().split("  "))
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect();
    let clean = clean.join("\n");

    if clean.chars().count() > MAX_TEXT_LEN {
        let cut: String = clean.chars().take(MAX_TEXT_LEN).collect();
        format!("{}...\n[Content truncated]", cut)
    } else {
        clean
    }
}

/// Inner text of a fragment with whitespace collapsed
fn text_of(fragment: &str) -> String {
    let text = decode_entities(&TAG.replace_all(fragment, " "));
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
