//! Allowlist HTML sanitizer for author-supplied rich text.
//!
//! Portfolio write-ups arrive as raw HTML strings. They come from the site
//! author, not end users, but are still filtered defensively before they are
//! embedded: script-executing constructs, event handlers and unsafe URL
//! schemes never reach a page. The filter is a single pass over the input and
//! never fails - malformed markup degrades to text or gets dropped.
//!
//! The output type is [`SafeHtml`]; the only ways to obtain one are the
//! sanitizer itself and [`SafeHtml::from_text`], so "safe to embed" holds by
//! construction wherever the renderer accepts the type.

use std::fmt;

use url::Url;

use crate::render::markup::escape_text;

/// An HTML fragment that is safe to embed into a page without re-checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeHtml(String);

impl SafeHtml {
    /// Escape plain text into a trivially safe fragment.
    pub fn from_text(text: &str) -> Self {
        SafeHtml(escape_text(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SafeHtml {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Structural and text-formatting tags the portfolio layout needs.
const ALLOWED_TAGS: &[&str] = &[
    "p", "br", "hr", "h1", "h2", "h3", "h4", "ul", "ol", "li", "em", "strong", "i", "b", "u",
    "s", "blockquote", "code", "pre", "a", "img", "span", "div", "table", "thead", "tbody",
    "tr", "th", "td",
];

/// Tags emitted without a closing counterpart.
const VOID_TAGS: &[&str] = &["br", "hr", "img"];

/// Disallowed tags whose entire content is removed, not just the tag itself.
const CONTENT_SWALLOWING_TAGS: &[&str] =
    &["script", "style", "iframe", "object", "embed", "title", "svg", "math"];

const URL_ATTRS: &[&str] = &["href", "src"];

const ALLOWED_URL_SCHEMES: &[&str] = &["http", "https", "mailto"];

fn attr_allowed(tag: &str, attr: &str) -> bool {
    match attr {
        "class" => true,
        "href" | "title" => tag == "a",
        "src" | "alt" | "width" | "height" => tag == "img",
        _ => false,
    }
}

/// Relative URLs pass; absolute URLs pass only with an allowlisted scheme.
/// The url crate strips tabs and newlines before parsing, so scheme smuggling
/// like `java\nscript:` still resolves to a rejected scheme.
fn url_is_safe(raw: &str) -> bool {
    let value = raw.trim();
    if value.is_empty() {
        return true;
    }
    match Url::parse(value) {
        Ok(url) => ALLOWED_URL_SCHEMES.contains(&url.scheme()),
        Err(url::ParseError::RelativeUrlWithoutBase) => true,
        Err(_) => false,
    }
}

/// Browsers resolve character references and drop ASCII control characters
/// before URL parsing, so `javascript&colon;` and `jav&#x0A;ascript:` reach
/// the engine as a plain `javascript:` scheme. The scheme check has to run on
/// that same decoded form, and the decoded form is what gets re-emitted.
fn decode_url_value(raw: &str) -> String {
    decode_char_refs(raw)
        .chars()
        .filter(|c| !c.is_ascii_control())
        .collect()
}

/// Decode numeric character references plus the named ones that can encode
/// URL-significant characters. Unknown references pass through untouched.
fn decode_char_refs(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos + 1..];
        match parse_char_ref(tail) {
            Some((ch, used)) => {
                out.push(ch);
                rest = &tail[used..];
            }
            None => {
                out.push('&');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Parse one character reference after a `&`; returns the decoded character
/// and the byte count consumed. Numeric references may omit the trailing `;`
/// because browsers accept that form, named ones require it.
fn parse_char_ref(tail: &str) -> Option<(char, usize)> {
    let bytes = tail.as_bytes();
    if bytes.first() == Some(&b'#') {
        let (digits_start, radix) = match bytes.get(1) {
            Some(b'x') | Some(b'X') => (2, 16),
            _ => (1, 10),
        };
        let mut end = digits_start;
        while end < bytes.len() && (bytes[end] as char).is_digit(radix) {
            end += 1;
        }
        if end == digits_start {
            return None;
        }
        let code = u32::from_str_radix(&tail[digits_start..end], radix).ok()?;
        let ch = char::from_u32(code)?;
        let used = if bytes.get(end) == Some(&b';') { end + 1 } else { end };
        return Some((ch, used));
    }

    let mut end = 0;
    while end < bytes.len() && bytes[end].is_ascii_alphanumeric() {
        end += 1;
    }
    if bytes.get(end) != Some(&b';') {
        return None;
    }
    let ch = match &tail[..end] {
        "amp" | "AMP" => '&',
        "lt" | "LT" => '<',
        "gt" | "GT" => '>',
        "quot" | "QUOT" => '"',
        "apos" => '\'',
        "colon" => ':',
        "semi" => ';',
        "sol" => '/',
        "Tab" => '\t',
        "NewLine" => '\n',
        _ => return None,
    };
    Some((ch, end + 1))
}

#[derive(Debug)]
struct ParsedTag {
    name: String,
    /// (lowercased name, value) in source order; None for valueless attrs.
    attrs: Vec<(String, Option<String>)>,
    /// Byte offset just past the closing `>`.
    end: usize,
}

/// Allowlist HTML filter. Stateless; one instance can clean any number of
/// fragments.
#[derive(Debug, Clone, Default)]
pub struct Sanitizer;

impl Sanitizer {
    pub fn new() -> Self {
        Self
    }

    /// Produce a best-effort safe fragment from arbitrary HTML input.
    ///
    /// Never errors: unparseable markup is treated as text, unterminated
    /// script-like elements are dropped to the end of input. Cleaning an
    /// already-clean fragment returns it unchanged.
    pub fn clean(&self, input: &str) -> SafeHtml {
        let bytes = input.as_bytes();
        let mut out = String::with_capacity(input.len());
        let mut i = 0;

        while i < bytes.len() {
            // Copy the text run up to the next markup candidate verbatim.
            // `&` and `>` stay as-is so cleaning is idempotent.
            match input[i..].find('<') {
                Some(offset) => {
                    out.push_str(&input[i..i + offset]);
                    i += offset;
                }
                None => {
                    out.push_str(&input[i..]);
                    break;
                }
            }

            i = self.consume_markup(input, i, &mut out);
        }

        SafeHtml(out)
    }

    /// Handle the markup starting at `start` (which points at `<`); returns
    /// the index to resume scanning from.
    fn consume_markup(&self, input: &str, start: usize, out: &mut String) -> usize {
        let bytes = input.as_bytes();
        let rest = &input[start..];

        // Comments, doctypes and processing instructions are dropped whole.
        if rest.starts_with("<!--") {
            return match rest.find("-->") {
                Some(pos) => start + pos + 3,
                None => input.len(),
            };
        }
        if rest.starts_with("<!") || rest.starts_with("<?") {
            return match rest.find('>') {
                Some(pos) => start + pos + 1,
                None => input.len(),
            };
        }

        if rest.starts_with("</") {
            if let Some((name, end)) = parse_close_tag(input, start) {
                let lower = name.to_ascii_lowercase();
                if ALLOWED_TAGS.contains(&lower.as_str()) && !VOID_TAGS.contains(&lower.as_str())
                {
                    out.push_str("</");
                    out.push_str(&lower);
                    out.push('>');
                }
                return end;
            }
            out.push_str("&lt;");
            return start + 1;
        }

        let next_is_letter = bytes
            .get(start + 1)
            .map(|b| b.is_ascii_alphabetic())
            .unwrap_or(false);
        if !next_is_letter {
            // A `<` that opens nothing recognizable is plain text.
            out.push_str("&lt;");
            return start + 1;
        }

        match parse_open_tag(input, start) {
            Some(tag) => {
                let lower = tag.name.to_ascii_lowercase();
                if CONTENT_SWALLOWING_TAGS.contains(&lower.as_str()) {
                    return skip_swallowed_content(input, tag.end, &lower);
                }
                if ALLOWED_TAGS.contains(&lower.as_str()) {
                    self.emit_tag(&lower, &tag.attrs, out);
                }
                // Disallowed but harmless wrappers vanish; children survive.
                tag.end
            }
            None => {
                // Unterminated tag: degrade to text and keep going.
                out.push_str("&lt;");
                start + 1
            }
        }
    }

    fn emit_tag(&self, tag: &str, attrs: &[(String, Option<String>)], out: &mut String) {
        out.push('<');
        out.push_str(tag);

        for (name, value) in attrs {
            let name = name.as_str();
            if name.starts_with("on") || name == "style" || !attr_allowed(tag, name) {
                continue;
            }
            let value = value.as_deref().unwrap_or("");
            if URL_ATTRS.contains(&name) {
                // Check and emit the browser-decoded form; re-escaping `&`
                // afterwards keeps a second clean from decoding any further.
                let decoded = decode_url_value(value);
                if !url_is_safe(&decoded) {
                    continue;
                }
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(&decoded.replace('&', "&amp;").replace('"', "&quot;"));
                out.push('"');
                continue;
            }
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            // Only the quote needs escaping; `&` stays so re-cleaning does
            // not double-escape entities.
            out.push_str(&value.replace('"', "&quot;"));
            out.push('"');
        }

        if VOID_TAGS.contains(&tag) {
            out.push_str(" />");
        } else {
            out.push('>');
        }
    }
}

/// Parse `</name ... >`; returns the name and the index past `>`.
fn parse_close_tag(input: &str, start: usize) -> Option<(String, usize)> {
    let bytes = input.as_bytes();
    let mut i = start + 2;
    let name_start = i;
    while i < bytes.len() && bytes[i].is_ascii_alphanumeric() {
        i += 1;
    }
    if i == name_start {
        return None;
    }
    let name = input[name_start..i].to_string();
    while i < bytes.len() && bytes[i] != b'>' {
        i += 1;
    }
    if i == bytes.len() {
        return None;
    }
    Some((name, i + 1))
}

/// Parse an opening tag with its attributes; returns None when the input ends
/// before the tag does.
fn parse_open_tag(input: &str, start: usize) -> Option<ParsedTag> {
    let bytes = input.as_bytes();
    let mut i = start + 1;

    let name_start = i;
    while i < bytes.len() && bytes[i].is_ascii_alphanumeric() {
        i += 1;
    }
    let name = input[name_start..i].to_string();

    let mut attrs = Vec::new();
    loop {
        while i < bytes.len() && (bytes[i].is_ascii_whitespace() || bytes[i] == b'/') {
            i += 1;
        }
        if i >= bytes.len() {
            return None;
        }
        if bytes[i] == b'>' {
            return Some(ParsedTag {
                name,
                attrs,
                end: i + 1,
            });
        }

        let attr_start = i;
        while i < bytes.len()
            && !bytes[i].is_ascii_whitespace()
            && bytes[i] != b'='
            && bytes[i] != b'>'
            && bytes[i] != b'/'
        {
            i += 1;
        }
        if i == attr_start {
            // Stray byte that is neither a name nor a delimiter.
            i += 1;
            continue;
        }
        let attr_name = input[attr_start..i].to_ascii_lowercase();

        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }

        let mut value = None;
        if i < bytes.len() && bytes[i] == b'=' {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            if i >= bytes.len() {
                return None;
            }
            if bytes[i] == b'"' || bytes[i] == b'\'' {
                let quote = bytes[i];
                i += 1;
                let value_start = i;
                while i < bytes.len() && bytes[i] != quote {
                    i += 1;
                }
                if i >= bytes.len() {
                    return None;
                }
                value = Some(input[value_start..i].to_string());
                i += 1;
            } else {
                let value_start = i;
                while i < bytes.len() && !bytes[i].is_ascii_whitespace() && bytes[i] != b'>' {
                    i += 1;
                }
                value = Some(input[value_start..i].to_string());
            }
        }

        attrs.push((attr_name, value));
    }
}

/// Skip everything up to and including `</tag>`; to end of input when the
/// close never appears.
fn skip_swallowed_content(input: &str, from: usize, tag: &str) -> usize {
    let needle = format!("</{}", tag);
    let haystack = input[from..].to_ascii_lowercase();
    match haystack.find(&needle) {
        Some(pos) => {
            let after = from + pos;
            match input[after..].find('>') {
                Some(gt) => after + gt + 1,
                None => input.len(),
            }
        }
        None => input.len(),
    }
}
