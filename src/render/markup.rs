//! HTML escaping helpers for text interpolated into page markup.
//!
//! Entry fields are plain strings under author control, but every one of them
//! is escaped on the way into the page so a stray `<` in a job description
//! cannot change the document structure.

/// Escape a string for use as element text content.
pub fn escape_text(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(ch),
        }
    }
    output
}

/// Escape a string for use inside a double-quoted attribute value.
pub fn escape_attr(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#x27;"),
            _ => output.push(ch),
        }
    }
    output
}

/// `<p class="{class}">{escaped text}</p>` - the workhorse of every section.
pub fn p(class: &str, text: &str) -> String {
    format!(r#"<p class="{}">{}</p>"#, class, escape_text(text))
}

/// Small filled label used for durations and skills.
pub fn chip(text: &str) -> String {
    format!(
        concat!(
            r#"<div class="flex h-[30px] w-fit items-center rounded-[4px] bg-yellow-300 px-[8px]">"#,
            r#"<p class="text-[14px] text-[#0a0c12]">{}</p></div>"#
        ),
        escape_text(text)
    )
}

/// Join an image root, category and file name into a site-relative src path.
pub fn image_src(image_root: &str, category: &str, file: &str) -> String {
    format!(
        "{}/{}/{}",
        image_root.trim_end_matches('/'),
        category,
        file
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text_replaces_metacharacters() {
        assert_eq!(
            escape_text("a < b & c > d"),
            "a &lt; b &amp; c &gt; d"
        );
        assert_eq!(escape_text("plain"), "plain");
    }

    #[test]
    fn test_escape_attr_replaces_quotes() {
        assert_eq!(escape_attr(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_attr("it's"), "it&#x27;s");
    }

    #[test]
    fn test_p_escapes_content() {
        let html = p("mb-2", "<script>x</script>");
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_image_src_handles_trailing_slash() {
        assert_eq!(
            image_src("/static/images/", "career", "logo.png"),
            "/static/images/career/logo.png"
        );
        assert_eq!(
            image_src("/static/images", "profile", "me.jpg"),
            "/static/images/profile/me.jpg"
        );
    }
}
