//! Page composition: wraps section bodies into full HTML documents and
//! produces the site's page set in a fixed order.

use chrono::Utc;

use crate::domain::model::{RenderedPage, SiteContent};
use crate::render::markup::escape_text;
use crate::render::sanitize::Sanitizer;
use crate::render::{career, portfolio, profile};

/// Compose every page of the site. Pure function of the content store; the
/// page list and the per-page block order match input order.
pub fn compose_site(content: &SiteContent, sanitizer: &Sanitizer) -> Vec<RenderedPage> {
    let profile_header = profile::generate(&content.profile, &content.image_root);

    let career_body = format!("{}{}", profile_header, career::generate(content));
    let portfolio_body = format!(
        "{}{}",
        profile_header,
        portfolio::generate(content, sanitizer)
    );

    vec![
        RenderedPage {
            path: "index.html".to_string(),
            html: document(&content.title, &landing_body(&content.title)),
        },
        RenderedPage {
            path: "career.html".to_string(),
            html: document(&format!("{} - Career", content.title), &career_body),
        },
        RenderedPage {
            path: "portfolio.html".to_string(),
            html: document(&format!("{} - Portfolio", content.title), &portfolio_body),
        },
    ]
}

fn landing_body(title: &str) -> String {
    format!(
        concat!(
            r#"<section id="landing" class="my-11 flex flex-col">"#,
            r#"<p class="mb-[20px] text-[40px] font-bold">{}</p>"#,
            r#"<ul class="flex flex-col gap-2">"#,
            r#"<li><a class="text-yellow-300" href="career.html">Career</a></li>"#,
            r#"<li><a class="text-yellow-300" href="portfolio.html">Portfolio</a></li>"#,
            "</ul></section>"
        ),
        escape_text(title)
    )
}

/// Wrap a body in the document shell shared by all pages.
fn document(title: &str, body: &str) -> String {
    let generated = Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html lang="en">"#,
            "\n<head>\n",
            r#"<meta charset="utf-8" />"#,
            "\n",
            r#"<meta name="viewport" content="width=device-width, initial-scale=1" />"#,
            "\n<title>{}</title>\n</head>\n",
            r#"<body class="bg-[#0a0c12] text-white">"#,
            "\n",
            r#"<main class="mx-auto max-w-[1080px] px-6">{}</main>"#,
            "\n",
            r#"<footer class="mx-auto max-w-[1080px] px-6 py-8 text-[12px] text-[#70767E]">generated {}</footer>"#,
            "\n</body>\n</html>\n"
        ),
        escape_text(title),
        body,
        generated
    )
}
