//! Portfolio page body: numbered project entries with a sanitized rich-text
//! write-up next to a stack sidebar.
//!
//! This is the one place raw HTML enters the page tree, so the write-up is
//! accepted only as [`SafeHtml`] - callers go through the sanitizer first.

use crate::domain::model::{PortfolioEntry, SiteContent};
use crate::render::markup::{chip, escape_attr, escape_text, image_src};
use crate::render::sanitize::{SafeHtml, Sanitizer};

pub fn generate(content: &SiteContent, sanitizer: &Sanitizer) -> String {
    let mut out = String::new();

    out.push_str(r#"<section id="project" class="flex flex-col">"#);
    out.push_str(r#"<div class="mt-10 mb-[20px] flex flex-col">"#);
    for (index, portfolio) in content.portfolios.iter().enumerate() {
        let body = sanitizer.clean(&portfolio.body_html);
        out.push_str(&generate_entry(portfolio, index, &body, &content.image_root));
    }
    out.push_str("</div></section>");

    out
}

fn generate_entry(
    portfolio: &PortfolioEntry,
    index: usize,
    body: &SafeHtml,
    image_root: &str,
) -> String {
    let mut out = String::new();

    out.push_str(r#"<div class="mb-[80px] flex flex-col">"#);

    // Header line: "1. Title", time, duration chip
    out.push_str(r#"<div class="mb-[20px] flex flex-row items-center">"#);
    out.push_str(&format!(
        r#"<p class="mr-3 text-[24px] font-bold">{}. {}</p>"#,
        index + 1,
        escape_text(&portfolio.title)
    ));
    out.push_str(&format!(
        r#"<p class="mr-3 text-[20px]">{}</p>"#,
        escape_text(&portfolio.time)
    ));
    out.push_str(&chip(&portfolio.duration));
    out.push_str("</div>");

    // Screenshot row, evenly divided between images
    if !portfolio.images.is_empty() {
        let width_percent = 100.0 / portfolio.images.len() as f64 - 1.0;
        out.push_str(r#"<div class="mb-10 flex flex-row items-center justify-center">"#);
        for image in &portfolio.images {
            out.push_str(&format!(
                r#"<img class="mx-2 rounded-[8px]" src="{}" alt="" style="width: {:.0}%; height: auto;" />"#,
                escape_attr(&image_src(image_root, "portfolio", image)),
                width_percent
            ));
        }
        out.push_str("</div>");
    }

    // Write-up beside the stack sidebar
    out.push_str(r#"<div class="flex flex-row">"#);
    out.push_str(&format!(
        r#"<div class="flex flex-1 flex-col">{}</div>"#,
        body.as_str()
    ));
    out.push_str(r#"<div class="mx-3 min-h-[100%] w-[1px] bg-[#bec4cd]"></div>"#);
    out.push_str(r#"<div class="flex w-[350px] flex-col">"#);
    out.push_str(r#"<p class="mb-2 text-[20px] font-bold">FE</p>"#);
    out.push_str(&format!(
        r#"<div class="mb-5 flex flex-row">{}</div>"#,
        escape_text(&portfolio.frontend.join(", "))
    ));
    out.push_str(r#"<p class="mb-2 text-[20px] font-bold">Deployment</p>"#);
    out.push_str(&format!("<p>{}</p>", escape_text(&portfolio.deployment.join(", "))));
    out.push_str("</div></div>");

    out.push_str("</div>");
    out
}
