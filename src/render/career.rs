//! Career page body: introduce list, career history, education.
//!
//! Mirrors the original layout: a fixed-width time column next to a fluid
//! detail column per entry, chips for durations and skills, a disc list for
//! project highlights.

use crate::domain::model::{CareerEntry, EducationEntry, Highlight, SiteContent};
use crate::render::markup::{chip, escape_attr, escape_text, image_src, p};

pub fn generate(content: &SiteContent) -> String {
    let mut out = String::new();

    out.push_str(&generate_introduce(&content.introduce));
    for career in &content.careers {
        out.push_str(&generate_career_entry(career, &content.image_root));
    }
    out.push_str(&generate_education(&content.educations));

    out
}

fn generate_introduce(lines: &[String]) -> String {
    let mut out = String::new();
    out.push_str(r#"<section id="introduce" class="mb-[40px] flex flex-col">"#);
    out.push_str(r#"<p class="mb-[20px] text-[40px] font-bold text-yellow-300">INTRODUCE</p>"#);
    out.push_str(r#"<ul class="flex flex-col gap-2">"#);
    for line in lines {
        out.push_str(&format!("<li><p>{}</p></li>", escape_text(line)));
    }
    out.push_str("</ul></section>");
    out
}

fn generate_career_entry(career: &CareerEntry, image_root: &str) -> String {
    let mut out = String::new();

    out.push_str(r#"<section class="mb-10 flex flex-row">"#);

    // Time column
    out.push_str(r#"<div class="flex w-[250px] flex-col">"#);
    out.push_str(&p("mb-[16px] text-[32px] font-bold", &career.time));
    out.push_str(&format!(
        r#"<div class="flex flex-row items-center">{}</div>"#,
        chip(&career.duration)
    ));
    out.push_str(&format!(
        concat!(
            r#"<div class="mt-10 flex flex-row">"#,
            r#"<img src="{}" alt="logo" class="rounded-[20px]" width="120" height="120" /></div>"#
        ),
        escape_attr(&image_src(image_root, "career", &career.image))
    ));
    out.push_str("</div>");

    // Detail column
    out.push_str(r#"<div class="flex flex-1 flex-col">"#);
    out.push_str(&p("mb-4 text-[32px] font-bold", &career.title));
    for description in &career.descriptions {
        out.push_str(&p("mb-[4px] text-[14px] text-[#70767E]", description));
    }

    out.push_str(r#"<div class="mt-5 flex max-w-[600px] flex-row flex-wrap gap-[8px]">"#);
    for skill in &career.skills {
        out.push_str(&chip(skill));
    }
    out.push_str("</div>");

    if !career.highlights.is_empty() {
        out.push_str(r#"<ul class="mt-4 ml-5 list-disc">"#);
        for highlight in &career.highlights {
            out.push_str(&generate_highlight(highlight));
        }
        out.push_str("</ul>");
    }

    if !career.etcs.is_empty() {
        out.push_str(r#"<p class="mt-3 mb-2 text-[18px] font-bold">ETC.</p>"#);
        out.push_str(r#"<ul class="mb-2 ml-[20px] list-disc">"#);
        for etc in &career.etcs {
            out.push_str(&format!(r#"<li class="mb-[8px]">{}</li>"#, escape_text(etc)));
        }
        out.push_str("</ul>");
    }

    out.push_str("</div></section>");
    out
}

fn generate_highlight(highlight: &Highlight) -> String {
    let mut out = String::new();
    out.push_str("<li>");
    out.push_str(&labeled_row("mb-1", "Project:", &highlight.project));
    out.push_str(&format!(
        r#"<div class="my-2 flex flex-row"><p class="text-[14px] text-[#70767E]">{}</p></div>"#,
        escape_text(&highlight.role)
    ));
    out.push_str(&labeled_row("mb-2 ml-4", "Problem:", &highlight.problem));
    out.push_str(&labeled_row("mb-2 ml-4", "Solve:", &highlight.solve));
    out.push_str(&labeled_row("ml-4", "Effect:", &highlight.effect));
    out.push_str("</li>");
    out.push_str(
        r#"<div class="my-6 max-h-[1px] min-h-[1px] border-[0.5px] border-[#70767E] opacity-30"></div>"#,
    );
    out
}

fn labeled_row(class: &str, label: &str, value: &str) -> String {
    format!(
        concat!(
            r#"<div class="{} flex flex-row">"#,
            r#"<p class="max-w-[80px] min-w-[80px]">{}</p><p>{}</p></div>"#
        ),
        class,
        escape_text(label),
        escape_text(value)
    )
}

fn generate_education(educations: &[EducationEntry]) -> String {
    let mut out = String::new();
    out.push_str(r#"<section id="education" class="mb-[40px] flex flex-col">"#);
    out.push_str(r#"<p class="mb-[20px] text-[40px] font-bold text-[#BD871F]">EDUCATION</p>"#);
    for education in educations {
        out.push_str(r#"<div class="mb-10 flex flex-row">"#);
        out.push_str(r#"<div class="flex w-[250px] flex-col">"#);
        out.push_str(&p("mb-[16px] text-[32px] font-bold", &education.time));
        out.push_str("</div>");
        out.push_str(r#"<div class="flex flex-1 flex-col">"#);
        out.push_str(&p("mb-[16px] text-[32px] font-bold", &education.title));
        for description in &education.descriptions {
            out.push_str(&p("mb-[4px] text-[14px]", description));
        }
        out.push_str("</div></div>");
    }
    out.push_str("</section>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Profile;

    fn content_with(careers: Vec<CareerEntry>, educations: Vec<EducationEntry>) -> SiteContent {
        SiteContent {
            title: "Test".to_string(),
            image_root: "/static/images".to_string(),
            profile: Profile {
                name: "n".to_string(),
                role: "r".to_string(),
                email: "e@example.com".to_string(),
                git: "https://github.com/x".to_string(),
                image: "p.jpg".to_string(),
            },
            introduce: vec!["line one".to_string()],
            careers,
            educations,
            portfolios: vec![],
        }
    }

    fn sample_career() -> CareerEntry {
        CareerEntry {
            title: "Acme Corp".to_string(),
            time: "2021 - 2023".to_string(),
            duration: "2 years".to_string(),
            image: "acme.png".to_string(),
            descriptions: vec!["Built things".to_string()],
            skills: vec!["Rust".to_string(), "TypeScript".to_string()],
            highlights: vec![Highlight {
                project: "Checkout".to_string(),
                role: "Lead".to_string(),
                problem: "Slow renders".to_string(),
                solve: "Memoized state".to_string(),
                effect: "60fps".to_string(),
            }],
            etcs: vec!["Mentoring".to_string()],
        }
    }

    #[test]
    fn test_career_entry_renders_all_fields() {
        let html = generate(&content_with(vec![sample_career()], vec![]));
        for needle in [
            "Acme Corp",
            "2021 - 2023",
            "2 years",
            "Built things",
            "Rust",
            "Checkout",
            "Slow renders",
            "Memoized state",
            "60fps",
            "ETC.",
            "Mentoring",
            "/static/images/career/acme.png",
        ] {
            assert!(html.contains(needle), "missing {:?}", needle);
        }
    }

    #[test]
    fn test_block_count_matches_entry_count() {
        let careers = vec![sample_career(), sample_career(), sample_career()];
        let html = generate(&content_with(careers, vec![]));
        assert_eq!(html.matches(r#"<section class="mb-10 flex flex-row">"#).count(), 3);
    }

    #[test]
    fn test_empty_collections_render_empty_sections() {
        let html = generate(&content_with(vec![], vec![]));
        assert!(html.contains("INTRODUCE"));
        assert!(html.contains("EDUCATION"));
        assert!(!html.contains(r#"<section class="mb-10 flex flex-row">"#));
    }

    #[test]
    fn test_highlight_list_omitted_when_empty() {
        let mut career = sample_career();
        career.highlights.clear();
        career.etcs.clear();
        let html = generate(&content_with(vec![career], vec![]));
        assert!(!html.contains("list-disc"));
        assert!(!html.contains("ETC."));
    }

    #[test]
    fn test_education_renders_in_order() {
        let educations = vec![
            EducationEntry {
                title: "First University".to_string(),
                time: "2010".to_string(),
                descriptions: vec![],
            },
            EducationEntry {
                title: "Second Course".to_string(),
                time: "2015".to_string(),
                descriptions: vec!["online".to_string()],
            },
        ];
        let html = generate(&content_with(vec![], educations));
        let first = html.find("First University").unwrap();
        let second = html.find("Second Course").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_description_text_is_escaped() {
        let mut career = sample_career();
        career.descriptions = vec!["used <canvas> & WebGL".to_string()];
        let html = generate(&content_with(vec![career], vec![]));
        assert!(html.contains("used &lt;canvas&gt; &amp; WebGL"));
    }
}
