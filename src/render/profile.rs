//! Profile header section, shared by every page.

use crate::domain::model::Profile;
use crate::render::markup::{escape_attr, escape_text, image_src};

pub fn generate(profile: &Profile, image_root: &str) -> String {
    let mut out = String::new();

    out.push_str(r#"<section id="profile" class="my-11 flex flex-col">"#);
    out.push_str(r#"<div class="flex flex-row">"#);
    out.push_str(&format!(
        r#"<img src="{}" alt="profile" class="mr-[40px] rounded-[20px]" width="170" height="220" />"#,
        escape_attr(&image_src(image_root, "profile", &profile.image))
    ));

    out.push_str(r#"<div class="flex flex-col justify-between">"#);
    out.push_str(r#"<div class="flex flex-row items-center">"#);
    out.push_str(&format!(
        r#"<p class="text-[40px] font-bold">{}</p>"#,
        escape_text(&profile.name)
    ));
    out.push_str(r#"<div class="mx-3 h-[60%] min-w-[2px] bg-yellow-300"></div>"#);
    out.push_str(&format!(
        r#"<p class="mt-3 text-[24px] font-bold">{}</p>"#,
        escape_text(&profile.role)
    ));
    out.push_str("</div>");

    out.push_str(r#"<div class="flex flex-col">"#);
    out.push_str(&contact_row("Contact", &profile.email));
    out.push_str(&contact_row("Git", &profile.git));
    out.push_str("</div>");

    out.push_str("</div></div></section>");
    out
}

fn contact_row(label: &str, value: &str) -> String {
    format!(
        concat!(
            r#"<div class="mb-[12px] flex flex-row items-center">"#,
            r#"<p class="w-[50px]">{}</p><p class="mr-4 ml-4"></p><p>{}</p></div>"#
        ),
        escape_text(label),
        escape_text(value)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> Profile {
        Profile {
            name: "Jun Young".to_string(),
            role: "Frontend Engineer".to_string(),
            email: "jun@example.com".to_string(),
            git: "https://github.com/junyoung".to_string(),
            image: "profile.jpg".to_string(),
        }
    }

    #[test]
    fn test_profile_renders_identity_and_contacts() {
        let html = generate(&sample_profile(), "/static/images");
        assert!(html.contains("Jun Young"));
        assert!(html.contains("Frontend Engineer"));
        assert!(html.contains("jun@example.com"));
        assert!(html.contains(r#"src="/static/images/profile/profile.jpg""#));
    }

    #[test]
    fn test_profile_name_is_escaped() {
        let mut profile = sample_profile();
        profile.name = "A <script>".to_string();
        let html = generate(&profile, "/static/images");
        assert!(html.contains("A &lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
