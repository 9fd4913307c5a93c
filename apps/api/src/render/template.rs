//! Template compositor. Turns a document skeleton, a stylesheet and a
//! `ResumeData` into one self-contained HTML document.
//!
//! Two phases:
//! 1. The first `<link rel="stylesheet" href="./style.css" />` is replaced by an
//!    inline `<style>` block holding the stylesheet verbatim.
//! 2. Every occurrence of the nine `{{PLACEHOLDER}}` tokens in the skeleton is
//!    replaced by its rendered value.
//!
//! Substitution is a single left-to-right scan of the skeleton text only. The
//! inlined stylesheet and the inserted values are never rescanned, so a value
//! that happens to contain `{{TITLE}}` stays literal and the order of the nine
//! tokens cannot change the result. Tokens missing from the skeleton are
//! simply not substituted.

use crate::models::ResumeData;
use crate::render::contact::render_contact;
use crate::render::escape::escape_html;
use crate::render::sections::{
    render_education, render_experience, render_languages, render_projects, render_skills,
};

/// The external stylesheet reference the skeleton must carry exactly once.
pub const STYLESHEET_LINK: &str = r#"<link rel="stylesheet" href="./style.css" />"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Name,
    Title,
    ContactHtml,
    Summary,
    SkillsHtml,
    ProjectsHtml,
    ExperienceHtml,
    EducationHtml,
    LanguagesHtml,
}

impl Placeholder {
    pub const ALL: [Placeholder; 9] = [
        Placeholder::Name,
        Placeholder::Title,
        Placeholder::ContactHtml,
        Placeholder::Summary,
        Placeholder::SkillsHtml,
        Placeholder::ProjectsHtml,
        Placeholder::ExperienceHtml,
        Placeholder::EducationHtml,
        Placeholder::LanguagesHtml,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Placeholder::Name => "{{NAME}}",
            Placeholder::Title => "{{TITLE}}",
            Placeholder::ContactHtml => "{{CONTACT_HTML}}",
            Placeholder::Summary => "{{SUMMARY}}",
            Placeholder::SkillsHtml => "{{SKILLS_HTML}}",
            Placeholder::ProjectsHtml => "{{PROJECTS_HTML}}",
            Placeholder::ExperienceHtml => "{{EXPERIENCE_HTML}}",
            Placeholder::EducationHtml => "{{EDUCATION_HTML}}",
            Placeholder::LanguagesHtml => "{{LANGUAGES_HTML}}",
        }
    }

    /// Scalars are escaped here; section values come pre-escaped from their renderers.
    fn render(self, data: &ResumeData) -> String {
        match self {
            Placeholder::Name => escape_html(&data.name),
            Placeholder::Title => escape_html(&data.title),
            Placeholder::ContactHtml => render_contact(data),
            Placeholder::Summary => escape_html(&data.summary),
            Placeholder::SkillsHtml => render_skills(&data.skills),
            Placeholder::ProjectsHtml => render_projects(&data.projects),
            Placeholder::ExperienceHtml => render_experience(&data.experience),
            Placeholder::EducationHtml => render_education(&data.education),
            Placeholder::LanguagesHtml => render_languages(&data.languages),
        }
    }
}

/// Every placeholder rendered once for a given record.
struct Substitutions {
    values: Vec<(&'static str, String)>,
}

impl Substitutions {
    fn for_data(data: &ResumeData) -> Self {
        Self {
            values: Placeholder::ALL
                .iter()
                .map(|p| (p.token(), p.render(data)))
                .collect(),
        }
    }

    fn apply_into(&self, out: &mut String, mut text: &str) {
        while let Some(start) = text.find("{{") {
            out.push_str(&text[..start]);
            let rest = &text[start..];
            match self.values.iter().find(|(token, _)| rest.starts_with(token)) {
                Some((token, value)) => {
                    out.push_str(value);
                    text = &rest[token.len()..];
                }
                None => {
                    // Step past one brace so `{{{NAME}}` still matches at the next offset.
                    out.push('{');
                    text = &rest[1..];
                }
            }
        }
        out.push_str(text);
    }
}

pub fn compose_document(data: &ResumeData, template: &str, stylesheet: &str) -> String {
    let substitutions = Substitutions::for_data(data);
    let mut out = String::with_capacity(template.len() + stylesheet.len() + 4096);

    match template.split_once(STYLESHEET_LINK) {
        Some((head, tail)) => {
            substitutions.apply_into(&mut out, head);
            out.push_str("<style>");
            out.push_str(stylesheet);
            out.push_str("</style>");
            substitutions.apply_into(&mut out, tail);
        }
        None => substitutions.apply_into(&mut out, template),
    }

    out
}
