//! Section renderers: one pure function per resume section.
//!
//! Each takes the section's records in order and returns an HTML fragment with
//! one block per record, joined by `\n`. An empty slice yields `""`; wrapper
//! markup is never emitted for zero records.

use crate::models::{Education, Experience, Language, Project, ProjectLink, SkillGroup};
use crate::render::escape::escape_html;

pub fn render_skills(skills: &[SkillGroup]) -> String {
    skills
        .iter()
        .map(|g| {
            format!(
                r#"<div class="item"><div class="item-title">{}:</div> {}</div>"#,
                escape_html(&g.group),
                escape_html(&g.items.join(", ")),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Shared by projects and experience.
pub fn render_bullets(bullets: &[String]) -> String {
    if bullets.is_empty() {
        return String::new();
    }
    let items: String = bullets
        .iter()
        .map(|b| format!("<li>{}</li>", escape_html(b)))
        .collect();
    format!(r#"<ul class="bullets">{items}</ul>"#)
}

fn render_project_links(links: &[ProjectLink]) -> String {
    if links.is_empty() {
        return String::new();
    }
    let items: String = links
        .iter()
        .map(|l| {
            format!(
                r#"<li>{}: <a href="{}" target="_blank" rel="noopener noreferrer">{}</a></li>"#,
                escape_html(&l.label),
                l.url,
                escape_html(&l.url),
            )
        })
        .collect();
    format!(r#"<ul class="bullets">{items}</ul>"#)
}

pub fn render_projects(projects: &[Project]) -> String {
    projects
        .iter()
        .map(|p| {
            format!(
                r#"
<div class="item">
  <div class="item-title">{title}</div>
  <div class="tech-line">Stack: {stack}</div>
  {bullets}
  {links}
</div>"#,
                title = escape_html(&p.title),
                stack = escape_html(&p.stack),
                bullets = render_bullets(&p.bullets),
                links = render_project_links(p.links.as_deref().unwrap_or_default()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_experience(experience: &[Experience]) -> String {
    experience
        .iter()
        .map(|e| {
            format!(
                r#"
<div class="item">
  <div class="item-header">
    <div>
      <div class="item-title">{role}</div>
      <div class="item-subtitle">{company}</div>
    </div>
    <div class="item-date">{date}</div>
  </div>
  {bullets}
</div>"#,
                role = escape_html(&e.role),
                company = escape_html(&e.company),
                date = escape_html(&e.date),
                bullets = render_bullets(&e.bullets),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_education(education: &[Education]) -> String {
    education
        .iter()
        .map(|e| {
            format!(
                r#"
<div class="item">
  <div class="item-header">
    <div>
      <div class="item-title">{title}</div>
      <div class="item-subtitle">{subtitle}</div>
    </div>
    <div class="item-date">{date}</div>
  </div>
</div>"#,
                title = escape_html(&e.title),
                subtitle = escape_html(&e.subtitle),
                date = escape_html(&e.date),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_languages(languages: &[Language]) -> String {
    languages
        .iter()
        .map(|l| {
            format!(
                r#"
<div class="item">
  <div class="item-header">
    <div class="item-title">{name} — {level}</div>
    <div class="item-date">{note}</div>
  </div>
</div>"#,
                name = escape_html(&l.name),
                level = escape_html(&l.level),
                note = escape_html(&l.note),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
