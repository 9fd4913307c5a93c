//! Editor commands: the closed set of edits a form editor can make to a
//! `ResumeData`, applied by one exhaustive `match`.
//!
//! Commands arrive as JSON tagged by `type`, e.g.
//! `{"type": "SET_PROJECT_LINK", "index": 0, "linkIndex": 1, "field": "url", "value": "…"}`.
//! Indices that point past the end of a sequence leave the record unchanged.

use serde::{Deserialize, Serialize};

use crate::models::{Education, Experience, Language, Project, ProjectLink, ResumeData, SkillGroup};

// ────────────────────────────────────────────────────────────────────────────
// Field selectors
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarField {
    Name,
    Title,
    Email,
    PhoneE164,
    PhoneDisplay,
    Location,
    LinkedinUrl,
    GithubUrl,
    WebsiteUrl,
    Summary,
}

impl ScalarField {
    /// Contact fields are optional: an empty value clears them.
    fn set(self, data: &mut ResumeData, value: String) {
        let optional = |value: String| (!value.is_empty()).then_some(value);
        match self {
            ScalarField::Name => data.name = value,
            ScalarField::Title => data.title = value,
            ScalarField::Summary => data.summary = value,
            ScalarField::Email => data.email = optional(value),
            ScalarField::PhoneE164 => data.phone_e164 = optional(value),
            ScalarField::PhoneDisplay => data.phone_display = optional(value),
            ScalarField::Location => data.location = optional(value),
            ScalarField::LinkedinUrl => data.linkedin_url = optional(value),
            ScalarField::GithubUrl => data.github_url = optional(value),
            ScalarField::WebsiteUrl => data.website_url = optional(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectField {
    Title,
    Stack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkField {
    Label,
    Url,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceField {
    Role,
    Company,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationField {
    Title,
    Subtitle,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageField {
    Name,
    Level,
    Note,
}

// ────────────────────────────────────────────────────────────────────────────
// Commands
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResumeCommand {
    SetField {
        field: ScalarField,
        value: String,
    },
    ReplaceAll {
        data: Box<ResumeData>,
    },
    Reset,

    AddSkillGroup,
    RemoveSkillGroup {
        index: usize,
    },
    SetSkillGroupName {
        index: usize,
        value: String,
    },
    /// Comma-separated; items are trimmed and empty ones dropped.
    SetSkillGroupItems {
        index: usize,
        value: String,
    },

    AddProject,
    RemoveProject {
        index: usize,
    },
    SetProjectField {
        index: usize,
        field: ProjectField,
        value: String,
    },
    /// One bullet per line; empty lines dropped.
    SetProjectBullets {
        index: usize,
        value: String,
    },
    AddProjectLink {
        index: usize,
    },
    RemoveProjectLink {
        index: usize,
        #[serde(rename = "linkIndex")]
        link_index: usize,
    },
    SetProjectLink {
        index: usize,
        #[serde(rename = "linkIndex")]
        link_index: usize,
        field: LinkField,
        value: String,
    },

    AddExperience,
    RemoveExperience {
        index: usize,
    },
    SetExperienceField {
        index: usize,
        field: ExperienceField,
        value: String,
    },
    SetExperienceBullets {
        index: usize,
        value: String,
    },

    AddEducation,
    RemoveEducation {
        index: usize,
    },
    SetEducationField {
        index: usize,
        field: EducationField,
        value: String,
    },

    AddLanguage,
    RemoveLanguage {
        index: usize,
    },
    SetLanguageField {
        index: usize,
        field: LanguageField,
        value: String,
    },
}

fn split_items(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn split_lines(value: &str) -> Vec<String> {
    value
        .split('\n')
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn remove_at<T>(items: &mut Vec<T>, index: usize) {
    if index < items.len() {
        items.remove(index);
    }
}

impl ResumeData {
    /// Returns the record with `command` applied.
    pub fn apply(mut self, command: ResumeCommand) -> ResumeData {
        match command {
            ResumeCommand::SetField { field, value } => field.set(&mut self, value),
            ResumeCommand::ReplaceAll { data } => return *data,
            ResumeCommand::Reset => return ResumeData::empty(),

            ResumeCommand::AddSkillGroup => self.skills.push(SkillGroup::default()),
            ResumeCommand::RemoveSkillGroup { index } => remove_at(&mut self.skills, index),
            ResumeCommand::SetSkillGroupName { index, value } => {
                if let Some(group) = self.skills.get_mut(index) {
                    group.group = value;
                }
            }
            ResumeCommand::SetSkillGroupItems { index, value } => {
                if let Some(group) = self.skills.get_mut(index) {
                    group.items = split_items(&value);
                }
            }

            ResumeCommand::AddProject => self.projects.push(Project {
                links: Some(Vec::new()),
                ..Project::default()
            }),
            ResumeCommand::RemoveProject { index } => remove_at(&mut self.projects, index),
            ResumeCommand::SetProjectField {
                index,
                field,
                value,
            } => {
                if let Some(project) = self.projects.get_mut(index) {
                    match field {
                        ProjectField::Title => project.title = value,
                        ProjectField::Stack => project.stack = value,
                    }
                }
            }
            ResumeCommand::SetProjectBullets { index, value } => {
                if let Some(project) = self.projects.get_mut(index) {
                    project.bullets = split_lines(&value);
                }
            }
            ResumeCommand::AddProjectLink { index } => {
                if let Some(project) = self.projects.get_mut(index) {
                    project
                        .links
                        .get_or_insert_with(Vec::new)
                        .push(ProjectLink::default());
                }
            }
            ResumeCommand::RemoveProjectLink { index, link_index } => {
                if let Some(links) = self
                    .projects
                    .get_mut(index)
                    .and_then(|p| p.links.as_mut())
                {
                    remove_at(links, link_index);
                }
            }
            ResumeCommand::SetProjectLink {
                index,
                link_index,
                field,
                value,
            } => {
                if let Some(link) = self
                    .projects
                    .get_mut(index)
                    .and_then(|p| p.links.as_mut())
                    .and_then(|links| links.get_mut(link_index))
                {
                    match field {
                        LinkField::Label => link.label = value,
                        LinkField::Url => link.url = value,
                    }
                }
            }

            ResumeCommand::AddExperience => self.experience.push(Experience::default()),
            ResumeCommand::RemoveExperience { index } => remove_at(&mut self.experience, index),
            ResumeCommand::SetExperienceField {
                index,
                field,
                value,
            } => {
                if let Some(exp) = self.experience.get_mut(index) {
                    match field {
                        ExperienceField::Role => exp.role = value,
                        ExperienceField::Company => exp.company = value,
                        ExperienceField::Date => exp.date = value,
                    }
                }
            }
            ResumeCommand::SetExperienceBullets { index, value } => {
                if let Some(exp) = self.experience.get_mut(index) {
                    exp.bullets = split_lines(&value);
                }
            }

            ResumeCommand::AddEducation => self.education.push(Education::default()),
            ResumeCommand::RemoveEducation { index } => remove_at(&mut self.education, index),
            ResumeCommand::SetEducationField {
                index,
                field,
                value,
            } => {
                if let Some(edu) = self.education.get_mut(index) {
                    match field {
                        EducationField::Title => edu.title = value,
                        EducationField::Subtitle => edu.subtitle = value,
                        EducationField::Date => edu.date = value,
                    }
                }
            }

            ResumeCommand::AddLanguage => self.languages.push(Language::default()),
            ResumeCommand::RemoveLanguage { index } => remove_at(&mut self.languages, index),
            ResumeCommand::SetLanguageField {
                index,
                field,
                value,
            } => {
                if let Some(lang) = self.languages.get_mut(index) {
                    match field {
                        LanguageField::Name => lang.name = value,
                        LanguageField::Level => lang.level = value,
                        LanguageField::Note => lang.note = value,
                    }
                }
            }
        }
        self
    }

    pub fn apply_all(self, commands: impl IntoIterator<Item = ResumeCommand>) -> ResumeData {
        commands.into_iter().fold(self, ResumeData::apply)
    }
}
