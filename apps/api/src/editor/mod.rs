// Editor state transitions, kept independent of any UI.

pub mod commands;

pub use commands::{
    EducationField, ExperienceField, LanguageField, LinkField, ProjectField, ResumeCommand,
    ScalarField,
};
