pub mod resume;

pub use resume::{
    non_empty, DataError, Education, Experience, Language, Project, ProjectLink, ResumeData,
    SkillGroup,
};
