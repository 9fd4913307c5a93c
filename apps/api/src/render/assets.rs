//! Template + stylesheet pair, loaded once by whoever owns the render loop
//! (the server at startup, the CLI per invocation) and passed explicitly.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::ResumeData;
use crate::render::template::compose_document;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Template,
    Stylesheet,
    ResumeData,
    Html,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AssetKind::Template => "template",
            AssetKind::Stylesheet => "stylesheet",
            AssetKind::ResumeData => "resume data",
            AssetKind::Html => "HTML input",
        })
    }
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("{kind} file not found: {}", path.display())]
    Missing { kind: AssetKind, path: PathBuf },

    #[error("Failed to read {kind} file {}: {source}", path.display())]
    Read {
        kind: AssetKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reads a UTF-8 input file, telling an absent file apart from any other I/O failure.
pub fn read_asset(kind: AssetKind, path: &Path) -> Result<String, AssetError> {
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            AssetError::Missing {
                kind,
                path: path.to_path_buf(),
            }
        } else {
            AssetError::Read {
                kind,
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

#[derive(Debug, Clone)]
pub struct Assets {
    template: String,
    stylesheet: String,
}

impl Assets {
    pub fn new(template: impl Into<String>, stylesheet: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            stylesheet: stylesheet.into(),
        }
    }

    pub fn load(template_path: &Path, stylesheet_path: &Path) -> Result<Self, AssetError> {
        Ok(Self {
            template: read_asset(AssetKind::Template, template_path)?,
            stylesheet: read_asset(AssetKind::Stylesheet, stylesheet_path)?,
        })
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn stylesheet(&self) -> &str {
        &self.stylesheet
    }

    pub fn render(&self, data: &ResumeData) -> String {
        compose_document(data, &self.template, &self.stylesheet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_reported_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_asset(AssetKind::ResumeData, &dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(
            err,
            AssetError::Missing {
                kind: AssetKind::ResumeData,
                ..
            }
        ));
        assert!(err.to_string().starts_with("resume data file not found"));
    }

    #[test]
    fn test_load_and_render() {
        let dir = tempfile::tempdir().unwrap();
        let tpl = dir.path().join("ats.html");
        let css = dir.path().join("style.css");
        std::fs::write(
            &tpl,
            r#"<head><link rel="stylesheet" href="./style.css" /></head><h1>{{NAME}}</h1>"#,
        )
        .unwrap();
        std::fs::write(&css, "h1 { color: red; }").unwrap();

        let assets = Assets::load(&tpl, &css).unwrap();
        assert!(assets.template().ends_with("<h1>{{NAME}}</h1>"));
        assert_eq!(assets.stylesheet(), "h1 { color: red; }");

        let data = ResumeData {
            name: "Jane".to_string(),
            ..ResumeData::empty()
        };
        assert_eq!(
            assets.render(&data),
            "<head><style>h1 { color: red; }</style></head><h1>Jane</h1>"
        );
    }

    #[test]
    fn test_load_fails_on_missing_stylesheet() {
        let dir = tempfile::tempdir().unwrap();
        let tpl = dir.path().join("ats.html");
        std::fs::write(&tpl, "{{NAME}}").unwrap();
        let err = Assets::load(&tpl, &dir.path().join("style.css")).unwrap_err();
        assert!(matches!(
            err,
            AssetError::Missing {
                kind: AssetKind::Stylesheet,
                ..
            }
        ));
    }
}
