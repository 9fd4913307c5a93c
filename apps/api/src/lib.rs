//! ats-resume: structured resume data → self-contained HTML → PDF.
//!
//! - [`models`]: the `ResumeData` interchange record and its lenient JSON boundary
//! - [`render`]: escaping, section renderers, contact line, template compositor
//! - [`export`]: the PDF export boundary (headless Chromium by default)
//! - [`editor`]: closed command set for editing a `ResumeData`
//! - [`routes`]: the HTTP service used by the editor UI

pub mod config;
pub mod editor;
pub mod errors;
pub mod export;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod routes;
pub mod state;
pub mod telemetry;
