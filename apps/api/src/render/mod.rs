// Render pipeline: escaper → section renderers + contact line → template compositor.
// Everything here is pure and synchronous; no I/O outside `assets`.

pub mod assets;
pub mod contact;
pub mod escape;
pub mod sections;
pub mod template;

pub use assets::{read_asset, AssetError, AssetKind, Assets};
pub use contact::render_contact;
pub use escape::escape_html;
pub use sections::{
    render_bullets, render_education, render_experience, render_languages, render_projects,
    render_skills,
};
pub use template::{compose_document, Placeholder, STYLESHEET_LINK};
