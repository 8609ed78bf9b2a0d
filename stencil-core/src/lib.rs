pub mod assets;
pub mod builder;
pub mod manifest;
pub mod paths;
pub mod template;

// Re-export main types
pub use builder::{BuildError, Site, SiteBuilder};
pub use manifest::{Manifest, ManifestError, PageSpec};
pub use template::{TemplateError, TemplateRenderer};
