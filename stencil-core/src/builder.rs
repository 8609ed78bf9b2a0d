use std::fs;
use std::path::{Path, PathBuf};

use crate::assets::{self, AssetError};
use crate::manifest::{Manifest, ManifestError, PageSpec};
use crate::paths;
use crate::template::{TemplateError, TemplateRenderer};

#[derive(Debug)]
pub enum BuildError {
    MissingInputDir,
    Manifest(ManifestError),
    Template(TemplateError),
    Asset(AssetError),
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl From<ManifestError> for BuildError {
    fn from(err: ManifestError) -> Self {
        BuildError::Manifest(err)
    }
}

impl From<TemplateError> for BuildError {
    fn from(err: TemplateError) -> Self {
        BuildError::Template(err)
    }
}

impl From<AssetError> for BuildError {
    fn from(err: AssetError) -> Self {
        BuildError::Asset(err)
    }
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::MissingInputDir => write!(f, "input directory not specified"),
            BuildError::Manifest(e) => write!(f, "{}", e),
            BuildError::Template(e) => write!(f, "{}", e),
            BuildError::Asset(e) => write!(f, "{}", e),
            BuildError::CreateDir { path, source } => {
                write!(f, "failed to create '{}': {}", path.display(), source)
            }
            BuildError::Write { path, source } => {
                write!(f, "failed to write '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for BuildError {}

/// Configures a site build: the input directory holding `config.json`,
/// `templates/` and optionally `static/`, plus an optional output
/// directory shared by every page.
pub struct SiteBuilder {
    input_dir: Option<PathBuf>,
    output_override: Option<PathBuf>,
}

impl Default for SiteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteBuilder {
    pub fn new() -> Self {
        Self {
            input_dir: None,
            output_override: None,
        }
    }

    // Required configuration
    pub fn input_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.input_dir = Some(path.as_ref().to_path_buf());
        self
    }

    // Optional shared output directory
    pub fn output_override<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_override = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load the manifest and templates, producing a [`Site`] ready to
    /// generate. Nothing is written to disk yet.
    pub fn build(self) -> Result<Site, BuildError> {
        let input_dir = self.input_dir.ok_or(BuildError::MissingInputDir)?;

        let manifest = Manifest::load(&input_dir)?;
        let renderer = TemplateRenderer::new(&input_dir.join("templates"))?;

        Ok(Site {
            input_dir,
            output_override: self.output_override,
            manifest,
            renderer,
        })
    }
}

#[derive(Debug)]
pub struct Site {
    input_dir: PathBuf,
    output_override: Option<PathBuf>,
    manifest: Manifest,
    renderer: TemplateRenderer,
}

impl Site {
    pub fn pages(&self) -> &[PageSpec] {
        self.manifest.pages()
    }

    /// Build every page in manifest order. The first failure aborts the
    /// run; there is no per-page partial-success mode.
    pub fn generate(&self) -> Result<(), BuildError> {
        let static_dir = self.input_dir.join("static");

        for page in self.manifest.pages() {
            log::debug!("Building {} with template {}", page.url, page.template);

            let destination =
                paths::resolve(&self.input_dir, &page.url, self.output_override.as_deref());

            // Re-runs against an existing tree are fine.
            fs::create_dir_all(&destination).map_err(|source| BuildError::CreateDir {
                path: destination.clone(),
                source,
            })?;

            assets::copy_assets(&static_dir, &destination)?;

            let html = self.renderer.render(&page.template, &page.context)?;

            let output_path = destination.join("index.html");
            fs::write(&output_path, html).map_err(|source| BuildError::Write {
                path: output_path.clone(),
                source,
            })?;

            log::info!("{} -> {}", page.url, output_path.display());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_an_input_dir() {
        let err = SiteBuilder::new().build().unwrap_err();
        assert!(matches!(err, BuildError::MissingInputDir));
    }

    #[test]
    fn build_fails_without_config() {
        let dir = tempfile::tempdir().unwrap();
        let err = SiteBuilder::new().input_dir(dir.path()).build().unwrap_err();
        assert!(matches!(
            err,
            BuildError::Manifest(ManifestError::NotFound(_))
        ));
    }
}
