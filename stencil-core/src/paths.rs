use std::path::{Path, PathBuf};

/// Compute the destination directory for one page.
///
/// By default a page lands under `<input_dir>/html/` in the
/// subdirectory named by its url. An explicit output override wins
/// and is shared by every page in the run, so with an override all
/// pages write to the same directory.
pub fn resolve(input_dir: &Path, page_url: &str, output_override: Option<&Path>) -> PathBuf {
    if let Some(out) = output_override {
        return out.to_path_buf();
    }

    input_dir.join("html").join(page_url.trim_start_matches('/'))
}
