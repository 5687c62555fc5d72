//! Static export: validate, render and write the page to disk.

use std::path::Path;

use crate::config::SiteConfig;
use crate::content::Blueprint;
use crate::document::render_document;
use crate::error::{BlueprintError, BlueprintResult};
use crate::theme::stylesheet;

/// Loads the site config (defaults when `config` is `None`) and validates it
/// together with `content`.
pub fn load_checked(config: Option<&Path>, content: &Blueprint) -> BlueprintResult<SiteConfig> {
    let site = SiteConfig::load(config)?;
    site.validate()?;
    content.validate()?;
    Ok(site)
}

/// Writes `contents` to `path`, creating missing parent directories.
pub fn write_output(path: &Path, contents: &str) -> BlueprintResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| BlueprintError::io("create output dir", parent, e))?;
    }
    std::fs::write(path, contents).map_err(|e| BlueprintError::io("write", path, e))
}

/// Renders the full document to `out`. Nothing is written when the config or
/// the content fails validation. Returns the number of bytes written.
#[tracing::instrument(skip_all, fields(out = %out.display()))]
pub async fn build(
    out: &Path,
    config: Option<&Path>,
    content: Blueprint,
) -> BlueprintResult<usize> {
    let site = load_checked(config, &content)?;
    let html = render_document(content, site).await;
    write_output(out, &html)?;
    tracing::info!(bytes = html.len(), "wrote page");
    Ok(html.len())
}

/// Writes the stylesheet generated from the configured theme to `out`.
pub fn build_stylesheet(out: &Path, config: Option<&Path>) -> BlueprintResult<()> {
    let site = SiteConfig::load(config)?;
    site.theme.validate()?;
    write_output(out, &stylesheet(&site.theme))
}
