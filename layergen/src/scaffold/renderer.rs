//! Render one template resource into one file

use super::spec::FillData;
use super::templates::TemplateBundle;
use crate::error::{GenerateError, Result};
use handlebars::{Handlebars, TemplateError};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Renders bundled template resources to disk
///
/// Each call resolves, parses and executes its resource afresh. HTML escaping
/// is disabled and strict mode is on, so a placeholder naming a field that
/// [`FillData`] does not carry is an error instead of an empty string.
pub struct TemplateRenderer<'a> {
    bundle: &'a TemplateBundle,
}

impl<'a> TemplateRenderer<'a> {
    /// Create a renderer over a resource table
    #[must_use]
    pub const fn new(bundle: &'a TemplateBundle) -> Self {
        Self { bundle }
    }

    /// Render `resource` with `data` into `output`
    ///
    /// Parent directories are created as needed and an existing file is
    /// truncated. A failure after the file is created may leave it partially
    /// written; nothing is rolled back.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The resource is missing or unreadable ([`GenerateError::ResourceRead`])
    /// - The resource has malformed placeholders ([`GenerateError::TemplateParse`])
    /// - A parent directory cannot be created ([`GenerateError::DirectoryCreate`])
    /// - The file cannot be created ([`GenerateError::FileCreate`])
    /// - Execution fails ([`GenerateError::TemplateExec`]) or output cannot be
    ///   flushed ([`GenerateError::FileWrite`])
    pub fn render(&self, resource: &str, output: &Path, data: &FillData) -> Result<()> {
        let source = self.bundle.read(resource)?;

        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);
        handlebars
            .register_template_string(resource, &source)
            .map_err(|err| GenerateError::TemplateParse {
                name: resource.to_string(),
                reason: parse_reason(&err),
            })?;

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| GenerateError::DirectoryCreate {
                path: parent.to_path_buf(),
                source,
            })?;
            tracing::debug!(dir = %parent.display(), "ensured output directory");
        }

        let file = File::create(output).map_err(|source| GenerateError::FileCreate {
            path: output.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        handlebars
            .render_to_write(resource, data, &mut writer)
            .map_err(|err| GenerateError::TemplateExec {
                name: resource.to_string(),
                path: output.to_path_buf(),
                reason: err.to_string(),
            })?;

        writer.flush().map_err(|source| GenerateError::FileWrite {
            path: output.to_path_buf(),
            source,
        })?;

        tracing::debug!(resource, path = %output.display(), "rendered template");
        Ok(())
    }
}

/// Parser reason and position without the multi-line source excerpt
fn parse_reason(err: &TemplateError) -> String {
    match err.pos() {
        Some((line, column)) => format!("{} (line {line}, column {column})", err.reason()),
        None => err.reason().to_string(),
    }
}
