//! Template resources bundled with the tool
//!
//! The bundle is a read-only table built once at startup and handed to the
//! renderer. An optional override directory lets users customise resources:
//! `<dir>/<name>` is read instead of the bundled text when it exists. Reads
//! happen per render call and are never cached.

use crate::error::{GenerateError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Data-transfer object template
pub const DTO_TEMPLATE: &str = include_str!("../../templates/dto.go.hbs");
/// Validator template
pub const VALIDATOR_TEMPLATE: &str = include_str!("../../templates/validator.go.hbs");
/// Repository template
pub const REPOSITORY_TEMPLATE: &str = include_str!("../../templates/repository.go.hbs");
/// Service template
pub const SERVICE_TEMPLATE: &str = include_str!("../../templates/service.go.hbs");
/// Controller template
pub const CONTROLLER_TEMPLATE: &str = include_str!("../../templates/controller.go.hbs");
/// Domain providers wiring template
pub const PROVIDERS_TEMPLATE: &str = include_str!("../../templates/providers.go.hbs");
/// Domain route registry template
pub const REGISTRY_TEMPLATE: &str = include_str!("../../templates/registry.go.hbs");

/// Bundled resources keyed by resource name
const BUNDLED: &[(&str, &str)] = &[
    ("dto.go.hbs", DTO_TEMPLATE),
    ("validator.go.hbs", VALIDATOR_TEMPLATE),
    ("repository.go.hbs", REPOSITORY_TEMPLATE),
    ("service.go.hbs", SERVICE_TEMPLATE),
    ("controller.go.hbs", CONTROLLER_TEMPLATE),
    ("providers.go.hbs", PROVIDERS_TEMPLATE),
    ("registry.go.hbs", REGISTRY_TEMPLATE),
];

/// Read-only template resource table
#[derive(Debug, Clone)]
pub struct TemplateBundle {
    resources: BTreeMap<String, String>,
    override_dir: Option<PathBuf>,
}

impl TemplateBundle {
    /// Bundle holding the resources compiled into the binary
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_resources(BUNDLED.iter().copied())
    }

    /// Bundle holding exactly the given resources
    pub fn from_resources<N, T>(resources: impl IntoIterator<Item = (N, T)>) -> Self
    where
        N: Into<String>,
        T: Into<String>,
    {
        Self {
            resources: resources
                .into_iter()
                .map(|(name, text)| (name.into(), text.into()))
                .collect(),
            override_dir: None,
        }
    }

    /// Prefer files in `dir` over bundled resources of the same name
    #[must_use]
    pub fn with_override_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.override_dir = Some(dir.into());
        self
    }

    /// Override directory, if any
    #[must_use]
    pub fn override_dir(&self) -> Option<&Path> {
        self.override_dir.as_deref()
    }

    /// Names of all bundled resources, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    /// Bundled text of a resource, ignoring overrides
    #[must_use]
    pub fn bundled(&self, name: &str) -> Option<&str> {
        self.resources.get(name).map(String::as_str)
    }

    /// Path of the override for `name`, if the override file exists
    #[must_use]
    pub fn override_path(&self, name: &str) -> Option<PathBuf> {
        self.override_dir
            .as_ref()
            .map(|dir| dir.join(name))
            .filter(|path| path.is_file())
    }

    /// Resolve and read a resource
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::ResourceRead`] if the name is not in the bundle,
    /// or if an override file exists but cannot be read.
    pub fn read(&self, name: &str) -> Result<String> {
        if let Some(path) = self.override_path(name) {
            tracing::debug!(resource = name, path = %path.display(), "using template override");
            return fs::read_to_string(&path).map_err(|source| GenerateError::ResourceRead {
                name: name.to_string(),
                source,
            });
        }

        self.bundled(name)
            .map(str::to_string)
            .ok_or_else(|| GenerateError::ResourceRead {
                name: name.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such bundled template"),
            })
    }
}

impl Default for TemplateBundle {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::Component;
    use tempfile::tempdir;

    #[test]
    fn test_builtin_covers_every_component() {
        let bundle = TemplateBundle::builtin();
        for component in Component::FULL_STACK {
            assert!(
                bundle.bundled(&component.resource_name()).is_some(),
                "missing resource for {component}"
            );
        }
        assert_eq!(bundle.names().count(), 7);
    }

    #[test]
    fn test_missing_resource() {
        let bundle = TemplateBundle::from_resources([("dto.go.hbs", "package {{packageName}}")]);
        let err = bundle.read("service.go.hbs").unwrap_err();
        assert!(matches!(
            err,
            GenerateError::ResourceRead { ref name, ref source }
                if name == "service.go.hbs" && source.kind() == io::ErrorKind::NotFound
        ));
    }

    #[test]
    fn test_override_takes_precedence() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("dto.go.hbs"), "package custom").unwrap();

        let bundle = TemplateBundle::builtin().with_override_dir(dir.path());
        assert_eq!(bundle.read("dto.go.hbs").unwrap(), "package custom");
        assert_eq!(bundle.read("service.go.hbs").unwrap(), SERVICE_TEMPLATE);
    }

    #[test]
    fn test_override_is_read_on_every_call() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dto.go.hbs");
        let bundle = TemplateBundle::builtin().with_override_dir(dir.path());

        fs::write(&path, "first").unwrap();
        assert_eq!(bundle.read("dto.go.hbs").unwrap(), "first");
        fs::write(&path, "second").unwrap();
        assert_eq!(bundle.read("dto.go.hbs").unwrap(), "second");
    }

    #[test]
    fn test_templates_reference_fill_data() {
        assert!(DTO_TEMPLATE.contains("{{packageName}}"));
        assert!(DTO_TEMPLATE.contains("{{structName}}"));
        assert!(REPOSITORY_TEMPLATE.contains("{{tableName}}"));
        assert!(CONTROLLER_TEMPLATE.contains("{{lowerName}}"));
        assert!(REGISTRY_TEMPLATE.contains("{{#if hasCrud}}"));
    }
}
