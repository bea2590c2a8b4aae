//! Component kinds and the user-facing type alias table
//!
//! [`ComponentType`] is what a user asks for on the command line. It is parsed
//! once, at the boundary, through [`COMPONENT_ALIASES`]. [`Component`] is one of
//! the seven files the generator knows how to write.

use crate::error::{GenerateError, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Root under which every domain's files are written
pub const APPLICATIONS_ROOT: &str = "internal/applications";

/// Requested generation target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentType {
    /// Request controller
    Controller,
    /// Service logic
    Service,
    /// Persistence repository
    Repository,
    /// Input validator
    Validator,
    /// Data-transfer object
    Dto,
    /// All seven components, including wiring files
    Full,
}

/// Accepted spellings for each [`ComponentType`]
pub const COMPONENT_ALIASES: &[(&str, ComponentType)] = &[
    ("controller", ComponentType::Controller),
    ("c", ComponentType::Controller),
    ("service", ComponentType::Service),
    ("s", ComponentType::Service),
    ("repository", ComponentType::Repository),
    ("repo", ComponentType::Repository),
    ("r", ComponentType::Repository),
    ("validator", ComponentType::Validator),
    ("v", ComponentType::Validator),
    ("dto", ComponentType::Dto),
    ("d", ComponentType::Dto),
    ("full", ComponentType::Full),
    ("f", ComponentType::Full),
];

impl ComponentType {
    /// The single component this type generates, or `None` for [`Self::Full`]
    #[must_use]
    pub const fn single(self) -> Option<Component> {
        match self {
            Self::Controller => Some(Component::Controller),
            Self::Service => Some(Component::Service),
            Self::Repository => Some(Component::Repository),
            Self::Validator => Some(Component::Validator),
            Self::Dto => Some(Component::Dto),
            Self::Full => None,
        }
    }
}

impl FromStr for ComponentType {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        COMPONENT_ALIASES
            .iter()
            .find(|(alias, _)| *alias == wanted)
            .map(|&(_, kind)| kind)
            .ok_or_else(|| GenerateError::UnknownType(s.to_string()))
    }
}

/// One generated file kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// `dto/<name>_dto.go`
    Dto,
    /// `validators/<name>_validator.go`
    Validator,
    /// `repository/<name>_repository.go`
    Repository,
    /// `service/<name>_service.go`
    Service,
    /// `controller/<name>_controller.go`
    Controller,
    /// `providers.go` at the domain root
    Providers,
    /// `registry.go` at the domain root
    Registry,
}

impl Component {
    /// Full-stack order. Also the order confirmations are reported in and the
    /// order a failed run truncates.
    pub const FULL_STACK: [Self; 7] = [
        Self::Dto,
        Self::Validator,
        Self::Repository,
        Self::Service,
        Self::Controller,
        Self::Providers,
        Self::Registry,
    ];

    /// Short lower-case name, also the template resource stem
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dto => "dto",
            Self::Validator => "validator",
            Self::Repository => "repository",
            Self::Service => "service",
            Self::Controller => "controller",
            Self::Providers => "providers",
            Self::Registry => "registry",
        }
    }

    /// Template resource resolved for this component
    #[must_use]
    pub fn resource_name(self) -> String {
        format!("{}.go.hbs", self.name())
    }

    /// Folder under the domain root, `None` for the domain-level wiring files
    #[must_use]
    pub const fn folder(self) -> Option<&'static str> {
        match self {
            Self::Dto => Some("dto"),
            Self::Validator => Some("validators"),
            Self::Repository => Some("repository"),
            Self::Service => Some("service"),
            Self::Controller => Some("controller"),
            Self::Providers | Self::Registry => None,
        }
    }

    /// Output path relative to the output root
    ///
    /// `domain` and `lower_name` are joined verbatim. Values containing `..`
    /// or path separators are not rejected and can resolve outside the output
    /// root; callers wanting confinement must check them first.
    ///
    /// ```
    /// # use layergen::scaffold::Component;
    /// # use std::path::Path;
    /// assert_eq!(
    ///     Component::Validator.relative_path("catalog", "product"),
    ///     Path::new("internal/applications/catalog/validators/product_validator.go"),
    /// );
    /// assert_eq!(
    ///     Component::Registry.relative_path("catalog", "product"),
    ///     Path::new("internal/applications/catalog/registry.go"),
    /// );
    /// ```
    #[must_use]
    pub fn relative_path(self, domain: &str, lower_name: &str) -> PathBuf {
        let domain_root = Path::new(APPLICATIONS_ROOT).join(domain);
        let suffix = self.name();
        match self.folder() {
            Some(folder) => domain_root
                .join(folder)
                .join(format!("{lower_name}_{suffix}.go")),
            None => domain_root.join(format!("{suffix}.go")),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Dto => "DTO",
            Self::Validator => "Validator",
            Self::Repository => "Repository",
            Self::Service => "Service",
            Self::Controller => "Controller",
            Self::Providers => "Providers",
            Self::Registry => "Registry",
        };
        f.pad(label)
    }
}
