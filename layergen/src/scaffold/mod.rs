//! Layered-architecture scaffold generator
//!
//! This module turns a short request (component type, entity name, domain)
//! into Go source files for the DTO, validator, repository, service and
//! controller layers, plus the domain's `providers.go` and `registry.go`
//! wiring files.

pub mod component;
pub mod generator;
pub mod helpers;
pub mod renderer;
pub mod spec;
pub mod templates;

pub use component::{Component, ComponentType, APPLICATIONS_ROOT, COMPONENT_ALIASES};
pub use generator::{GeneratedFile, GenerationPlan, GenerationStep, Orchestrator};
pub use helpers::CaseConverter;
pub use renderer::TemplateRenderer;
pub use spec::{FillData, GenerationSpec};
pub use templates::TemplateBundle;
