//! Generation requests and the fill data derived from them

use super::component::ComponentType;
use super::helpers::CaseConverter;
use crate::error::{GenerateError, Result};
use serde::Serialize;

/// A validated generation request
///
/// Construction rejects an empty domain or entity name, so any value of this
/// type is safe to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSpec {
    component_type: ComponentType,
    entity_name: String,
    domain: String,
    generate_full_stack: bool,
}

impl GenerationSpec {
    /// Create a generation request
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `domain` is empty or whitespace ([`GenerateError::MissingDomain`])
    /// - `entity_name` is empty or whitespace ([`GenerateError::MissingEntityName`])
    pub fn new(
        component_type: ComponentType,
        entity_name: impl Into<String>,
        domain: impl Into<String>,
        generate_full_stack: bool,
    ) -> Result<Self> {
        let domain = domain.into();
        if domain.trim().is_empty() {
            return Err(GenerateError::MissingDomain);
        }

        let entity_name = entity_name.into();
        if entity_name.trim().is_empty() {
            return Err(GenerateError::MissingEntityName);
        }

        Ok(Self {
            component_type,
            entity_name,
            domain,
            generate_full_stack,
        })
    }

    /// Parse the component type through the alias table, then validate
    ///
    /// The domain is checked first, so a request missing its domain reports
    /// that regardless of the other fields.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::MissingDomain`], [`GenerateError::UnknownType`]
    /// or [`GenerateError::MissingEntityName`].
    pub fn parse(
        component_type: &str,
        entity_name: impl Into<String>,
        domain: impl Into<String>,
        generate_full_stack: bool,
    ) -> Result<Self> {
        let domain = domain.into();
        if domain.trim().is_empty() {
            return Err(GenerateError::MissingDomain);
        }
        let component_type = component_type.parse()?;
        Self::new(component_type, entity_name, domain, generate_full_stack)
    }

    /// Requested component type
    #[must_use]
    pub const fn component_type(&self) -> ComponentType {
        self.component_type
    }

    /// Entity name as typed
    #[must_use]
    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    /// Target domain
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Whether all seven components are generated
    #[must_use]
    pub fn is_full_stack(&self) -> bool {
        self.generate_full_stack || self.component_type == ComponentType::Full
    }
}

/// Values substituted into templates
///
/// Keys are serialised in camelCase (`structName`, `tableName`, ...), which is
/// how templates refer to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FillData {
    /// Package identifier, the domain unchanged
    pub package_name: String,
    /// `PascalCase` type name
    pub struct_name: String,
    /// camelCase variable name
    pub var_name: String,
    /// Target domain
    pub domain: String,
    /// Entity name lower-cased as a whole
    pub lower_name: String,
    /// `snake_case` entity name with a plural `s`
    pub table_name: String,
    /// Whether CRUD wiring is emitted (full-stack runs)
    pub has_crud: bool,
}

impl FillData {
    /// Derive fill data from a generation request
    #[must_use]
    pub fn from_spec(spec: &GenerationSpec) -> Self {
        let entity = spec.entity_name();
        Self {
            package_name: spec.domain().to_string(),
            struct_name: CaseConverter::to_pascal_case(entity),
            var_name: CaseConverter::to_camel_case(entity),
            domain: spec.domain().to_string(),
            lower_name: entity.to_lowercase(),
            table_name: CaseConverter::to_table_name(entity),
            has_crud: spec.is_full_stack(),
        }
    }
}
