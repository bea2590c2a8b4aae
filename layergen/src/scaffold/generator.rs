//! Generation orchestrator
//!
//! A [`GenerationSpec`] is turned into a [`GenerationPlan`]: the ordered list of
//! files to write. The [`Orchestrator`] walks that plan, rendering one step at
//! a time and stopping at the first failure. Files written before a failure
//! stay on disk.

use super::component::Component;
use super::renderer::TemplateRenderer;
use super::spec::{FillData, GenerationSpec};
use super::templates::TemplateBundle;
use crate::error::{GenerateError, Result};
use std::path::{Path, PathBuf};

/// One file to generate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationStep {
    /// Component kind, selects the template resource
    pub component: Component,
    /// Output path relative to the output root
    pub path: PathBuf,
}

/// Ordered generation steps for one request
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    data: FillData,
    steps: Vec<GenerationStep>,
}

impl GenerationPlan {
    /// Plan the files for a request
    ///
    /// Full-stack requests yield seven steps in [`Component::FULL_STACK`]
    /// order; anything else yields the one requested component.
    #[must_use]
    pub fn for_spec(spec: &GenerationSpec) -> Self {
        let data = FillData::from_spec(spec);
        let components: Vec<Component> = if spec.is_full_stack() {
            Component::FULL_STACK.to_vec()
        } else {
            spec.component_type().single().into_iter().collect()
        };

        let steps = components
            .into_iter()
            .map(|component| GenerationStep {
                component,
                path: component.relative_path(&data.domain, &data.lower_name),
            })
            .collect();

        Self { data, steps }
    }

    /// Fill data shared by every step
    #[must_use]
    pub const fn data(&self) -> &FillData {
        &self.data
    }

    /// Steps in execution order
    #[must_use]
    pub fn steps(&self) -> &[GenerationStep] {
        &self.steps
    }
}

/// A file written by the orchestrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Component kind
    pub component: Component,
    /// Path relative to the output root
    pub path: PathBuf,
}

/// Executes generation plans against an output root
pub struct Orchestrator<'a> {
    renderer: TemplateRenderer<'a>,
    output_root: PathBuf,
}

impl<'a> Orchestrator<'a> {
    /// Create an orchestrator writing beneath `output_root`
    #[must_use]
    pub fn new(bundle: &'a TemplateBundle, output_root: impl Into<PathBuf>) -> Self {
        Self {
            renderer: TemplateRenderer::new(bundle),
            output_root: output_root.into(),
        }
    }

    /// Output root all plan paths are resolved against
    #[must_use]
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Generate every file a request asks for
    ///
    /// # Errors
    ///
    /// Returns the first rendering error; see [`Self::execute`].
    pub fn generate(&self, spec: &GenerationSpec) -> Result<Vec<GeneratedFile>> {
        self.execute(&GenerationPlan::for_spec(spec), |_| {})
    }

    /// Execute a plan step by step
    ///
    /// `on_written` is called after each file lands, in plan order, so callers
    /// can report progress as it happens.
    ///
    /// # Errors
    ///
    /// Returns the first rendering error. Steps after it are not attempted and
    /// files already written are left in place.
    pub fn execute<F>(&self, plan: &GenerationPlan, mut on_written: F) -> Result<Vec<GeneratedFile>>
    where
        F: FnMut(&GeneratedFile),
    {
        tracing::info!(
            entity = %plan.data().struct_name,
            domain = %plan.data().domain,
            steps = plan.steps().len(),
            "generating"
        );

        let written = plan
            .steps()
            .iter()
            .try_fold(Vec::with_capacity(plan.steps().len()), |mut written, step| {
                let target = self.output_root.join(&step.path);
                self.renderer
                    .render(&step.component.resource_name(), &target, plan.data())?;

                let file = GeneratedFile {
                    component: step.component,
                    path: step.path.clone(),
                };
                on_written(&file);
                written.push(file);
                Ok::<_, GenerateError>(written)
            })?;

        tracing::info!(files = written.len(), "generation complete");
        Ok(written)
    }
}
