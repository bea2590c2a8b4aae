//! Component generation command
//!
//! # Example
//!
//! ```bash
//! layergen generate --type full --name product --domain catalog
//! layergen generate -t repo -n order_item -d sales
//! ```

use anyhow::{Context, Result};
use clap::Args;
use console::{style, Emoji};
use layergen::scaffold::{GenerationPlan, GenerationSpec, Orchestrator, TemplateBundle};
use layergen::GeneratorConfig;
use std::path::PathBuf;

static CHECK: Emoji<'_, '_> = Emoji("✓ ", "+ ");

/// Generate one component, or the full stack, for an entity
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Component type: controller|c, service|s, repository|repo|r, validator|v, dto|d, full|f
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    component_type: String,

    /// Entity name (e.g. `product`, `order_item`)
    #[arg(short, long, default_value = "")]
    name: String,

    /// Domain the files are nested under (e.g. `catalog`)
    #[arg(short, long, default_value = "")]
    domain: String,

    /// Generate every layer plus the domain wiring files
    #[arg(long)]
    crud: bool,

    /// Directory generated paths are resolved against
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory holding template overrides
    #[arg(long)]
    template_dir: Option<PathBuf>,

    /// Print the files that would be written without writing them
    #[arg(long)]
    dry_run: bool,
}

impl GenerateCommand {
    /// Execute the generate command
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The domain or entity name is missing
    /// - The component type is unknown
    /// - Any template fails to resolve, parse or render
    /// - Directories or files cannot be created
    pub fn execute(self, config: GeneratorConfig) -> Result<()> {
        let config = config.with_overrides(self.output, self.template_dir);

        let spec = GenerationSpec::parse(&self.component_type, self.name, self.domain, self.crud)?;
        let plan = GenerationPlan::for_spec(&spec);

        if self.dry_run {
            for step in plan.steps() {
                println!(
                    "{} {}",
                    style("would write").dim(),
                    config.output_root.join(&step.path).display()
                );
            }
            return Ok(());
        }

        let mut bundle = TemplateBundle::builtin();
        if let Some(dir) = &config.template_dir {
            bundle = bundle.with_override_dir(dir);
        }

        Orchestrator::new(&bundle, &config.output_root)
            .execute(&plan, |file| {
                println!(
                    "{CHECK}{} {}",
                    style(format!("{:<10}", file.component)).green(),
                    config.output_root.join(&file.path).display()
                );
            })
            .with_context(|| format!("Failed to generate {}", spec.entity_name()))?;

        Ok(())
    }
}
