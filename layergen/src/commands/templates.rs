//! Template customisation commands
//!
//! Commands for working with the override directory:
//! - `list` - Show bundled templates and which ones are customised
//! - `eject` - Copy bundled templates into the override directory
//! - `diff` - Show changes from the bundled version

use anyhow::{Context, Result};
use clap::Subcommand;
use console::{style, Emoji};
use layergen::scaffold::TemplateBundle;
use layergen::GeneratorConfig;
use similar::{ChangeTag, TextDiff};
use std::fs;
use std::path::{Path, PathBuf};

static CHECK: Emoji<'_, '_> = Emoji("✓ ", "+ ");
static SKIP: Emoji<'_, '_> = Emoji("• ", "- ");
static CUSTOM: Emoji<'_, '_> = Emoji("✨ ", "* ");
static DEFAULT: Emoji<'_, '_> = Emoji("  ", "  ");

/// Template subcommands
#[derive(Debug, Subcommand)]
pub enum TemplatesCommand {
    /// List bundled templates and their customisation status
    List {
        /// Directory holding template overrides
        #[arg(long)]
        template_dir: Option<PathBuf>,
    },
    /// Copy bundled templates into the override directory
    Eject {
        /// Directory to copy templates into
        #[arg(long)]
        template_dir: Option<PathBuf>,
        /// Overwrite templates that already exist
        #[arg(long)]
        force: bool,
    },
    /// Show differences between customised and bundled templates
    Diff {
        /// Template name (e.g. `service.go.hbs`); all customised ones if omitted
        template: Option<String>,
        /// Directory holding template overrides
        #[arg(long)]
        template_dir: Option<PathBuf>,
    },
}

impl TemplatesCommand {
    /// Execute the templates command
    ///
    /// # Errors
    ///
    /// Returns error if no override directory is configured for `eject` or
    /// `diff`, or if a template cannot be read or written.
    pub fn execute(self, config: GeneratorConfig) -> Result<()> {
        match self {
            Self::List { template_dir } => {
                let config = config.with_overrides(None, template_dir);
                list_templates(&bundle_for(&config));
                Ok(())
            }
            Self::Eject { template_dir, force } => {
                let config = config.with_overrides(None, template_dir);
                eject_templates(&TemplateBundle::builtin(), require_dir(&config)?, force)
            }
            Self::Diff { template, template_dir } => {
                let config = config.with_overrides(None, template_dir);
                require_dir(&config)?;
                diff_templates(&bundle_for(&config), template.as_deref())
            }
        }
    }
}

fn bundle_for(config: &GeneratorConfig) -> TemplateBundle {
    match &config.template_dir {
        Some(dir) => TemplateBundle::builtin().with_override_dir(dir),
        None => TemplateBundle::builtin(),
    }
}

fn require_dir(config: &GeneratorConfig) -> Result<&Path> {
    config
        .template_dir
        .as_deref()
        .context("No template directory configured (use --template-dir or set template_dir in layergen.toml)")
}

fn list_templates(bundle: &TemplateBundle) {
    for name in bundle.names() {
        if bundle.override_path(name).is_some() {
            println!("{CUSTOM}{} {}", style(name).green(), style("(customised)").dim());
        } else {
            println!("{DEFAULT}{name}");
        }
    }

    if let Some(dir) = bundle.override_dir() {
        println!();
        println!("Overrides are read from {}", style(dir.display()).cyan());
    }
}

fn eject_templates(bundle: &TemplateBundle, dir: &Path, force: bool) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create template directory: {}", dir.display()))?;

    for name in bundle.names() {
        let path = dir.join(name);
        if path.exists() && !force {
            println!("{SKIP}{} {}", style(name).yellow(), style("(exists, use --force)").dim());
            continue;
        }

        let text = bundle.bundled(name).unwrap_or_default();
        fs::write(&path, text)
            .with_context(|| format!("Failed to write template: {}", path.display()))?;
        println!("{CHECK}{}", style(path.display()).green());
    }
    Ok(())
}

fn diff_templates(bundle: &TemplateBundle, template: Option<&str>) -> Result<()> {
    let names: Vec<&str> = match template {
        Some(name) => {
            if bundle.bundled(name).is_none() {
                anyhow::bail!("Unknown template: {name}");
            }
            vec![name]
        }
        None => bundle
            .names()
            .filter(|name| bundle.override_path(name).is_some())
            .collect(),
    };

    if names.is_empty() {
        println!("No customised templates");
        return Ok(());
    }

    for name in names {
        let Some(path) = bundle.override_path(name) else {
            println!("{DEFAULT}{} {}", name, style("(not customised)").dim());
            continue;
        };
        let custom = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read template: {}", path.display()))?;
        let original = bundle.bundled(name).unwrap_or_default();

        println!("{}", style(format!("--- {name} (bundled)")).red());
        println!("{}", style(format!("+++ {}", path.display())).green());
        print_diff(original, &custom);
        println!();
    }
    Ok(())
}

fn print_diff(original: &str, custom: &str) {
    let diff = TextDiff::from_lines(original, custom);
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Delete => print!("{}", style(format!("-{change}")).red()),
            ChangeTag::Insert => print!("{}", style(format!("+{change}")).green()),
            ChangeTag::Equal => print!(" {change}"),
        }
    }
}
