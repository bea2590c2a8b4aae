//! Integration tests for full-stack and single-component generation

use layergen::scaffold::{Component, GenerationPlan, GenerationSpec, Orchestrator, TemplateBundle};
use layergen::GenerateError;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PRODUCT_PATHS: [&str; 7] = [
    "internal/applications/catalog/dto/product_dto.go",
    "internal/applications/catalog/validators/product_validator.go",
    "internal/applications/catalog/repository/product_repository.go",
    "internal/applications/catalog/service/product_service.go",
    "internal/applications/catalog/controller/product_controller.go",
    "internal/applications/catalog/providers.go",
    "internal/applications/catalog/registry.go",
];

/// Every regular file under `root`, relative to it
fn files_under(root: &Path) -> Vec<PathBuf> {
    fn walk(dir: &Path, root: &Path, out: &mut Vec<PathBuf>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(&path, root, out);
            } else {
                out.push(path.strip_prefix(root).unwrap().to_path_buf());
            }
        }
    }

    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.sort();
    out
}

#[test]
fn test_full_stack_writes_seven_files_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let bundle = TemplateBundle::builtin();
    let spec = GenerationSpec::parse("full", "product", "catalog", false).unwrap();

    let written = Orchestrator::new(&bundle, temp_dir.path()).generate(&spec).unwrap();

    let paths: Vec<_> = written.iter().map(|f| f.path.clone()).collect();
    let expected: Vec<_> = PRODUCT_PATHS.iter().map(PathBuf::from).collect();
    assert_eq!(paths, expected);

    let mut expected_sorted = expected;
    expected_sorted.sort();
    assert_eq!(files_under(temp_dir.path()), expected_sorted);
}

#[test]
fn test_full_stack_content_uses_fill_data() {
    let temp_dir = TempDir::new().unwrap();
    let bundle = TemplateBundle::builtin();
    let spec = GenerationSpec::parse("f", "order_item", "sales", false).unwrap();

    Orchestrator::new(&bundle, temp_dir.path()).generate(&spec).unwrap();

    let root = temp_dir.path().join("internal/applications/sales");
    let repository = fs::read_to_string(root.join("repository/order_item_repository.go")).unwrap();
    assert!(repository.contains("type OrderItem struct"));
    assert!(repository.contains("return \"order_items\""));
    assert!(repository.contains("var orderItem OrderItem"));

    let providers = fs::read_to_string(root.join("providers.go")).unwrap();
    assert!(providers.starts_with("package sales"));
    assert!(providers.contains("controller.NewOrderItemController"));

    let registry = fs::read_to_string(root.join("registry.go")).unwrap();
    assert!(registry.contains("group.Group(\"/order_item\")"));
    assert!(registry.contains("p.OrderItemController.Create"));
}

#[test]
fn test_rerun_overwrites_silently() {
    let temp_dir = TempDir::new().unwrap();
    let bundle = TemplateBundle::builtin();
    let spec = GenerationSpec::parse("full", "product", "catalog", false).unwrap();
    let orchestrator = Orchestrator::new(&bundle, temp_dir.path());

    let first = orchestrator.generate(&spec).unwrap();
    let dto = temp_dir.path().join(PRODUCT_PATHS[0]);
    let original = fs::read_to_string(&dto).unwrap();
    fs::write(&dto, "hand edited").unwrap();

    let second = orchestrator.generate(&spec).unwrap();

    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&dto).unwrap(), original);
    assert_eq!(files_under(temp_dir.path()).len(), 7);
}

#[test]
fn test_single_component_writes_one_file() {
    let temp_dir = TempDir::new().unwrap();
    let bundle = TemplateBundle::builtin();
    let spec = GenerationSpec::parse("repo", "product", "catalog", false).unwrap();

    let written = Orchestrator::new(&bundle, temp_dir.path()).generate(&spec).unwrap();

    assert_eq!(written.len(), 1);
    assert_eq!(written[0].component, Component::Repository);
    assert_eq!(
        files_under(temp_dir.path()),
        [PathBuf::from(PRODUCT_PATHS[2])]
    );
}

#[test]
fn test_missing_domain_produces_no_files() {
    let temp_dir = TempDir::new().unwrap();

    for component_type in ["full", "dto", "widget"] {
        let err = GenerationSpec::parse(component_type, "product", "", true).unwrap_err();
        assert!(matches!(err, GenerateError::MissingDomain));
    }

    assert!(files_under(temp_dir.path()).is_empty());
}

#[test]
fn test_unknown_type_produces_no_files() {
    let err = GenerationSpec::parse("model", "product", "catalog", false).unwrap_err();
    assert!(matches!(err, GenerateError::UnknownType(ref t) if t == "model"));
}

#[test]
fn test_partial_failure_keeps_earlier_files() {
    let temp_dir = TempDir::new().unwrap();
    let template_dir = TempDir::new().unwrap();
    // A broken service override stops the run at step four.
    fs::write(template_dir.path().join("service.go.hbs"), "{{#if hasCrud}}x{{/each}}").unwrap();
    let bundle = TemplateBundle::builtin().with_override_dir(template_dir.path());
    let spec = GenerationSpec::parse("full", "product", "catalog", false).unwrap();
    let plan = GenerationPlan::for_spec(&spec);

    let mut reported = Vec::new();
    let err = Orchestrator::new(&bundle, temp_dir.path())
        .execute(&plan, |file| reported.push(file.path.clone()))
        .unwrap_err();

    assert!(matches!(err, GenerateError::TemplateParse { ref name, .. } if name == "service.go.hbs"));
    let expected: Vec<_> = PRODUCT_PATHS[..3].iter().map(PathBuf::from).collect();
    assert_eq!(reported, expected);

    let mut expected_sorted = expected;
    expected_sorted.sort();
    assert_eq!(files_under(temp_dir.path()), expected_sorted);
}

#[test]
fn test_output_root_is_respected() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("project");
    let bundle = TemplateBundle::builtin();
    let spec = GenerationSpec::parse("d", "product", "catalog", false).unwrap();

    let orchestrator = Orchestrator::new(&bundle, &root);
    orchestrator.generate(&spec).unwrap();

    assert_eq!(orchestrator.output_root(), root);
    assert!(root.join(PRODUCT_PATHS[0]).is_file());
}
