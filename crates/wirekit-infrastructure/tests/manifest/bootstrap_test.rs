//! Bootstrap Tests

use tempfile::TempDir;
use wirekit_domain::Error;
use wirekit_infrastructure::bootstrap::build_container;
use wirekit_infrastructure::config::ConfigBuilder;

const CHAIN: &str = r#"
[[classes]]
name = "A"
parameters = [{ service = "B" }]

[[classes]]
name = "B"
parameters = [{ service = "C" }]

[[bindings]]
service = "A"
type = "instance"
implementation = "A"

[[bindings]]
service = "B"
type = "instance"
implementation = "B"

[[bindings]]
service = "C"
type = "dynamic_value"
"#;

#[test]
fn test_build_container_honours_max_depth() {
    let temp_dir = TempDir::new().unwrap();
    let manifest_path = temp_dir.path().join("bindings.toml");
    std::fs::write(&manifest_path, CHAIN).unwrap();

    let roomy = ConfigBuilder::new().build().unwrap();
    let container = build_container(&roomy, &manifest_path).unwrap();
    assert_eq!(container.plan("A").unwrap().len(), 3);
    assert_eq!(container.bound_identifiers().len(), 3);

    let tight = ConfigBuilder::new().with_max_depth(2).build().unwrap();
    let container = build_container(&tight, &manifest_path).unwrap();
    let err = container.plan("A").unwrap_err();
    assert!(matches!(err, Error::PlanningDepthExceeded { max_depth: 2, .. }));
}
