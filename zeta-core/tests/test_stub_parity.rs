use std::fs;
use std::path::PathBuf;

#[test]
fn stub_functions_exported_in_pybindings() {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let stub_path = manifest.join("zeta_core.pyi");
    let bindings_path = manifest.join("src").join("pybindings.rs");

    let stub_src = fs::read_to_string(&stub_path)
        .unwrap_or_else(|e| panic!("Failed to read stub file {}: {}", stub_path.display(), e));
    let bindings_src = fs::read_to_string(&bindings_path)
        .unwrap_or_else(|e| panic!("Failed to read bindings file {}: {}", bindings_path.display(), e));

    // Top-level (non-indented) defs only; class methods are covered by #[pymethods]
    let funcs: Vec<&str> = stub_src
        .lines()
        .filter_map(|line| line.strip_prefix("def "))
        .filter_map(|rest| rest.split('(').next())
        .filter(|name| !name.starts_with('_'))
        .collect();
    assert!(!funcs.is_empty(), "no functions found in stub");

    let missing: Vec<&str> = funcs
        .into_iter()
        .filter(|f| !bindings_src.contains(&format!("wrap_pyfunction!({},", f)))
        .collect();

    assert!(missing.is_empty(), "Missing exports for functions: {:?}", missing);
}

#[test]
fn stub_constants_registered_on_module() {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let stub_src = fs::read_to_string(manifest.join("zeta_core.pyi")).unwrap();
    let bindings_src = fs::read_to_string(manifest.join("src").join("pybindings.rs")).unwrap();

    for line in stub_src.lines() {
        let Some((name, _)) = line.split_once(':') else { continue };
        if name.chars().all(|c| c.is_ascii_uppercase() || c == '_') && !name.is_empty() {
            assert!(
                bindings_src.contains(&format!("m.add(\"{}\"", name)),
                "constant {} not added to module",
                name
            );
        }
    }
}
