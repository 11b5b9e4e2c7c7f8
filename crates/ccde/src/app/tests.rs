use super::*;

#[test]
fn test_cli_build() {
    let app = build_cli();
    assert_eq!(app.get_name(), "ccde");
}

#[test]
fn test_cli_positional_layout_file() {
    let matches = build_cli()
        .try_get_matches_from(vec!["ccde", "layouts/dev.yaml"])
        .unwrap();
    assert_eq!(
        matches.get_one::<String>("layout-file").unwrap(),
        "layouts/dev.yaml"
    );
    assert!(!matches.get_flag("execute"));
    assert!(!matches.get_flag("verbose"));
}

#[test]
fn test_cli_file_flag() {
    let matches = build_cli()
        .try_get_matches_from(vec!["ccde", "-f", "dev.json", "--json"])
        .unwrap();
    assert_eq!(matches.get_one::<String>("file").unwrap(), "dev.json");
    assert!(matches.get_flag("json"));
}

#[test]
fn test_cli_file_and_positional_conflict() {
    let result = build_cli().try_get_matches_from(vec!["ccde", "a.yaml", "-f", "b.yaml"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_default_conflicts_with_file() {
    let result = build_cli().try_get_matches_from(vec!["ccde", "--default", "a.yaml"]);
    assert!(result.is_err());

    let matches = build_cli()
        .try_get_matches_from(vec!["ccde", "--default"])
        .unwrap();
    assert!(matches.get_flag("default"));
}

#[test]
fn test_cli_execute_with_batch() {
    let matches = build_cli()
        .try_get_matches_from(vec!["ccde", "-e", "--batch", "dev.yml"])
        .unwrap();
    assert!(matches.get_flag("execute"));
    assert!(matches.get_flag("batch"));
}

#[test]
fn test_cli_batch_requires_execute() {
    let result = build_cli().try_get_matches_from(vec!["ccde", "--batch", "dev.yml"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_json_conflicts_with_execute() {
    let result = build_cli().try_get_matches_from(vec!["ccde", "--json", "-e", "dev.yml"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_overrides() {
    let matches = build_cli()
        .try_get_matches_from(vec![
            "ccde",
            "dev.yml",
            "-c",
            "/work/project",
            "--window-name",
            "feature-x",
        ])
        .unwrap();
    assert_eq!(matches.get_one::<String>("cwd").unwrap(), "/work/project");
    assert_eq!(
        matches.get_one::<String>("window-name").unwrap(),
        "feature-x"
    );
}

#[test]
fn test_cli_global_flags() {
    let matches = build_cli()
        .try_get_matches_from(vec!["ccde", "-v", "--no-color", "dev.yml"])
        .unwrap();
    assert!(matches.get_flag("verbose"));
    assert!(matches.get_flag("no-color"));
}

#[test]
fn test_cli_no_arguments_parses() {
    // Missing layout is reported by the command handler, not clap.
    let matches = build_cli().try_get_matches_from(vec!["ccde"]).unwrap();
    assert!(matches.get_one::<String>("layout-file").is_none());
    assert!(matches.get_one::<String>("file").is_none());
}
