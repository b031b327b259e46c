use std::path::PathBuf;

use super::*;

#[test]
fn cli_path_argument() {
    let cli = Cli::parse_from(["style-guard", "src/app.py"]);
    assert_eq!(cli.check.path, Some(PathBuf::from("src/app.py")));
    assert_eq!(cli.check.format, OutputFormat::Text);
    assert_eq!(cli.color, ColorChoice::Auto);
    assert!(!cli.verbose);
    assert!(!cli.list_rules);
}

#[test]
fn cli_path_is_required() {
    assert!(Cli::try_parse_from(["style-guard"]).is_err());
}

#[test]
fn cli_list_rules_without_path() {
    let cli = Cli::parse_from(["style-guard", "--list-rules"]);
    assert!(cli.list_rules);
    assert!(cli.check.path.is_none());
}

#[test]
fn cli_with_format() {
    let cli = Cli::parse_from(["style-guard", "--format", "json", "."]);
    assert_eq!(cli.check.format, OutputFormat::Json);
}

#[test]
fn cli_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["style-guard", "--format", "xml", "."]).is_err());
}

#[test]
fn cli_with_multiple_excludes() {
    let cli = Cli::parse_from(["style-guard", ".", "-x", "**/venv/**", "--exclude", "**/build/**"]);
    assert_eq!(cli.check.exclude, vec!["**/venv/**", "**/build/**"]);

    let options = cli.check.scan_options();
    assert_eq!(options.exclude, vec!["**/venv/**", "**/build/**"]);
}

#[test]
fn cli_verbose_and_color() {
    let cli = Cli::parse_from(["style-guard", "-v", "--color", "never", "."]);
    assert!(cli.verbose);
    assert_eq!(ColorMode::from(cli.color), ColorMode::Never);
}

#[test]
fn color_choice_maps_to_mode() {
    assert_eq!(ColorMode::from(ColorChoice::Auto), ColorMode::Auto);
    assert_eq!(ColorMode::from(ColorChoice::Always), ColorMode::Always);
    assert_eq!(ColorMode::from(ColorChoice::Never), ColorMode::Never);
}
