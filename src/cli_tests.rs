use std::path::PathBuf;

use super::*;

#[test]
fn cli_check_default_path() {
    let cli = Cli::parse_from(["bylaw-guard", "check"]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.paths, vec![PathBuf::from(".")]);
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_with_paths() {
    let cli = Cli::parse_from(["bylaw-guard", "check", "plans", "extra.json"]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(
                args.paths,
                vec![PathBuf::from("plans"), PathBuf::from("extra.json")]
            );
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_with_config() {
    let cli = Cli::parse_from(["bylaw-guard", "check", "--config", "custom.toml"]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_with_format() {
    let cli = Cli::parse_from(["bylaw-guard", "check", "--format", "json"]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.format, OutputFormat::Json);
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_with_extensions() {
    let cli = Cli::parse_from(["bylaw-guard", "check", "--ext", "json,plan"]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(
                args.ext,
                Some(vec!["json".to_string(), "plan".to_string()])
            );
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_strict_and_warn_only_flags() {
    let cli = Cli::parse_from(["bylaw-guard", "check", "--strict", "--warn-only"]);
    match cli.command {
        Commands::Check(args) => {
            assert!(args.strict);
            assert!(args.warn_only);
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_validate_requires_a_path() {
    assert!(Cli::try_parse_from(["bylaw-guard", "validate"]).is_err());

    let cli = Cli::parse_from(["bylaw-guard", "validate", "plan.json"]);
    match cli.command {
        Commands::Validate(args) => {
            assert_eq!(args.paths, vec![PathBuf::from("plan.json")]);
        }
        _ => panic!("Expected Validate command"),
    }
}

#[test]
fn cli_score_with_limit() {
    let cli = Cli::parse_from(["bylaw-guard", "score", "census.csv", "--limit", "10"]);
    match cli.command {
        Commands::Score(args) => {
            assert_eq!(args.census, PathBuf::from("census.csv"));
            assert_eq!(args.limit, Some(10));
        }
        _ => panic!("Expected Score command"),
    }
}

#[test]
fn cli_zone_takes_ward_file() {
    let cli = Cli::parse_from(["bylaw-guard", "zone", "wards.json", "--format", "json"]);
    match cli.command {
        Commands::Zone(args) => {
            assert_eq!(args.wards, PathBuf::from("wards.json"));
            assert_eq!(args.format, OutputFormat::Json);
        }
        _ => panic!("Expected Zone command"),
    }
}

#[test]
fn cli_init_defaults() {
    let cli = Cli::parse_from(["bylaw-guard", "init"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from(".bylaw-guard.toml"));
            assert!(!args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn cli_config_validate_default_path() {
    let cli = Cli::parse_from(["bylaw-guard", "config", "validate"]);
    match cli.command {
        Commands::Config(args) => match args.action {
            ConfigAction::Validate { config } => {
                assert_eq!(config, PathBuf::from(".bylaw-guard.toml"));
            }
            ConfigAction::Show { .. } => panic!("Expected Validate action"),
        },
        _ => panic!("Expected Config command"),
    }
}

#[test]
fn cli_global_flags() {
    let cli = Cli::parse_from(["bylaw-guard", "-vv", "--quiet", "check"]);
    assert_eq!(cli.verbose, 2);
    assert!(cli.quiet);
}
