use super::*;
use clap::Parser;

#[test]
fn run_defaults_to_meteo_profile() {
    let cli = Cli::parse_from(["sap-meteo", "run", "--out", "out"]);
    match cli.command {
        Command::Run(args) => {
            assert_eq!(
                args.profile.source(),
                ProfileSource::Builtin("meteo".to_string())
            );
            assert!(args.region.is_none());
            assert!(args.set.is_empty());
        }
        _ => panic!("expected run command"),
    }
}

#[test]
fn run_collects_assignments() {
    let cli = Cli::parse_from([
        "sap-meteo",
        "run",
        "--out",
        "out",
        "--region",
        "Centre",
        "--set",
        "Température=40",
        "--set",
        "Vent=12.5",
    ]);
    match cli.command {
        Command::Run(args) => {
            assert_eq!(args.region.as_deref(), Some("Centre"));
            assert_eq!(
                args.set,
                vec![
                    ("Température".to_string(), 40.0),
                    ("Vent".to_string(), 12.5)
                ]
            );
        }
        _ => panic!("expected run command"),
    }
}

#[test]
fn malformed_assignment_is_rejected() {
    assert!(run::parse_assignment("Température").is_err());
    assert!(run::parse_assignment("=4").is_err());
    assert!(run::parse_assignment("Vent=fort").is_err());
    assert_eq!(
        run::parse_assignment(" Vent = 3 ").unwrap(),
        ("Vent".to_string(), 3.0)
    );
    let res = Cli::try_parse_from(["sap-meteo", "run", "--out", "o", "--set", "Vent"]);
    assert!(res.is_err());
}

#[test]
fn profile_file_replaces_builtin() {
    let cli = Cli::parse_from([
        "sap-meteo",
        "validate",
        "--profile-file",
        "custom.toml",
    ]);
    match cli.command {
        Command::Validate(args) => {
            assert_eq!(
                args.profile.source(),
                ProfileSource::File("custom.toml".into())
            );
        }
        _ => panic!("expected validate command"),
    }

    let both = Cli::try_parse_from([
        "sap-meteo",
        "validate",
        "--profile",
        "pluvio",
        "--profile-file",
        "custom.toml",
    ]);
    assert!(both.is_err());
}

#[test]
fn classify_accepts_negative_values() {
    let cli = Cli::parse_from([
        "sap-meteo",
        "classify",
        "--parameter",
        "Température",
        "--value",
        "-3.5",
    ]);
    match cli.command {
        Command::Classify(args) => {
            assert_eq!(args.parameter, "Température");
            assert_eq!(args.value, -3.5);
        }
        _ => panic!("expected classify command"),
    }
}

#[test]
fn repeated_set_for_one_parameter_is_rejected() {
    let cli = Cli::parse_from([
        "sap-meteo",
        "run",
        "--out",
        "out",
        "--set",
        "Vent=10",
        "--set",
        "Vent=70",
    ]);
    let Command::Run(args) = cli.command else {
        panic!("expected run command");
    };
    let err = run::collect_assignments(&args.set).unwrap_err();
    assert!(err.to_string().contains("duplicate --set for Vent"));

    let distinct = run::collect_assignments(&[
        ("Vent".to_string(), 10.0),
        ("Température".to_string(), 40.0),
    ])
    .unwrap();
    assert_eq!(distinct.len(), 2);
    assert_eq!(distinct["Vent"], 10.0);
}
