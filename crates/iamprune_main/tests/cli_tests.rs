use clap::Parser;
use iamprune::Cli;
use iamprune_domain::Config;
use pretty_assertions::assert_eq;

#[test]
fn test_no_flags_uses_default_chain() {
    let fixture = Cli::try_parse_from(["iam-prune"]).unwrap();

    let actual = Config::from(fixture);

    assert_eq!(actual, Config::default());
}

#[test]
fn test_profile_flag() {
    let fixture = Cli::try_parse_from(["iam-prune", "--profile", "staging"]).unwrap();

    let actual = Config::from(fixture);

    assert_eq!(actual, Config::default().profile("staging"));
}

#[test]
fn test_profile_flag_with_equals() {
    let fixture = Cli::try_parse_from(["iam-prune", "--profile=prod-admin"]).unwrap();

    assert_eq!(fixture.profile.as_deref(), Some("prod-admin"));
}

#[test]
fn test_unknown_flag_rejected() {
    let actual = Cli::try_parse_from(["iam-prune", "--dry-run"]);

    assert!(actual.is_err());
}

#[test]
fn test_positional_arguments_rejected() {
    let actual = Cli::try_parse_from(["iam-prune", "delete"]);

    assert!(actual.is_err());
}
