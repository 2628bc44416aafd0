//! Property-based tests for key paths and output capture
//!
//! These tests verify:
//! - Path depth follows the number of leading identifiers given
//! - Segments appear in config → section → option order
//! - The captured response is always the first non-empty trimmed line

use proptest::prelude::*;

use ucitool::commands::options::{GetArgs, SetArgs, ShowArgs};
use ucitool::{KeyPath, UciArgs, UciOutput, NO_OUTPUT};

/// Identifiers as uci uses them: no dots, no '=', no whitespace
fn ident() -> impl Strategy<Value = String> {
    "[a-z@_][a-z0-9_\\[\\]]{0,12}"
}

fn output(stdout: String) -> UciOutput {
    UciOutput {
        stdout,
        stderr: String::new(),
        exit_code: Some(0),
        success: true,
        dry_run: false,
    }
}

proptest! {
    /// show: depth equals the number of leading identifiers present
    #[test]
    fn show_depth_matches_given_levels(
        config in proptest::option::of(ident()),
        section in proptest::option::of(ident()),
        option in proptest::option::of(ident()),
    ) {
        let args = ShowArgs {
            config: config.clone(),
            section: section.clone(),
            option: option.clone(),
        };
        let expected = match (&config, &section, &option) {
            (None, _, _) => 0,
            (Some(_), None, _) => 1,
            (Some(_), Some(_), None) => 2,
            (Some(_), Some(_), Some(_)) => 3,
        };
        let depth = args.param().map(|p| p.split('.').count()).unwrap_or(0);
        prop_assert_eq!(depth, expected);
    }

    /// get/set: segments keep their order, set appends exactly one '='
    #[test]
    fn get_and_set_keep_segment_order(
        config in ident(),
        section in ident(),
        option in proptest::option::of(ident()),
        value in "[ -~]{0,20}",
    ) {
        let get = GetArgs {
            config: config.clone(),
            section: section.clone(),
            option: option.clone(),
        };
        let path = get.param().unwrap();

        let mut expected = vec![config.clone(), section.clone()];
        expected.extend(option.clone());
        prop_assert_eq!(path.split('.').map(String::from).collect::<Vec<_>>(), expected);

        let set = SetArgs {
            config,
            section,
            option,
            value: value.clone(),
        };
        prop_assert_eq!(set.param().unwrap(), format!("{}={}", path, value));
    }

    /// KeyPath::deepest never exceeds three segments and never skips a level
    #[test]
    fn deepest_is_a_prefix(
        config in ident(),
        section in proptest::option::of(ident()),
        option in proptest::option::of(ident()),
    ) {
        let path = KeyPath::deepest(Some(config.as_str()), section.as_deref(), option.as_deref())
            .unwrap();
        prop_assert!(path.depth() >= 1 && path.depth() <= 3);
        prop_assert_eq!(&path.segments()[0], &config);
        if section.is_none() {
            prop_assert_eq!(path.depth(), 1);
        }
    }

    /// response: first non-empty line, trimmed; sentinel when none
    #[test]
    fn response_is_first_non_empty_line(
        lines in proptest::collection::vec("[ \\ta-z0-9.=']{0,16}", 0..6),
    ) {
        let out = output(lines.join("\n"));
        let expected = lines
            .iter()
            .map(|l| l.trim())
            .find(|l| !l.is_empty())
            .unwrap_or(NO_OUTPUT)
            .to_string();
        prop_assert_eq!(out.response(), expected);
    }
}
