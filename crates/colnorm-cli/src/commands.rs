use std::io::Read;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use colnorm_core::{
    ColumnRename, NormalizeOptions, Normalizer, RawLabel, check_identifier, renames_with,
};

use crate::cli::{CheckArgs, NormalizeArgs};

/// Result of checking one name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub name: String,
    /// Why the name is not a valid identifier, if it isn't.
    pub problem: Option<String>,
}

impl CheckOutcome {
    pub fn is_valid(&self) -> bool {
        self.problem.is_none()
    }
}

pub fn run_normalize(args: &NormalizeArgs, stdin: impl Read) -> Result<Vec<ColumnRename>> {
    let span = info_span!("normalize", max_length = args.max_length);
    let _guard = span.enter();

    let labels = read_labels(args, stdin)?;
    info!(labels = labels.len(), forbidden = args.forbid.len(), "Normalizing labels");

    let options = NormalizeOptions::new().with_max_length(args.max_length);
    let normalizer = Normalizer::new(options)
        .context("invalid --max-length")?
        .with_forbidden(args.forbid.iter().cloned());
    let renames = renames_with(normalizer, labels).context("normalize labels")?;

    let changed = renames.iter().filter(|rename| rename.changed).count();
    info!(total = renames.len(), changed, "Normalization complete");
    Ok(renames)
}

pub fn run_check(args: &CheckArgs) -> Vec<CheckOutcome> {
    args.names
        .iter()
        .map(|name| {
            let problem = check_identifier(name, colnorm_core::MAX_LENGTH)
                .err()
                .map(|error| error.to_string());
            debug!(name = %name, valid = problem.is_none(), "Checked name");
            CheckOutcome {
                name: name.clone(),
                problem,
            }
        })
        .collect()
}

/// Collect labels from arguments, a JSON array on stdin, or stdin lines.
fn read_labels(args: &NormalizeArgs, mut stdin: impl Read) -> Result<Vec<RawLabel>> {
    if !args.labels.is_empty() {
        return Ok(args.labels.iter().map(RawLabel::from).collect());
    }

    let mut input = String::new();
    stdin
        .read_to_string(&mut input)
        .context("read labels from stdin")?;

    if args.json {
        let labels: Vec<RawLabel> =
            serde_json::from_str(&input).context("parse JSON label array from stdin")?;
        return Ok(labels);
    }

    Ok(input.lines().map(RawLabel::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputArg;

    fn args(labels: &[&str]) -> NormalizeArgs {
        NormalizeArgs {
            labels: labels.iter().map(|label| (*label).to_string()).collect(),
            json: false,
            forbid: Vec::new(),
            max_length: colnorm_core::MAX_LENGTH,
            output: OutputArg::Plain,
        }
    }

    #[test]
    fn test_labels_from_arguments() {
        let renames = run_normalize(&args(&["Field: 2", "SELECT"]), std::io::empty())
            .expect("normalize");
        assert_eq!(renames[0].identifier, "field_2");
        assert_eq!(renames[1].identifier, "_select");
    }

    #[test]
    fn test_labels_from_stdin_lines() {
        let input = "Name\r\nname\nà\n";
        let renames = run_normalize(&args(&[]), input.as_bytes()).expect("normalize");
        let ids: Vec<&str> = renames.iter().map(|r| r.identifier.as_str()).collect();
        assert_eq!(ids, ["name", "name_1", "a"]);
    }

    #[test]
    fn test_labels_from_json() {
        let mut json_args = args(&[]);
        json_args.json = true;
        let input = r#"["Unnamed: 0", 1, 1.0, "public"]"#;
        let renames = run_normalize(&json_args, input.as_bytes()).expect("normalize");
        let ids: Vec<&str> = renames.iter().map(|r| r.identifier.as_str()).collect();
        assert_eq!(ids, ["unnamed_0", "_1", "_1_0", "public"]);
        assert_eq!(renames[2].original, "1.0");
    }

    #[test]
    fn test_json_integer_beyond_i64_keeps_digits() {
        let mut json_args = args(&[]);
        json_args.json = true;
        let input = "[18446744073709551615]";
        let renames = run_normalize(&json_args, input.as_bytes()).expect("normalize");
        assert_eq!(renames[0].original, "18446744073709551615");
        assert_eq!(renames[0].identifier, "_18446744073709551615");
    }

    #[test]
    fn test_json_null_is_an_error() {
        let mut json_args = args(&[]);
        json_args.json = true;
        let err = run_normalize(&json_args, "[\"a\", null]".as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("label at index 1 is empty or null"));
    }

    #[test]
    fn test_forbidden_names() {
        let mut forbid_args = args(&["cartodb_id"]);
        forbid_args.forbid = vec!["cartodb_id".to_string()];
        let renames = run_normalize(&forbid_args, std::io::empty()).expect("normalize");
        assert_eq!(renames[0].identifier, "cartodb_id_1");
    }

    #[test]
    fn test_invalid_max_length() {
        let mut short = args(&["a"]);
        short.max_length = 1;
        let err = run_normalize(&short, std::io::empty()).unwrap_err();
        assert!(format!("{err:#}").contains("invalid --max-length"));
    }

    #[test]
    fn test_short_max_length_runs_out_of_suffixes() {
        let mut short = args(&[]);
        short.labels = vec!["a".to_string(); 1001];
        short.max_length = 5;
        let err = run_normalize(&short, std::io::empty()).unwrap_err();
        assert!(
            format!("{err:#}").contains("no free collision suffix for 'a' within 5 characters")
        );
    }

    #[test]
    fn test_check_reports_problems() {
        let outcomes = run_check(&CheckArgs {
            names: vec!["field_2".to_string(), "2 Items".to_string(), "all".to_string()],
        });
        assert!(outcomes[0].is_valid());
        assert_eq!(
            outcomes[1].problem.as_deref(),
            Some("invalid identifier '2 Items': must not start with a digit")
        );
        assert_eq!(
            outcomes[2].problem.as_deref(),
            Some("invalid identifier 'all': is a reserved word")
        );
    }
}
