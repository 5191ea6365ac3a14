//! Command-line argument parsing.

use std::{error::Error, fmt::Display, path::PathBuf, process};

/// Parsed command-line argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    ConfigPath(PathBuf),
}

/// Parse command-line arguments.
///
/// `args` includes the program name at `args[0]`.
pub fn parse_args(args: Vec<String>, version: impl Display) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    let app_name = args
        .first()
        .and_then(|a| std::path::Path::new(a).file_name())
        .and_then(|s| s.to_str())
        .unwrap_or("onboard");

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", version);
        process::exit(0);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: {app_name} [OPTIONS]

Options:
    --conf <PATH>       Path of the configuration file
    -v, --version       Display {app_name} version
    -h, --help          Print help
        "#
        );
        process::exit(0);
    }

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--conf" {
            if let Some(a) = iter.next() {
                res.push(Arg::ConfigPath(PathBuf::from(a)));
            } else {
                return Err("missing arg to --conf".into());
            }
        } else {
            return Err(format!("unknown argument '{}'", arg).into());
        }
    }

    Ok(res)
}

/// Path of the configuration file, if one was given.
pub fn config_path(args: &[Arg]) -> Result<Option<PathBuf>, Box<dyn Error>> {
    match args {
        [] => Ok(None),
        [Arg::ConfigPath(path)] => Ok(Some(path.clone())),
        _ => Err("Unknown args combination".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERSION: &str = "0.1.0";

    #[test]
    fn test_parse_args() {
        assert!(parse_args(vec!["onboard".into(), "--meth".into()], VERSION).is_err());
        assert!(parse_args(vec!["onboard".into(), "--conf".into()], VERSION).is_err());
        assert_eq!(
            parse_args(vec!["onboard".into()], VERSION).unwrap(),
            Vec::<Arg>::new()
        );
        assert_eq!(
            parse_args(
                vec!["onboard".into(), "--conf".into(), "conf.toml".into()],
                VERSION
            )
            .unwrap(),
            vec![Arg::ConfigPath(PathBuf::from("conf.toml"))]
        );
    }

    #[test]
    fn test_config_path() {
        assert_eq!(config_path(&[]).unwrap(), None);
        assert_eq!(
            config_path(&[Arg::ConfigPath(PathBuf::from("a.toml"))]).unwrap(),
            Some(PathBuf::from("a.toml"))
        );
        assert!(config_path(&[
            Arg::ConfigPath(PathBuf::from("a.toml")),
            Arg::ConfigPath(PathBuf::from("b.toml"))
        ])
        .is_err());
    }
}
