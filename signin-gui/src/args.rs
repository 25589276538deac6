//! Command-line argument parsing.

use std::{error::Error, fmt::Display, path::PathBuf, process, str::FromStr};

use signin::Compatibility;

use crate::{dir::SigninDirectory, gui::Config};

/// Parsed command-line argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    DatadirPath(SigninDirectory),
    Compatibility(Compatibility),
}

/// Parse command-line arguments.
///
/// # Arguments
/// - `args`: Command-line arguments (including program name at args[0])
/// - `version`: Version to display for --version flag
pub fn parse_args(args: Vec<String>, version: impl Display) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    let app_name = args
        .first()
        .and_then(|a| std::path::Path::new(a).file_name())
        .and_then(|s| s.to_str())
        .unwrap_or("signin-gui");

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", version);
        process::exit(0);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: {app_name} [OPTIONS]

Options:
    --datadir <PATH>    Path of signin datadir
    -v, --version       Display {app_name} version
    -h, --help          Print help
    --legacy            Keep the historical messages and login check (default)
    --corrected         Use field specific messages and the corrected login check
        "#
        );
        process::exit(0);
    }

    for (i, arg) in args.iter().enumerate() {
        if arg == "--datadir" {
            if let Some(a) = args.get(i + 1) {
                if a.starts_with("--") {
                    return Err(format!("missing arg to --datadir, found option {}", a).into());
                }
                res.push(Arg::DatadirPath(SigninDirectory::new(PathBuf::from(a))));
            } else {
                return Err("missing arg to --datadir".into());
            }
        } else if arg.starts_with("--") {
            let compatibility = Compatibility::from_str(arg.trim_start_matches("--"))?;
            res.push(Arg::Compatibility(compatibility));
        }
    }

    Ok(res)
}

/// Convert parsed command-line arguments to a Config.
pub fn args_to_config(args: &[Arg]) -> Result<Config, Box<dyn Error>> {
    match args {
        [] => Ok(Config::new(SigninDirectory::new_default()?, None)),
        [Arg::Compatibility(compatibility)] => Ok(Config::new(
            SigninDirectory::new_default()?,
            Some(*compatibility),
        )),
        [Arg::DatadirPath(datadir_path)] => Ok(Config::new(datadir_path.clone(), None)),
        [Arg::DatadirPath(datadir_path), Arg::Compatibility(compatibility)]
        | [Arg::Compatibility(compatibility), Arg::DatadirPath(datadir_path)] => {
            Ok(Config::new(datadir_path.clone(), Some(*compatibility)))
        }
        _ => Err("Unknown args combination".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERSION: &str = "1.0.0";

    fn args(line: &str) -> Vec<String> {
        line.split(' ').map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        assert!(parse_args(args("app --meth"), VERSION).is_err());
        assert!(parse_args(args("app --datadir"), VERSION).is_err());
        assert!(parse_args(args("app --datadir --corrected"), VERSION).is_err());
        assert_eq!(Some(vec![]), parse_args(args("app"), VERSION).ok());
        assert_eq!(
            Some(vec![Arg::Compatibility(Compatibility::Corrected)]),
            parse_args(args("app --corrected"), VERSION).ok()
        );
        assert_eq!(
            Some(vec![
                Arg::DatadirPath(SigninDirectory::new(PathBuf::from("hello"))),
                Arg::Compatibility(Compatibility::Legacy)
            ]),
            parse_args(args("app --datadir hello --legacy"), VERSION).ok()
        );
        assert_eq!(
            Some(vec![
                Arg::Compatibility(Compatibility::Corrected),
                Arg::DatadirPath(SigninDirectory::new(PathBuf::from("hello"))),
            ]),
            parse_args(args("app --corrected --datadir hello"), VERSION).ok()
        );
    }

    #[test]
    fn test_args_to_config() {
        let datadir = SigninDirectory::new(PathBuf::from("hello"));
        let config = args_to_config(&[
            Arg::Compatibility(Compatibility::Corrected),
            Arg::DatadirPath(datadir.clone()),
        ])
        .unwrap();
        assert_eq!(config.signin_directory, datadir);
        assert_eq!(config.compatibility, Some(Compatibility::Corrected));

        let config = args_to_config(&[Arg::DatadirPath(datadir.clone())]).unwrap();
        assert_eq!(config.compatibility, None);

        assert!(args_to_config(&[
            Arg::DatadirPath(datadir.clone()),
            Arg::DatadirPath(datadir)
        ])
        .is_err());
    }
}
