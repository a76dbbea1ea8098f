#[cfg(test)]
mod tests {
    use crate::cli::validation::{parse_extension, parse_library_root, parse_wrapper_symbol};
    use crate::cli::{Cli, Command};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_parse_wrapper_symbol_valid_identifiers() {
        assert_eq!(parse_wrapper_symbol("FC"), Ok("FC".to_string()));
        assert_eq!(parse_wrapper_symbol("VFC"), Ok("VFC".to_string()));
        assert_eq!(
            parse_wrapper_symbol("FunctionComponent"),
            Ok("FunctionComponent".to_string())
        );
        assert_eq!(parse_wrapper_symbol("$FC_2"), Ok("$FC_2".to_string()));
    }

    #[test]
    fn test_parse_wrapper_symbol_invalid() {
        assert!(parse_wrapper_symbol("React.FC").is_err());
        assert!(parse_wrapper_symbol("1FC").is_err());
        assert!(parse_wrapper_symbol("my-fc").is_err());
        assert!(parse_wrapper_symbol("F C").is_err());
    }

    #[test]
    fn test_parse_wrapper_symbol_empty() {
        let err = parse_wrapper_symbol("").unwrap_err();
        assert_eq!(err, "Wrapper name cannot be empty");
    }

    #[test]
    fn test_parse_extension() {
        assert_eq!(parse_extension("tsx"), Ok("tsx".to_string()));
        assert_eq!(parse_extension(".ts"), Ok("ts".to_string()));
        assert_eq!(parse_extension("JSX"), Ok("jsx".to_string()));
        assert!(parse_extension(".").is_err());
        assert!(parse_extension("d.ts").is_err());
    }

    #[test]
    fn test_parse_library_root() {
        assert_eq!(
            parse_library_root("@mui/material"),
            Ok("@mui/material".to_string())
        );
        assert!(parse_library_root("  ").is_err());

        let err = parse_library_root("@mui/material/").unwrap_err();
        assert!(err.contains("use '@mui/material'"));
    }

    #[test]
    fn test_fc_defaults() {
        let cli = Cli::try_parse_from(["fob-codemod", "fc"]).unwrap();
        assert!(!cli.verbose);
        assert!(!cli.quiet);

        match cli.command {
            Command::Fc(args) => {
                assert_eq!(args.run.paths, vec![PathBuf::from(".")]);
                assert_eq!(args.run.extensions, vec!["ts", "tsx", "js", "jsx"]);
                assert!(!args.run.dry_run);
                assert!(!args.run.check);
                assert!(!args.run.print);
                assert!(args.suffix.is_none());
                assert!(args.wrapper_symbol.is_none());
                assert!(args.wrapper_module.is_none());
            }
            _ => panic!("Expected fc command"),
        }
    }

    #[test]
    fn test_fc_with_options() {
        let cli = Cli::try_parse_from([
            "fob-codemod",
            "fc",
            "src",
            "lib/Button.tsx",
            "--suffix",
            "Properties",
            "--wrapper",
            "VFC",
            "--wrapper-module",
            "preact/compat",
            "--extensions",
            ".tsx,ts",
        ])
        .unwrap();

        match cli.command {
            Command::Fc(args) => {
                assert_eq!(
                    args.run.paths,
                    vec![PathBuf::from("src"), PathBuf::from("lib/Button.tsx")]
                );
                assert_eq!(args.run.extensions, vec!["tsx", "ts"]);
                assert_eq!(args.suffix.as_deref(), Some("Properties"));
                assert_eq!(args.wrapper_symbol.as_deref(), Some("VFC"));
                assert_eq!(args.wrapper_module.as_deref(), Some("preact/compat"));
            }
            _ => panic!("Expected fc command"),
        }
    }

    #[test]
    fn test_fc_rejects_qualified_wrapper() {
        let result = Cli::try_parse_from(["fob-codemod", "fc", "--wrapper", "React.FC"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_imports_repeated_library() {
        let cli = Cli::try_parse_from([
            "fob-codemod",
            "imports",
            "--library",
            "@mui/material",
            "--library",
            "@mui/lab",
            "--check",
        ])
        .unwrap();

        match cli.command {
            Command::Imports(args) => {
                assert_eq!(args.libraries, vec!["@mui/material", "@mui/lab"]);
                assert!(args.run.check);
            }
            _ => panic!("Expected imports command"),
        }
    }

    #[test]
    fn test_modes_conflict() {
        assert!(Cli::try_parse_from(["fob-codemod", "fc", "--dry-run", "--check"]).is_err());
        assert!(Cli::try_parse_from(["fob-codemod", "fc", "--check", "--print"]).is_err());
        assert!(Cli::try_parse_from(["fob-codemod", "imports", "--dry-run", "--print"]).is_err());
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        let result = Cli::try_parse_from(["fob-codemod", "--verbose", "--quiet", "fc"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["fob-codemod", "imports", "-v", "--no-color"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.no_color);
    }

    #[test]
    fn test_config_flag() {
        let cli =
            Cli::try_parse_from(["fob-codemod", "fc", "--config", "codemod.json"]).unwrap();
        match cli.command {
            Command::Fc(args) => {
                assert_eq!(args.run.config, Some(PathBuf::from("codemod.json")));
            }
            _ => panic!("Expected fc command"),
        }
    }

    #[test]
    fn test_missing_subcommand() {
        assert!(Cli::try_parse_from(["fob-codemod"]).is_err());
    }
}
