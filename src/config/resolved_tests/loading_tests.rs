//! Tests for loading the config file named on the command line.

use std::fs;
use std::io::Write;

use tempfile::{NamedTempFile, tempdir};

use super::*;

mod from_args {
    use super::*;

    #[test]
    fn config_file_from_cli_is_merged() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "serverAddr": "file.example.com", "timeout": 30 }}"#).unwrap();
        let path = file.path().to_str().unwrap();

        let config = ResolvedConfig::from_args(args(&["-c", path, "-t", "60"]), Path::new("/"))
            .unwrap();

        assert_eq!(config.proxy_options.server_addr(), Some("file.example.com"));
        assert_eq!(config.proxy_options.get("timeout"), Some(&json!(60)));
        assert_eq!(config.proxy_options.get("configFilePath"), Some(&json!(path)));
    }

    #[test]
    fn without_config_file_only_defaults_and_cli_apply() {
        let config = ResolvedConfig::from_args(args(&["-k", "pw"]), Path::new("/")).unwrap();

        let mut expected = defaults::proxy_options();
        expected.insert("password", "pw");
        assert_eq!(config.proxy_options, expected);
    }

    #[test]
    fn missing_config_file_is_fatal() {
        let dir = tempdir().unwrap();

        let result = ResolvedConfig::from_args(args(&["-c", "nope.json"]), dir.path());

        let Err(ConfigError::FileNotFound { path }) = result else {
            panic!("expected FileNotFound");
        };
        assert_eq!(path, dir.path().join("nope.json"));
    }

    #[test]
    fn malformed_config_file_is_fatal() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("bad.json"), "{ serverAddr: }").unwrap();

        let result = ResolvedConfig::from_args(args(&["-c", "bad.json"]), dir.path());

        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn invalid_option_does_not_stop_file_loading() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("c.json"), r#"{ "method": "chacha20" }"#).unwrap();

        let config =
            ResolvedConfig::from_args(args(&["--bogus", "-c", "c.json"]), dir.path()).unwrap();

        assert_eq!(config.proxy_options.get("method"), Some(&json!("chacha20")));
        assert!(!config.is_valid());
    }
}

mod load_in {
    use super::*;

    #[test]
    fn relative_config_path_uses_given_cwd() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("etc")).unwrap();
        fs::write(dir.path().join("etc/proxy.json"), r#"{ "localPort": 1090 }"#).unwrap();

        let config = ResolvedConfig::load_in(["-c", "etc/proxy.json"], dir.path()).unwrap();

        assert_eq!(config.proxy_options.local_port(), Some(1090));
    }

    #[test]
    fn missing_relative_config_reports_absolute_path() {
        let dir = tempdir().unwrap();

        let error = ResolvedConfig::load_in(["-c", "./conf/missing.json"], dir.path()).unwrap_err();

        let expected = dir.path().join("conf").join("missing.json");
        assert_eq!(
            error.to_string(),
            format!("failed to find config file in: {}", expected.display())
        );
    }
}
