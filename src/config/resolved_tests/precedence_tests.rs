//! Tests for default < file < command-line precedence.

use super::*;

mod defaults_only {
    use super::*;

    #[test]
    fn no_arguments_give_the_defaults() {
        let config = ResolvedConfig::from_raw(args(&[]), None);

        assert_eq!(config.proxy_options, defaults::proxy_options());
        assert!(config.is_valid());
    }

    #[test]
    fn defaults_are_fresh_per_call() {
        let mut first = defaults::proxy_options();
        first.insert("serverAddr", "changed");

        assert_eq!(
            defaults::proxy_options().server_addr(),
            Some(defaults::SERVER_ADDR)
        );
    }
}

mod file_over_defaults {
    use super::*;

    #[test]
    fn file_value_replaces_default() {
        let config = ResolvedConfig::from_raw(args(&[]), Some(file(r#"{ "serverPort": 9000 }"#)));

        assert_eq!(config.proxy_options.server_port(), Some(9000));
        assert_eq!(
            config.proxy_options.local_port(),
            Some(u64::from(defaults::LOCAL_PORT))
        );
    }

    #[test]
    fn unknown_file_keys_are_kept() {
        let config =
            ResolvedConfig::from_raw(args(&[]), Some(file(r#"{ "plugin": "obfs-local" }"#)));

        assert_eq!(config.proxy_options.get("plugin"), Some(&json!("obfs-local")));
    }

    #[test]
    fn nested_values_replace_whole() {
        let base = ResolvedConfig::from_raw(
            args(&[]),
            Some(file(r#"{ "extra": { "a": 1, "b": 2 } }"#)),
        );
        let mut layered = base.proxy_options.clone();
        layered.merge(file(r#"{ "extra": { "a": 3 } }"#));

        assert_eq!(layered.get("extra"), Some(&json!({ "a": 3 })));
    }
}

mod cli_over_everything {
    use super::*;

    #[test]
    fn cli_value_replaces_file_and_default() {
        let config = ResolvedConfig::from_raw(
            args(&["-p", "7000"]),
            Some(file(r#"{ "serverPort": 9000 }"#)),
        );

        assert_eq!(config.proxy_options.server_port(), Some(7000));
    }

    #[test]
    fn three_tier_override_per_key() {
        let config = ResolvedConfig::from_raw(
            args(&["-s", "cli.example.com"]),
            Some(file(
                r#"{ "serverAddr": "file.example.com", "password": "from-file" }"#,
            )),
        );
        let options = &config.proxy_options;

        assert_eq!(options.server_addr(), Some("cli.example.com"));
        assert_eq!(options.get("password"), Some(&json!("from-file")));
        assert_eq!(options.get("method"), Some(&json!(defaults::METHOD)));
    }

    #[test]
    fn override_law_holds_for_every_settable_key() {
        let keys = [
            "serverAddr",
            "serverPort",
            "pacServerPort",
            "localAddr",
            "localPort",
            "password",
            "method",
            "timeout",
            "level",
        ];
        let file_options: ProxyOptions = keys
            .iter()
            .map(|key| (*key, json!(format!("file-{key}"))))
            .collect();

        for (i, key) in keys.iter().enumerate() {
            let flag = lookup_proxy_option(key).unwrap().prefixed_flag();
            let cli_value = format!("cli-{i}");
            let config = ResolvedConfig::from_raw(
                args(&[flag.as_str(), cli_value.as_str()]),
                Some(file_options.clone()),
            );

            for other in keys {
                let expected = if other == *key {
                    json!(cli_value)
                } else {
                    json!(format!("file-{other}"))
                };
                assert_eq!(config.proxy_options.get(other), Some(&expected));
            }
        }
    }

    #[test]
    fn key_order_is_defaults_then_new_file_keys_then_new_cli_keys() {
        let config = ResolvedConfig::from_raw(
            args(&["--log_path", "/tmp/p.log", "-s", "host"]),
            Some(file(r#"{ "plugin": "x", "serverPort": 1 }"#)),
        );
        let keys: Vec<&str> = config.proxy_options.iter().map(|(k, _)| k.as_str()).collect();

        assert_eq!(keys.first(), Some(&"serverAddr"));
        let plugin = keys.iter().position(|k| *k == "plugin").unwrap();
        let log_path = keys.iter().position(|k| *k == "logPath").unwrap();
        assert_eq!(plugin, defaults::proxy_options().len());
        assert_eq!(log_path, plugin + 1);
    }
}

mod diagnostics {
    use super::*;

    #[test]
    fn invalid_option_is_carried_into_the_config() {
        let config = ResolvedConfig::from_raw(
            args(&["-s", "1.2.3.4", "-p", "8388", "--bogus_flag"]),
            None,
        );

        assert!(!config.is_valid());
        assert_eq!(config.invalid_option.unwrap().to_string(), "--bogus_flag");
        assert_eq!(config.proxy_options.server_addr(), Some("1.2.3.4"));
        assert_eq!(config.proxy_options.server_port(), Some(8388));
    }

    #[test]
    fn general_options_are_carried_into_the_config() {
        let config = ResolvedConfig::from_raw(args(&["-d", "stop", "--pac_update_gfwlist"]), None);

        assert_eq!(
            config.general_options.daemon,
            Some(DaemonCommand::Stop)
        );
        assert!(config.general_options.pac_update_gfwlist);
    }

    #[test]
    fn display_summarizes_the_config() {
        let config = ResolvedConfig::from_raw(args(&["-s", "1.2.3.4", "-d", "start"]), None);
        let text = config.to_string();

        assert!(text.contains("server: 1.2.3.4:8083"));
        assert!(text.contains("daemon: start"));
    }
}
