//! Tests for serializing proxy options back into arguments.

use std::path::Path;

use serde_json::json;

use super::ConfigError;
use super::cli::map_args_in;
use super::defaults;
use super::options::ProxyOptions;
use super::stringify::{stringify_proxy_options, stringify_value};

fn remap(line: &str) -> ProxyOptions {
    map_args_in(line.split(' '), Path::new("/")).unwrap().proxy_options
}

mod output {
    use super::*;

    #[test]
    fn entries_follow_key_order() {
        let options = ProxyOptions::new()
            .with("serverPort", 8388)
            .with("serverAddr", "1.2.3.4")
            .with("password", "secret");

        assert_eq!(
            stringify_proxy_options(&options).unwrap(),
            "-p 8388 -s 1.2.3.4 -k secret"
        );
    }

    #[test]
    fn long_only_options_use_two_dashes() {
        let options = ProxyOptions::new()
            .with("pacServerPort", 8090)
            .with("level", 3)
            .with("logPath", "/var/log/proxy.log");

        assert_eq!(
            stringify_proxy_options(&options).unwrap(),
            "--pac_port 8090 --level 3 --log_path /var/log/proxy.log"
        );
    }

    #[test]
    fn private_and_derived_keys_are_skipped() {
        let options = ProxyOptions::new()
            .with("localAddrIPv6", "::1")
            .with("serverAddr", "host")
            .with("serverAddrIPv6", "::1")
            .with("_recordMemoryUsage", true);

        assert_eq!(stringify_proxy_options(&options).unwrap(), "-s host");
    }

    #[test]
    fn empty_options_give_empty_line() {
        assert_eq!(stringify_proxy_options(&ProxyOptions::new()).unwrap(), "");
    }

    #[test]
    fn unknown_option_name_is_an_error() {
        let options = ProxyOptions::new()
            .with("serverAddr", "host")
            .with("plugin", "obfs");

        let result = stringify_proxy_options(&options);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidOptionName(ref name)) if name == "plugin"
        ));
    }

    #[test]
    fn general_option_names_are_not_proxy_options() {
        let options = ProxyOptions::new().with("help", true);

        assert!(matches!(
            stringify_proxy_options(&options),
            Err(ConfigError::InvalidOptionName(_))
        ));
    }

    #[test]
    fn non_object_value_is_an_invalid_type() {
        let result = stringify_value(json!("serverAddr"));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidType {
                found: "string",
                ..
            })
        ));
    }

    #[test]
    fn object_value_is_stringified() {
        let result = stringify_value(json!({ "serverAddr": "host", "serverPort": 1 }));
        assert_eq!(result.unwrap(), "-s host -p 1");
    }
}

mod round_trip {
    use super::*;

    #[test]
    fn settable_options_survive_a_round_trip() {
        let options = ProxyOptions::new()
            .with("configFilePath", "/etc/proxy.json")
            .with("serverAddr", "example.com")
            .with("serverPort", 8388)
            .with("pacServerPort", 8090)
            .with("localAddr", "127.0.0.1")
            .with("localPort", 1080)
            .with("password", "secret")
            .with("method", "aes-256-cfb")
            .with("timeout", 600)
            .with("level", 2)
            .with("logPath", "/var/log/proxy.log");

        let line = stringify_proxy_options(&options).unwrap();

        assert_eq!(remap(&line), options);
    }

    #[test]
    fn numeric_looking_strings_stay_strings() {
        let options = ProxyOptions::new()
            .with("serverAddr", "1e3")
            .with("password", "0042")
            .with("method", "true")
            .with("serverPort", 8388);

        let line = stringify_proxy_options(&options).unwrap();

        assert_eq!(line, "-s 1e3 -k 0042 -m true -p 8388");
        assert_eq!(remap(&line), options);
    }

    #[test]
    fn value_with_a_space_does_not_survive() {
        let options = ProxyOptions::new().with("method", "a b");

        let remapped = remap(&stringify_proxy_options(&options).unwrap());

        assert_eq!(remapped.get("method"), Some(&json!("a")));
    }

    #[test]
    fn defaults_round_trip_without_private_keys() {
        let options = defaults::proxy_options();
        let line = stringify_proxy_options(&options).unwrap();
        let remapped = remap(&line);

        assert!(!remapped.contains_key("localAddrIPv6"));
        assert!(!remapped.contains_key("serverAddrIPv6"));
        assert!(!remapped.contains_key("_recordMemoryUsage"));
        for (key, value) in remapped.iter() {
            assert_eq!(options.get(key), Some(value), "mismatch for {key}");
        }
        assert_eq!(remapped.len(), options.len() - 3);
    }
}
