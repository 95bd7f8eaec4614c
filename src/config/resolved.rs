//! Merged configuration from defaults, config file and command line.

use std::fmt;
use std::path::Path;

use super::ConfigError;
use super::cli::{MappedArgs, map_args_in};
use super::defaults;
use super::error::field;
use super::file::FileConfig;
use super::options::{GeneralOptions, InvalidOption, ProxyOptions};

/// Configuration after all three layers have been merged.
///
/// `invalid_option` is a soft diagnostic: the config is still fully merged
/// when it is set, and callers decide whether to abort.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedConfig {
    /// Help, daemon command and PAC update flag
    pub general_options: GeneralOptions,

    /// Merged proxy options
    pub proxy_options: ProxyOptions,

    /// First unknown flag or invalid daemon command on the command line
    pub invalid_option: Option<InvalidOption>,
}

impl fmt::Display for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let daemon = self
            .general_options
            .daemon
            .map_or("none", |command| command.as_str());

        write!(
            f,
            "Config {{ server: {}:{}, local: {}:{}, method: {}, daemon: {}, options: {} }}",
            self.proxy_options.server_addr().unwrap_or("-"),
            display_or_dash(self.proxy_options.server_port()),
            self.proxy_options.get_str(field::LOCAL_ADDR).unwrap_or("-"),
            display_or_dash(self.proxy_options.local_port()),
            self.proxy_options.get_str(field::METHOD).unwrap_or("-"),
            daemon,
            self.proxy_options.len(),
        )
    }
}

fn display_or_dash(value: Option<u64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

impl ResolvedConfig {
    /// Merges defaults, optional file options and mapped arguments.
    ///
    /// Each key takes the command-line value if present, else the file value,
    /// else the default. Values replace each other whole; nested objects are
    /// not merged.
    #[must_use]
    pub fn from_raw(args: MappedArgs, file: Option<ProxyOptions>) -> Self {
        let mut proxy_options = defaults::proxy_options();

        if let Some(file) = file {
            proxy_options.merge(file);
        }
        proxy_options.merge(args.proxy_options);

        Self {
            general_options: args.general_options,
            proxy_options,
            invalid_option: args.invalid_option,
        }
    }

    /// Loads the config file named by `configFilePath` (if any) and merges.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file is missing, unreadable or not a
    /// JSON object.
    pub fn from_args(args: MappedArgs, cwd: &Path) -> Result<Self, ConfigError> {
        let file = match args.proxy_options.config_file_path() {
            Some(path) => Some(FileConfig::load(Path::new(&path), cwd)?.options),
            None => None,
        };

        Ok(Self::from_raw(args, file))
    }

    /// Maps command-line tokens and merges all layers, using the process
    /// working directory for relative paths.
    ///
    /// The server address is left as given; see
    /// [`resolve_server_addr`](crate::resolve::resolve_server_addr).
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory is unavailable or the config
    /// file cannot be loaded.
    pub fn load<I, T>(tokens: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let cwd = std::env::current_dir().map_err(ConfigError::CurrentDir)?;
        Self::load_in(tokens, &cwd)
    }

    /// Same as [`load`](Self::load) with an explicit working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be loaded.
    pub fn load_in<I, T>(tokens: I, cwd: &Path) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let args = map_args_in(tokens, cwd)?;
        Self::from_args(args, cwd)
    }

    /// Returns true if no invalid option was recorded.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.invalid_option.is_none()
    }
}
