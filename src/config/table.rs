//! The argument table.
//!
//! Every command-line flag the program understands is described by exactly one
//! [`ArgSpec`] in [`ARGUMENTS`]. The mapper, the unknown-flag check, the help
//! text and the stringifier all read from this list.

use super::error::field;

/// Which option bag a flag writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// Proxy connection settings, merged with defaults and the config file.
    Proxy,
    /// Settings for the invocation itself (help, daemon command, PAC update).
    General,
}

/// How a flag's raw text is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgValue {
    /// Kept verbatim as a string.
    Str,
    /// Numeric text becomes a JSON number; anything else stays a string.
    Int,
    /// `true`/`false` become booleans; anything else stays a string.
    Bool,
}

/// A single command-line argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgSpec {
    /// One-character flag (`-s`), if any.
    pub short: Option<char>,
    /// Long flag without the leading dashes (`--pac_port`).
    pub long: &'static str,
    /// Option name the value is stored under.
    pub canonical: &'static str,
    /// Target option bag.
    pub kind: ArgKind,
    /// Value typing for proxy options.
    pub value: ArgValue,
    /// Help line.
    pub help: &'static str,
    /// Hidden from `--help`.
    pub hidden: bool,
}

impl ArgSpec {
    const fn proxy(
        short: Option<char>,
        long: &'static str,
        canonical: &'static str,
        help: &'static str,
    ) -> Self {
        Self {
            short,
            long,
            canonical,
            kind: ArgKind::Proxy,
            value: ArgValue::Str,
            help,
            hidden: false,
        }
    }

    const fn general(
        short: Option<char>,
        long: &'static str,
        canonical: &'static str,
        help: &'static str,
    ) -> Self {
        Self {
            short,
            long,
            canonical,
            kind: ArgKind::General,
            value: ArgValue::Str,
            help,
            hidden: false,
        }
    }

    const fn int(mut self) -> Self {
        self.value = ArgValue::Int;
        self
    }

    const fn boolean(mut self) -> Self {
        self.value = ArgValue::Bool;
        self
    }

    const fn private(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Returns the flag as it is written on the command line, preferring the
    /// short form (`-s`, `--pac_port`).
    #[must_use]
    pub fn prefixed_flag(&self) -> String {
        self.short
            .map_or_else(|| prefixed(self.long), |short| format!("-{short}"))
    }
}

/// Argument surface, in lookup order.
pub const ARGUMENTS: &[ArgSpec] = &[
    ArgSpec::proxy(
        Some('c'),
        "configFilePath",
        field::CONFIG_FILE_PATH,
        "Path to a JSON config file",
    ),
    ArgSpec::proxy(
        Some('s'),
        "serverAddr",
        field::SERVER_ADDR,
        "Server address (IPv4, IPv6 or hostname)",
    ),
    ArgSpec::proxy(Some('p'), "serverPort", field::SERVER_PORT, "Server port").int(),
    ArgSpec::proxy(None, "pac_port", field::PAC_SERVER_PORT, "PAC file server port").int(),
    ArgSpec::proxy(Some('l'), "localAddr", field::LOCAL_ADDR, "Local listen address"),
    ArgSpec::proxy(Some('b'), "localPort", field::LOCAL_PORT, "Local listen port").int(),
    ArgSpec::proxy(Some('k'), "password", field::PASSWORD, "Password"),
    ArgSpec::proxy(Some('m'), "method", field::METHOD, "Encryption method"),
    ArgSpec::proxy(
        Some('t'),
        "timeout",
        field::TIMEOUT,
        "Connection timeout in seconds",
    )
    .int(),
    ArgSpec::proxy(
        None,
        "level",
        field::LEVEL,
        "Log level (0-4 or error|warn|info|debug|trace)",
    )
    .int(),
    ArgSpec::proxy(None, "log_path", field::LOG_PATH, "Log file path"),
    // private
    ArgSpec::proxy(None, "mem", field::RECORD_MEMORY_USAGE, "Record memory usage")
        .boolean()
        .private(),
    ArgSpec::general(Some('h'), "help", "help", "Print help"),
    ArgSpec::general(
        Some('d'),
        "daemon",
        "daemon",
        "Daemon command: start, stop or restart",
    ),
    ArgSpec::general(
        None,
        "pac_update_gfwlist",
        "pacUpdateGFWList",
        "Update the PAC GFW list",
    ),
];

/// Option names that are legal in [`ProxyOptions`](super::ProxyOptions) but
/// have no command-line flag. The stringifier skips them.
pub const EXTRA_PROXY_KEYS: &[&str] = &[
    field::LOCAL_ADDR_IPV6,
    field::SERVER_ADDR_IPV6,
    field::RECORD_MEMORY_USAGE,
];

/// Finds the argument selected by `--name`.
#[must_use]
pub fn lookup_long(name: &str) -> Option<&'static ArgSpec> {
    ARGUMENTS.iter().find(|spec| spec.long == name)
}

/// Finds the argument selected by `-c`.
#[must_use]
pub fn lookup_short(c: char) -> Option<&'static ArgSpec> {
    ARGUMENTS.iter().find(|spec| spec.short == Some(c))
}

/// Finds the proxy argument that stores into `canonical`.
#[must_use]
pub fn lookup_proxy_option(canonical: &str) -> Option<&'static ArgSpec> {
    ARGUMENTS
        .iter()
        .find(|spec| spec.kind == ArgKind::Proxy && spec.canonical == canonical)
}

/// Adds the dash prefix to a bare flag name: one dash for single characters,
/// two otherwise.
#[must_use]
pub fn prefixed(name: &str) -> String {
    if name.chars().count() == 1 {
        format!("-{name}")
    } else {
        format!("--{name}")
    }
}
