/// Log tags identify the subsystem a message comes from
///
/// Each tag has a debug key used by `--debug-<key>` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogTag {
    System,
    Config,
    Inputs,
    Proxy,
    Rpc,
    Prices,
    Wallet,
    Report,
}

impl LogTag {
    /// Key used in `--debug-<key>` flags and `enabled_debug_tags`
    pub fn to_debug_key(&self) -> &'static str {
        match self {
            LogTag::System => "system",
            LogTag::Config => "config",
            LogTag::Inputs => "inputs",
            LogTag::Proxy => "proxy",
            LogTag::Rpc => "rpc",
            LogTag::Prices => "prices",
            LogTag::Wallet => "wallet",
            LogTag::Report => "report",
        }
    }

    /// Uppercase label without colors (file output)
    pub fn to_plain_string(&self) -> &'static str {
        match self {
            LogTag::System => "SYSTEM",
            LogTag::Config => "CONFIG",
            LogTag::Inputs => "INPUTS",
            LogTag::Proxy => "PROXY",
            LogTag::Rpc => "RPC",
            LogTag::Prices => "PRICES",
            LogTag::Wallet => "WALLET",
            LogTag::Report => "REPORT",
        }
    }
}

impl std::fmt::Display for LogTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_plain_string())
    }
}
