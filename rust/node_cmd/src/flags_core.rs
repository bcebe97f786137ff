use crate::address::{self, SCHEME_SEPARATOR};
use crate::env::{ConfigDirective, OptionSink};
use crate::errors::{CoreFlagError, CoreFlagResult};
use clap::Args;
use url::Url;

pub const CORE_REMOTE_FLAG: &str = "core.remote";
pub const CORE_GRPC_FLAG: &str = "core.grpc";

const CORE_REMOTE_HELP: &str = "Connect the node to the given remote core node. \
    Example: <protocol>://<ip>:<port>, tcp://127.0.0.1:26657";
const CORE_GRPC_HELP: &str = "Connect the node to the given core gRPC endpoint for state-related \
    queries. Example: <ip>:<port>, 127.0.0.1:9090";

/// Scheme put in front of a bare gRPC endpoint so it can be read as a URL. Never emitted.
const GRPC_PLACEHOLDER_SCHEME: &str = "grpc";

/// Static description of a command line flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSpec {
    pub name: &'static str,
    pub default: &'static str,
    pub help: &'static str,
}

/// The hardcoded set of core flags.
pub const CORE_FLAGS: [FlagSpec; 2] = [
    FlagSpec {
        name: CORE_REMOTE_FLAG,
        default: "",
        help: CORE_REMOTE_HELP,
    },
    FlagSpec {
        name: CORE_GRPC_FLAG,
        default: "",
        help: CORE_GRPC_HELP,
    },
];

/// Core flags, meant to be flattened into a node command. Defaults come from [`CORE_FLAGS`].
#[derive(Args, Clone, Debug, Default)]
pub struct CoreArgs {
    #[arg(
        long = CORE_REMOTE_FLAG,
        value_name = "ADDRESS",
        default_value = CORE_FLAGS[0].default,
        hide_default_value = true,
        help = CORE_REMOTE_HELP
    )]
    pub core_remote: String,

    #[arg(
        long = CORE_GRPC_FLAG,
        value_name = "ENDPOINT",
        default_value = CORE_FLAGS[1].default,
        hide_default_value = true,
        help = CORE_GRPC_HELP
    )]
    pub core_grpc: String,
}

impl CoreArgs {
    pub fn new(core_remote: &str, core_grpc: &str) -> Self {
        Self {
            core_remote: core_remote.to_string(),
            core_grpc: core_grpc.to_string(),
        }
    }

    /// Validates the flags and adds the resulting options to `sink`.
    pub fn parse_into(&self, sink: &mut impl OptionSink) -> CoreFlagResult<()> {
        parse_core_flags(&self.core_remote, &self.core_grpc, sink)
    }
}

/// Turns the raw `core.remote` and `core.grpc` values into node options.
///
/// An empty value means "not set" and adds nothing. A bad remote address fails with an error
/// naming the flag; a bad gRPC endpoint fails with the URL parser's own error. The remote address
/// is handled first, so nothing is added for the gRPC endpoint when it is rejected.
pub fn parse_core_flags(
    core_remote: &str,
    core_grpc: &str,
    sink: &mut impl OptionSink,
) -> CoreFlagResult<()> {
    if !core_remote.is_empty() {
        let endpoint = address::validate(core_remote)
            .map_err(|err| CoreFlagError::flag(CORE_REMOTE_FLAG, err))?;
        sink.add_options(endpoint.into());
    }

    if !core_grpc.is_empty() {
        let host = grpc_endpoint_host(core_grpc)?;
        sink.add_options(ConfigDirective::SetGrpcEndpoint { host });
    }

    Ok(())
}

/// Extracts `ip:port` from a gRPC endpoint. A scheme is optional and dropped when present.
///
/// Presence of a host or port is not checked.
pub fn grpc_endpoint_host(endpoint: &str) -> Result<String, url::ParseError> {
    let endpoint = address::strip_ignored(endpoint);
    let endpoint = if address::raw_host(&endpoint).is_some() {
        endpoint
    } else {
        format!("{GRPC_PLACEHOLDER_SCHEME}{SCHEME_SEPARATOR}{endpoint}")
    };

    Url::parse(&endpoint)?;

    let host = address::raw_host(&endpoint).unwrap_or_default();
    if host.is_empty() {
        log::warn!("no host found in gRPC endpoint {endpoint:?}");
    }

    Ok(host.to_string())
}
