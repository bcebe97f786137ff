use crate::address::ValidatedEndpoint;
use serde_derive::Serialize;

/// A single node option produced from the command line. Applied by the node at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigDirective {
    /// Connect to the remote core node at `scheme://host`.
    SetRemoteCore { scheme: String, host: String },
    /// Send state-related queries to the gRPC endpoint at `host`.
    SetGrpcEndpoint { host: String },
}

impl From<ValidatedEndpoint> for ConfigDirective {
    fn from(endpoint: ValidatedEndpoint) -> Self {
        ConfigDirective::SetRemoteCore {
            scheme: endpoint.scheme,
            host: endpoint.host,
        }
    }
}

/// Anything that collects node options while the command line is being parsed.
pub trait OptionSink {
    fn add_options(&mut self, directive: ConfigDirective);
}

impl OptionSink for Vec<ConfigDirective> {
    fn add_options(&mut self, directive: ConfigDirective) {
        self.push(directive);
    }
}

/// The environment a node command builds up before starting the node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Env {
    options: Vec<ConfigDirective>,
}

impl Env {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options in the order they were added.
    pub fn options(&self) -> &[ConfigDirective] {
        &self.options
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// The last remote core set on this environment, if any.
    pub fn remote_core(&self) -> Option<ValidatedEndpoint> {
        self.options.iter().rev().find_map(|option| match option {
            ConfigDirective::SetRemoteCore { scheme, host } => Some(ValidatedEndpoint {
                scheme: scheme.clone(),
                host: host.clone(),
            }),
            _ => None,
        })
    }

    pub fn grpc_endpoint(&self) -> Option<&str> {
        self.options.iter().rev().find_map(|option| match option {
            ConfigDirective::SetGrpcEndpoint { host } => Some(host.as_str()),
            _ => None,
        })
    }
}

impl OptionSink for Env {
    fn add_options(&mut self, directive: ConfigDirective) {
        log::info!("adding node option: {directive:?}");
        self.options.push(directive);
    }
}
