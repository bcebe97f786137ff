//! Core connection flags of a node command: validates the address of the remote core node and
//! the core gRPC endpoint, and turns them into node options.

pub mod address;
pub mod env;
pub mod errors;
pub mod flags_core;


pub use address::{split_host_port, validate, ValidatedEndpoint};
pub use env::{ConfigDirective, Env, OptionSink};
pub use errors::{AddressError, CoreFlagError, CoreFlagResult, HostPortError};
pub use flags_core::{
    grpc_endpoint_host, parse_core_flags, CoreArgs, FlagSpec, CORE_FLAGS, CORE_GRPC_FLAG,
    CORE_REMOTE_FLAG,
};
