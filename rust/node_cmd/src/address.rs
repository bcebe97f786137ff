use crate::errors::{AddressError, HostPortError};
use serde_derive::Serialize;
use std::fmt;
use url::Url;

pub const SCHEME_SEPARATOR: &str = "://";

/// A remote core address that passed validation. Both fields are kept exactly as they were
/// written on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedEndpoint {
    pub scheme: String,
    pub host: String,
}

impl fmt::Display for ValidatedEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}{}", self.scheme, SCHEME_SEPARATOR, self.host)
    }
}

/// Parses the address of the remote core node and checks that it carries a protocol and a
/// `host:port` pair, eg. `tcp://127.0.0.1:26657`.
///
/// Nothing is resolved or normalized: the returned scheme and host are slices of the input.
pub fn validate(address: &str) -> Result<ValidatedEndpoint, AddressError> {
    let address = strip_ignored(address);

    let url = match Url::parse(&address) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            return Err(AddressError::MissingSchemeOrHost)
        }
        Err(err) => {
            return match raw_parts(&address) {
                Some((_, host)) if !host.is_empty() => Err(AddressError::MalformedUri(err)),
                _ => Err(AddressError::MissingSchemeOrHost),
            }
        }
    };

    let (scheme, host) = match raw_parts(&address) {
        // a scheme like `localhost:` followed by anything but `//` has no authority
        Some((scheme, host)) if scheme.len() == url.scheme().len() => (scheme, host),
        _ => return Err(AddressError::MissingSchemeOrHost),
    };

    if scheme.is_empty() || host.is_empty() || url.host_str().map_or(true, str::is_empty) {
        return Err(AddressError::MissingSchemeOrHost);
    }

    split_host_port(host).map_err(|reason| AddressError::InvalidHostPort {
        host: host.to_string(),
        reason,
    })?;

    log::debug!("validated remote core address: scheme={scheme} host={host}");

    Ok(ValidatedEndpoint {
        scheme: scheme.to_string(),
        host: host.to_string(),
    })
}

/// Returns the host component of `input` the way it was written: the authority between the
/// scheme separator and the path, without any `user:password@` prefix.
pub(crate) fn raw_host(input: &str) -> Option<&str> {
    raw_parts(input).map(|(_, host)| host)
}

/// URL schemes for which the parser also reads `\` as a path separator.
const SPECIAL_SCHEMES: [&str; 6] = ["http", "https", "ws", "wss", "ftp", "file"];

// `://` only separates a scheme when everything in front of it is one, so a `://` in a query
// or path is never taken for the authority.
fn raw_parts(input: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = input.split_once(SCHEME_SEPARATOR)?;
    if !is_scheme(scheme) {
        return None;
    }

    let special = SPECIAL_SCHEMES
        .iter()
        .any(|special| scheme.eq_ignore_ascii_case(special));
    let end = rest
        .find(|c: char| matches!(c, '/' | '?' | '#') || (special && c == '\\'))
        .unwrap_or(rest.len());
    let authority = &rest[..end];
    let host = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host)| host);

    Some((scheme, host))
}

fn is_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Drops what the URL parser ignores (surrounding spaces and control characters, embedded tabs
/// and newlines) so the raw slices line up with what was actually parsed.
pub(crate) fn strip_ignored(input: &str) -> String {
    input
        .trim_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .collect()
}

/// Splits `host:port` or `[host]:port` into its two parts.
pub fn split_host_port(hostport: &str) -> Result<(&str, &str), HostPortError> {
    let (host, port) = match hostport.strip_prefix('[') {
        Some(rest) => {
            let (host, after) = rest.split_once(']').ok_or(HostPortError::MissingBracket)?;
            let port = match after.strip_prefix(':') {
                Some(port) => port,
                None if after.is_empty() => return Err(HostPortError::MissingPort),
                None if after.starts_with(']') => return Err(HostPortError::UnexpectedBracket),
                None => return Err(HostPortError::MissingPort),
            };
            if port.contains(':') {
                return Err(HostPortError::TooManyColons);
            }
            (host, port)
        }
        None => {
            let (host, port) = hostport
                .rsplit_once(':')
                .ok_or(HostPortError::MissingPort)?;
            if host.contains(':') {
                return Err(HostPortError::TooManyColons);
            }
            (host, port)
        }
    };

    let is_bracket = |c: char| c == '[' || c == ']';
    if host.contains(is_bracket) || port.contains(is_bracket) {
        return Err(HostPortError::UnexpectedBracket);
    }
    if host.is_empty() {
        return Err(HostPortError::EmptyHost);
    }
    if !is_valid_port(port) {
        return Err(HostPortError::InvalidPort(port.to_string()));
    }

    Ok((host, port))
}

// Either a decimal port number or a service name like `grpc`.
fn is_valid_port(port: &str) -> bool {
    if port.is_empty() {
        return false;
    }
    if port.bytes().all(|b| b.is_ascii_digit()) {
        return port.parse::<u16>().is_ok();
    }
    port.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_plain_and_bracketed_pairs() {
        assert_eq!(split_host_port("127.0.0.1:26657"), Ok(("127.0.0.1", "26657")));
        assert_eq!(split_host_port("node.local:http"), Ok(("node.local", "http")));
        assert_eq!(split_host_port("[::1]:9090"), Ok(("::1", "9090")));
    }

    #[test]
    fn rejects_broken_pairs() {
        assert_eq!(split_host_port("nohost"), Err(HostPortError::MissingPort));
        assert_eq!(split_host_port("::1:9090"), Err(HostPortError::TooManyColons));
        assert_eq!(split_host_port("[::1:9090"), Err(HostPortError::MissingBracket));
        assert_eq!(split_host_port("[::1]"), Err(HostPortError::MissingPort));
        assert_eq!(split_host_port("[::1]]:1"), Err(HostPortError::UnexpectedBracket));
        assert_eq!(split_host_port("[::1]:1:2"), Err(HostPortError::TooManyColons));
        assert_eq!(split_host_port(":26657"), Err(HostPortError::EmptyHost));
        assert_eq!(
            split_host_port("host:"),
            Err(HostPortError::InvalidPort(String::new()))
        );
        assert_eq!(
            split_host_port("host:70000"),
            Err(HostPortError::InvalidPort("70000".to_string()))
        );
    }

    #[test]
    fn raw_host_skips_userinfo_and_path() {
        assert_eq!(raw_host("tcp://user:pw@10.0.0.1:1/a?b#c"), Some("10.0.0.1:1"));
        assert_eq!(raw_host("127.0.0.1:9090"), None);
    }

    #[test]
    fn raw_host_needs_a_scheme_before_the_separator() {
        assert_eq!(raw_host("localhost:9090/?next=http://other:1"), None);
        assert_eq!(raw_host("1.2.3.4://other:1"), None);
        assert_eq!(raw_host("grpc+tls://node:9090"), Some("node:9090"));
    }

    #[test]
    fn raw_host_ends_at_backslash_for_special_schemes() {
        assert_eq!(raw_host("http://h:1\\x"), Some("h:1"));
        assert_eq!(raw_host("HTTPS://h:1\\x"), Some("h:1"));
        assert_eq!(raw_host("tcp://h:1\\x"), Some("h:1\\x"));
    }

    #[test]
    fn strips_only_what_the_parser_ignores() {
        assert_eq!(strip_ignored("  tcp://h:1\n"), "tcp://h:1");
        assert_eq!(strip_ignored("tcp://h\t:1"), "tcp://h:1");
    }
}
