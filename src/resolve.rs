use std::io;
use std::net::SocketAddr;

use dns_lookup::{getaddrinfo, AddrFamily, AddrInfoHints, Protocol, SockType};
use tracing::debug;

use crate::error::ClientError;

/// Resolve `host`/`service` to the first IPv4 TCP endpoint.
/// No other candidate is ever tried.
pub fn resolve(host: &str, service: &str) -> Result<SocketAddr, ClientError> {
    let addr = first_ipv4(host, service).map_err(|reason| ClientError::Resolve {
        host: host.to_string(),
        service: service.to_string(),
        reason,
    })?;

    debug!("resolved {}:{} to {}", host, service, addr);
    Ok(addr)
}

/// getaddrinfo restricted to AF_INET / SOCK_STREAM / IPPROTO_TCP, so
/// service names from the platform's services database are honoured.
fn first_ipv4(host: &str, service: &str) -> Result<SocketAddr, String> {
    let hints = AddrInfoHints {
        socktype: SockType::Stream.into(),
        protocol: Protocol::TCP.into(),
        address: AddrFamily::Inet.into(),
        flags: 0,
    };

    let mut candidates = getaddrinfo(Some(host), Some(service), Some(hints))
        .map_err(|e| io::Error::from(e).to_string())?;

    match candidates.next() {
        Some(Ok(info)) if info.sockaddr.is_ipv4() => Ok(info.sockaddr),
        Some(Ok(_)) | None => Err("no IPv4 address returned".to_string()),
        Some(Err(e)) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExitClass;

    #[test]
    fn resolves_ipv4_literal() {
        let addr = resolve("127.0.0.1", "8080").unwrap();
        assert_eq!(addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn only_ipv4_candidates_are_used() {
        // An IPv6 literal has no AF_INET candidate.
        let err = resolve("::1", "80").unwrap_err();
        assert_eq!(err.exit_class(), ExitClass::NoHost);
    }

    #[test]
    fn unknown_service_is_a_resolution_failure() {
        let err = resolve("127.0.0.1", "no-such-service-here").unwrap_err();

        assert_eq!(err.exit_class(), ExitClass::NoHost);
        assert!(err.to_string().starts_with("getaddrinfo(127.0.0.1, no-such-service-here) failed: "));
    }

    #[test]
    fn lossily_decoded_host_does_not_resolve() {
        let err = resolve("h\u{fffd}", "80").unwrap_err();
        assert_eq!(err.exit_class(), ExitClass::NoHost);
    }

    #[test]
    fn reserved_domain_does_not_resolve() {
        let err = resolve("host.invalid", "80").unwrap_err();
        assert_eq!(err.exit_class(), ExitClass::NoHost);
    }

    #[test]
    fn service_names_are_looked_up() {
        // Minimal containers may ship without /etc/services.
        match resolve("127.0.0.1", "ssh") {
            Ok(addr) => assert_eq!(addr.port(), 22),
            Err(e) => assert_eq!(e.exit_class(), ExitClass::NoHost),
        }
    }
}
