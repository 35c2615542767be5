/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use anyhow::{Context, anyhow};

use super::Host;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct UpstreamAddr {
    host: Host,
    port: u16,
}

impl UpstreamAddr {
    pub fn new(host: Host, port: u16) -> Self {
        UpstreamAddr { host, port }
    }

    #[inline]
    pub fn host(&self) -> &Host {
        &self.host
    }

    #[inline]
    pub fn port(&self) -> u16 {
        self.port
    }

    #[inline]
    pub fn host_str(&self) -> String {
        self.host.to_address_string()
    }

    /// Parse `host`, `host:port` or `[ip6]:port`.
    ///
    /// The default port is used if there is no port, or if the port part is empty.
    pub fn parse_with_default_port(s: &str, default_port: u16) -> anyhow::Result<Self> {
        if s.is_empty() {
            return Err(anyhow!("empty string"));
        }

        let (host, port) = if s.as_bytes()[0] == b'[' {
            let Some(p) = memchr::memchr(b']', s.as_bytes()) else {
                return Err(anyhow!("no ending ']' found for ipv6 ip"));
            };
            let (host, left) = s.split_at(p + 1);
            match left.as_bytes().first() {
                None => (host, ""),
                Some(b':') => (host, &left[1..]),
                Some(_) => return Err(anyhow!("unexpected data after ']'")),
            }
        } else {
            match memchr::memrchr(b':', s.as_bytes()) {
                Some(p) => {
                    let (host, left) = s.split_at(p);
                    if memchr::memchr(b':', host.as_bytes()).is_some() {
                        return Err(anyhow!("too many colons in address"));
                    }
                    (host, &left[1..])
                }
                None => (s, ""),
            }
        };

        if host.is_empty() {
            return Err(anyhow!("empty host"));
        }
        let host = Host::from_str(host)?;
        let port = if port.is_empty() {
            default_port
        } else {
            u16::from_str(port).context(format!("invalid port {port}"))?
        };
        Ok(UpstreamAddr { host, port })
    }
}

impl FromStr for UpstreamAddr {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UpstreamAddr::parse_with_default_port(s, 0)
    }
}

impl From<(IpAddr, u16)> for UpstreamAddr {
    fn from((ip, port): (IpAddr, u16)) -> Self {
        UpstreamAddr::new(Host::Ip(ip), port)
    }
}

impl fmt::Display for UpstreamAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host.to_address_string(), self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn domain() {
        let addr = UpstreamAddr::parse_with_default_port("example.com", 80).unwrap();
        assert_eq!(addr.host(), &Host::Domain("example.com".to_string()));
        assert_eq!(addr.port(), 80);

        let addr = UpstreamAddr::parse_with_default_port("example.com:8080", 80).unwrap();
        assert_eq!(addr.port(), 8080);
        assert_eq!(addr.host_str(), "example.com");

        let addr = UpstreamAddr::parse_with_default_port("example.com:", 80).unwrap();
        assert_eq!(addr.port(), 80);
    }

    #[test]
    fn ip() {
        let addr = UpstreamAddr::parse_with_default_port("10.0.0.1:443", 80).unwrap();
        assert_eq!(addr.host(), &Host::Ip(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1))));
        assert_eq!(addr.port(), 443);

        let addr = UpstreamAddr::parse_with_default_port("[::1]", 80).unwrap();
        assert_eq!(addr.host(), &Host::Ip(IpAddr::V6(Ipv6Addr::LOCALHOST)));
        assert_eq!(addr.port(), 80);
        assert_eq!(addr.host_str(), "[::1]");

        let addr = UpstreamAddr::parse_with_default_port("[::1]:8443", 80).unwrap();
        assert_eq!(addr.port(), 8443);
        assert_eq!(addr.to_string(), "[::1]:8443");
    }

    #[test]
    fn invalid() {
        assert!(UpstreamAddr::parse_with_default_port("", 80).is_err());
        // a port without host is an error, not an empty host
        assert!(UpstreamAddr::parse_with_default_port(":80", 80).is_err());
        assert!(UpstreamAddr::parse_with_default_port("example.com:abc", 80).is_err());
        assert!(UpstreamAddr::parse_with_default_port("example.com:65536", 80).is_err());
        assert!(UpstreamAddr::parse_with_default_port("::1", 80).is_err());
        assert!(UpstreamAddr::parse_with_default_port("[::1", 80).is_err());
        assert!(UpstreamAddr::parse_with_default_port("[::1]x", 80).is_err());
    }

    #[test]
    fn from_str() {
        let addr = UpstreamAddr::from_str("example.org").unwrap();
        assert_eq!(addr.port(), 0);
    }
}
