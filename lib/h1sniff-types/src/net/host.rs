/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::net::{IpAddr, Ipv6Addr};
use std::str::FromStr;

use anyhow::anyhow;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Host {
    Ip(IpAddr),
    Domain(String),
}

impl Host {
    pub fn is_empty(&self) -> bool {
        match self {
            Host::Ip(ip) => ip.is_unspecified(),
            Host::Domain(domain) => domain.is_empty(),
        }
    }

    fn from_maybe_mapped_ip6(ip6: Ipv6Addr) -> Self {
        if let Some(ip4) = ip6.to_ipv4_mapped() {
            Host::Ip(IpAddr::V4(ip4))
        } else {
            Host::Ip(IpAddr::V6(ip6))
        }
    }

    fn from_domain_str(domain: &str) -> anyhow::Result<Self> {
        let domain = idna::domain_to_ascii(domain).map_err(|e| anyhow!("invalid domain: {e}"))?;
        if domain.is_empty() {
            return Err(anyhow!("empty domain"));
        }
        Ok(Host::Domain(domain))
    }

    /// The address form used by routing, with ipv6 ip in squared brackets
    pub fn to_address_string(&self) -> String {
        match self {
            Host::Ip(IpAddr::V6(ip6)) => format!("[{ip6}]"),
            Host::Ip(IpAddr::V4(ip4)) => ip4.to_string(),
            Host::Domain(domain) => domain.clone(),
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Host::Ip(ip) => write!(f, "{ip}"),
            Host::Domain(domain) => write!(f, "{domain}"),
        }
    }
}

impl From<IpAddr> for Host {
    fn from(ip: IpAddr) -> Self {
        Host::Ip(ip)
    }
}

impl FromStr for Host {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(anyhow!("empty string"));
        }
        match s.as_bytes()[0] {
            b'[' => {
                let pos_last = s.len() - 1;
                if pos_last > 0 && s.as_bytes()[pos_last] == b']' {
                    if let Ok(ip6) = Ipv6Addr::from_str(&s[1..pos_last]) {
                        return Ok(Host::from_maybe_mapped_ip6(ip6));
                    }
                }
                return Err(anyhow!("invalid ipv6 ip in squared brackets"));
            }
            b':' => {
                return if let Ok(ip6) = Ipv6Addr::from_str(s) {
                    Ok(Host::from_maybe_mapped_ip6(ip6))
                } else {
                    Err(anyhow!("invalid ipv6 ip"))
                };
            }
            b'0'..=b'9' => {
                if let Ok(ip) = IpAddr::from_str(s) {
                    return match ip {
                        IpAddr::V4(_) => Ok(Host::Ip(ip)),
                        IpAddr::V6(ip6) => Ok(Host::from_maybe_mapped_ip6(ip6)),
                    };
                }
            }
            b'a'..=b'f' | b'A'..=b'F' => {
                if let Ok(ip6) = Ipv6Addr::from_str(s) {
                    // won't be ipv4 mapped
                    return Ok(Host::Ip(IpAddr::V6(ip6)));
                }
            }
            _ => {}
        }

        Host::from_domain_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn parse_ip() {
        let host = Host::from_str("192.168.1.1").unwrap();
        assert_eq!(host, Host::Ip(IpAddr::V4(Ipv4Addr::new(192, 168, 1, 1))));

        let host = Host::from_str("[::1]").unwrap();
        assert_eq!(host, Host::Ip(IpAddr::V6(Ipv6Addr::LOCALHOST)));

        let host = Host::from_str("::ffff:10.0.0.1").unwrap();
        assert_eq!(host, Host::Ip(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1))));

        let host = Host::from_str("fe80::1").unwrap();
        assert!(matches!(host, Host::Ip(IpAddr::V6(_))));

        assert!(Host::from_str("[::1").is_err());
        assert!(Host::from_str("[").is_err());
        assert!(Host::from_str(":::x").is_err());
    }

    #[test]
    fn parse_domain() {
        let host = Host::from_str("www.example.com").unwrap();
        assert_eq!(host, Host::Domain("www.example.com".to_string()));

        let host = Host::from_str("Example.COM").unwrap();
        assert_eq!(host, Host::Domain("example.com".to_string()));

        // looks like hex but is a domain
        let host = Host::from_str("cafe.example").unwrap();
        assert_eq!(host, Host::Domain("cafe.example".to_string()));

        // unicode domains are kept in punycode form
        let host = Host::from_str("bücher.example").unwrap();
        assert_eq!(host, Host::Domain("xn--bcher-kva.example".to_string()));

        assert!(Host::from_str("").is_err());
    }

    #[test]
    fn address_string() {
        let host = Host::from_str("[2001:db8::1]").unwrap();
        assert_eq!(host.to_address_string(), "[2001:db8::1]");
        assert_eq!(host.to_string(), "2001:db8::1");

        let host = Host::from_str("127.0.0.1").unwrap();
        assert_eq!(host.to_address_string(), "127.0.0.1");

        let host = Host::from_str("example.net").unwrap();
        assert_eq!(host.to_address_string(), "example.net");
    }
}
