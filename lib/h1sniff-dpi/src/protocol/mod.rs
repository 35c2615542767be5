/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::fmt;

use h1sniff_types::net::{Host, UpstreamAddr};

mod error;
pub use error::SniffError;

mod http;
pub use http::{
    ATTRIBUTE_METHOD, ATTRIBUTE_PATH, DEFAULT_HTTP_PORT, check_http_method, http_head_complete,
    sniff_http,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum HttpVersion {
    Http1,
    /// reserved, plaintext detection never produces it
    Http2,
}

impl HttpVersion {
    pub const fn as_str(&self) -> &'static str {
        match self {
            HttpVersion::Http1 => "http1",
            HttpVersion::Http2 => "http2",
        }
    }
}

impl fmt::Display for HttpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Routing metadata extracted from the head of a plaintext http request.
///
/// The host is never empty. Method and path are lowercase, and may be empty
/// if the request line contains less than two tokens.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SniffResult {
    version: HttpVersion,
    upstream: UpstreamAddr,
    host: String,
    method: String,
    path: String,
}

impl SniffResult {
    pub(crate) fn new(
        version: HttpVersion,
        upstream: UpstreamAddr,
        method: String,
        path: String,
    ) -> Self {
        let host = upstream.host_str();
        SniffResult {
            version,
            upstream,
            host,
            method,
            path,
        }
    }

    #[inline]
    pub fn version(&self) -> HttpVersion {
        self.version
    }

    #[inline]
    pub fn protocol(&self) -> &'static str {
        self.version.as_str()
    }

    #[inline]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[inline]
    pub fn domain(&self) -> &str {
        &self.host
    }

    #[inline]
    pub fn port(&self) -> u16 {
        self.upstream.port()
    }

    #[inline]
    pub fn upstream(&self) -> &UpstreamAddr {
        &self.upstream
    }

    #[inline]
    pub fn upstream_host(&self) -> &Host {
        self.upstream.host()
    }

    #[inline]
    pub fn method(&self) -> &str {
        &self.method
    }

    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }
}
