/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use log::{debug, trace};

use h1sniff_types::net::UpstreamAddr;
use h1sniff_types::session::SessionContext;

use super::{HttpVersion, SniffError, SniffResult};

pub const DEFAULT_HTTP_PORT: u16 = 80;

pub const ATTRIBUTE_METHOD: &str = ":method";
pub const ATTRIBUTE_PATH: &str = ":path";

// the check order is significant, as a short buffer ends the check early
const HTTP_METHODS: &[&[u8]] = &[
    b"get", b"post", b"head", b"put", b"delete", b"options", b"connect", b"patch", b"trace",
];

/// Check if the data begins with a known http method, case-insensitively.
///
/// Methods are checked in a fixed order, and `NeedMoreData` is returned as soon as
/// the data is shorter than the method being checked, even if some later method
/// could still be ruled out.
pub fn check_http_method(data: &[u8]) -> Result<(), SniffError> {
    for method in HTTP_METHODS {
        let len = method.len();
        if data.len() >= len && data[..len].eq_ignore_ascii_case(method) {
            return Ok(());
        }

        if data.len() < len {
            return Err(SniffError::NeedMoreData);
        }
    }

    Err(SniffError::NotHttpMethod)
}

fn lowercase_token(token: &[u8]) -> String {
    String::from_utf8_lossy(token).to_lowercase()
}

fn parse_host_value(value: &[u8]) -> Result<UpstreamAddr, SniffError> {
    let value = std::str::from_utf8(value)
        .map_err(|e| SniffError::InvalidHost(anyhow::Error::new(e)))?
        .to_lowercase();
    UpstreamAddr::parse_with_default_port(&value, DEFAULT_HTTP_PORT).map_err(|e| {
        debug!("invalid http host header value {value}: {e:?}");
        SniffError::InvalidHost(e)
    })
}

/// Check if the data contains the empty line that ends the http request head.
///
/// No host header can be found after this point, so reading more data won't help.
pub fn http_head_complete(data: &[u8]) -> bool {
    memchr::memmem::find(data, b"\n\n").is_some()
        || memchr::memmem::find(data, b"\n\r\n").is_some()
}

/// Sniff the head of a plaintext http/1.x request.
///
/// The method and path of the request line are always recorded in the session content,
/// which will be created if absent, even if no host header is found.
/// Each call parses the data from the start, so the caller should pass in all data
/// received so far.
pub fn sniff_http(ctx: &mut SessionContext, data: &[u8]) -> Result<SniffResult, SniffError> {
    check_http_method(data)?;

    // no special handling of '\r', it will be trimmed as whitespace in header values
    let mut lines = data.split(|b| *b == b'\n');

    let request_line = lines.next().unwrap_or_default();
    let mut tokens = request_line.splitn(3, |b| *b == b' ');
    let (method, path) = match (tokens.next(), tokens.next()) {
        (Some(method), Some(path)) => (lowercase_token(method), lowercase_token(path)),
        _ => (String::new(), String::new()),
    };

    let content = ctx.get_or_insert_content();
    content.set_attribute(ATTRIBUTE_METHOD, method.to_uppercase());
    content.set_attribute(ATTRIBUTE_PATH, path.as_str());

    let mut upstream: Option<UpstreamAddr> = None;
    for line in lines {
        if line.is_empty() {
            break;
        }

        let Some(p) = memchr::memchr(b':', line) else {
            continue;
        };
        if !line[..p].eq_ignore_ascii_case(b"host") {
            continue;
        }

        let value = line[p + 1..].trim_ascii();
        if value.is_empty() {
            // an empty value clears any earlier host
            upstream = None;
            continue;
        }
        // the last one wins if there are more than one host headers
        upstream = Some(parse_host_value(value)?);
    }

    match upstream {
        Some(upstream) => Ok(SniffResult::new(HttpVersion::Http1, upstream, method, path)),
        None => {
            trace!("no host header found in {} bytes of http data", data.len());
            Err(SniffError::NoHostHeader)
        }
    }
}
