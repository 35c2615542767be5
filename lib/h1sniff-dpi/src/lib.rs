/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

mod config;
pub use config::HttpSniffConfig;

mod protocol;
pub use protocol::{
    ATTRIBUTE_METHOD, ATTRIBUTE_PATH, DEFAULT_HTTP_PORT, HttpVersion, SniffError, SniffResult,
    check_http_method, http_head_complete, sniff_http,
};

mod stream;
pub use stream::{SniffStreamError, sniff_stream};
