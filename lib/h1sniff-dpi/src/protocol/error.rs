/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SniffError {
    #[error("need more data")]
    NeedMoreData,
    #[error("not an http method")]
    NotHttpMethod,
    #[error("no host header found")]
    NoHostHeader,
    #[error("invalid host header: {0:?}")]
    InvalidHost(anyhow::Error),
}

impl SniffError {
    /// The data can not be classified yet.
    ///
    /// The caller may retry with more data, or try other sniffers.
    pub fn is_no_clue(&self) -> bool {
        matches!(self, SniffError::NeedMoreData | SniffError::NoHostHeader)
    }
}
