/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

mod host;
mod upstream;

pub use host::Host;
pub use upstream::UpstreamAddr;
