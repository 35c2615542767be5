/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

#[cfg(test)]
#[macro_use]
mod macros;

mod hash;
mod util;

pub mod humanize;
pub mod key;
pub mod value;

pub use hash::{foreach_kv, get_required as hash_get_required};
pub use util::load_doc;
