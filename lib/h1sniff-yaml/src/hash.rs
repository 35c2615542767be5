/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use anyhow::{Context, anyhow};
use yaml_rust::{Yaml, yaml};

/// Call `f` on each entry of the map, all keys should be strings.
pub fn foreach_kv<F>(table: &yaml::Hash, mut f: F) -> anyhow::Result<()>
where
    F: FnMut(&str, &Yaml) -> anyhow::Result<()>,
{
    table.iter().try_for_each(|(k, v)| {
        let Yaml::String(key) = k else {
            return Err(anyhow!("key in hash should be string, but got {k:?}"));
        };
        f(key, v).context(format!("failed to parse value of key {key}"))
    })
}

pub fn get_required<'a>(map: &'a yaml::Hash, k: &str) -> anyhow::Result<&'a Yaml> {
    map.get(&Yaml::String(k.to_string()))
        .ok_or_else(|| anyhow!("no required key {k} found in this map"))
}
