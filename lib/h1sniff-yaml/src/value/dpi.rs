/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use anyhow::{Context, anyhow};
use yaml_rust::Yaml;

use h1sniff_dpi::HttpSniffConfig;

pub fn as_http_sniff_config(value: &Yaml) -> anyhow::Result<HttpSniffConfig> {
    if let Yaml::Hash(map) = value {
        let mut config = HttpSniffConfig::default();

        crate::foreach_kv(map, |k, v| match crate::key::normalize(k).as_str() {
            "data0_buffer_size" => {
                let size = crate::humanize::as_usize(v)
                    .context(format!("invalid humanize usize value for key {k}"))?;
                config.set_data0_buffer_size(size);
                Ok(())
            }
            "data0_wait_timeout" => {
                let value = crate::humanize::as_duration(v)
                    .context(format!("invalid humanize duration value for key {k}"))?;
                config.set_data0_wait_timeout(value);
                Ok(())
            }
            "data0_read_timeout" => {
                let value = crate::humanize::as_duration(v)
                    .context(format!("invalid humanize duration value for key {k}"))?;
                config.set_data0_read_timeout(value);
                Ok(())
            }
            _ => Err(anyhow!("invalid key {k}")),
        })?;

        Ok(config)
    } else {
        Err(anyhow!(
            "yaml value type for 'http sniff config' should be 'map'"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use yaml_rust::YamlLoader;

    #[test]
    fn as_http_sniff_config_ok() {
        let yaml = yaml_doc!(
            r"
                data0_buffer_size: 8KB
                data0_wait_timeout: 30s
                data0_read_timeout: 2s
            "
        );
        let config = as_http_sniff_config(&yaml).unwrap();
        let mut expected = HttpSniffConfig::default();
        expected.set_data0_buffer_size(8000);
        expected.set_data0_wait_timeout(Duration::from_secs(30));
        expected.set_data0_read_timeout(Duration::from_secs(2));
        assert_eq!(config, expected);

        // alias style keys
        let yaml = yaml_doc!(
            r"
                Data0-Buffer-Size: 1024
                data0-read-timeout: 1m
            "
        );
        let config = as_http_sniff_config(&yaml).unwrap();
        assert_eq!(config.data0_buffer_size(), 1024);
        assert_eq!(config.data0_read_timeout(), Duration::from_secs(60));
        assert_eq!(config.data0_wait_timeout(), Duration::from_secs(60));

        let yaml = Yaml::Hash(Default::default());
        let config = as_http_sniff_config(&yaml).unwrap();
        assert_eq!(config, HttpSniffConfig::default());
    }

    #[test]
    fn as_http_sniff_config_err() {
        let yaml = yaml_doc!("data0_buffer_size: invalid");
        assert!(as_http_sniff_config(&yaml).is_err());

        let yaml = yaml_doc!("data0_wait_timeout: -1s");
        assert!(as_http_sniff_config(&yaml).is_err());

        let yaml = yaml_doc!("data0_read_timeout: []");
        assert!(as_http_sniff_config(&yaml).is_err());

        let yaml = yaml_doc!("inspect_max_depth: 4");
        assert!(as_http_sniff_config(&yaml).is_err());

        let yaml = yaml_str!("invalid");
        assert!(as_http_sniff_config(&yaml).is_err());

        let yaml = Yaml::Integer(123);
        assert!(as_http_sniff_config(&yaml).is_err());
    }
}
