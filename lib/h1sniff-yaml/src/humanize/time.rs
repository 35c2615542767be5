/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::str::FromStr;
use std::time::Duration;

use anyhow::anyhow;
use humanize_rs::ParseError;
use yaml_rust::Yaml;

fn parse_duration_str(value: &str) -> anyhow::Result<Duration> {
    match humanize_rs::duration::parse(value) {
        Ok(v) => Ok(v),
        // plain numbers are in seconds
        Err(ParseError::MissingUnit) => match u64::from_str(value) {
            Ok(secs) => Ok(Duration::from_secs(secs)),
            Err(_) => parse_secs_f64(value),
        },
        Err(e) => Err(anyhow!("invalid humanize duration string: {e}")),
    }
}

fn parse_secs_f64(value: &str) -> anyhow::Result<Duration> {
    let f = f64::from_str(value).map_err(|e| anyhow!("invalid f64 value: {e}"))?;
    Duration::try_from_secs_f64(f).map_err(anyhow::Error::new)
}

pub fn as_duration(v: &Yaml) -> anyhow::Result<Duration> {
    match v {
        Yaml::String(value) => parse_duration_str(value),
        Yaml::Integer(value) => u64::try_from(*value)
            .map(Duration::from_secs)
            .map_err(|_| anyhow!("negative duration value {value}")),
        Yaml::Real(value) => parse_secs_f64(value),
        _ => Err(anyhow!(
            "yaml value type for humanize duration should be 'string' or 'integer' or 'real'"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_duration() {
        let v = Yaml::String("1m30s".to_string());
        assert_eq!(as_duration(&v).unwrap(), Duration::from_secs(90));

        let v = Yaml::String("60".to_string());
        assert_eq!(as_duration(&v).unwrap(), Duration::from_secs(60));

        let v = Yaml::String("-4s".to_string());
        assert!(as_duration(&v).is_err());

        let v = Yaml::Integer(4);
        assert_eq!(as_duration(&v).unwrap(), Duration::from_secs(4));

        let v = Yaml::Integer(-4);
        assert!(as_duration(&v).is_err());

        let v = Yaml::Real("0.5".to_string());
        assert_eq!(as_duration(&v).unwrap(), Duration::from_millis(500));

        let v = Yaml::Array(vec![Yaml::Integer(1)]);
        assert!(as_duration(&v).is_err());
    }
}
