//! Scenario parameters, overridable through the environment.

use anyhow::Context;

pub const COMPANY_BUDGET_ENV: &str = "LEDGERKIT_COMPANY_BUDGET";
pub const ZOO_BUDGET_ENV: &str = "LEDGERKIT_ZOO_BUDGET";
pub const ZOO_WATER_LIMIT_ENV: &str = "LEDGERKIT_ZOO_WATER_LIMIT";

#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub company_budget: f64,
    pub zoo_budget: f64,
    pub zoo_water_limit: i64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            company_budget: 500_000.0,
            zoo_budget: 1_000_000.0,
            zoo_water_limit: 1_000,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            company_budget: parse_or(&lookup, COMPANY_BUDGET_ENV, defaults.company_budget)?,
            zoo_budget: parse_or(&lookup, ZOO_BUDGET_ENV, defaults.zoo_budget)?,
            zoo_water_limit: parse_or(&lookup, ZOO_WATER_LIMIT_ENV, defaults.zoo_water_limit)?,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: core::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid value for {key}: {raw:?}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_scenarios() {
        let config = DemoConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn overrides_are_parsed() {
        let config = DemoConfig::from_lookup(|key| match key {
            ZOO_WATER_LIMIT_ENV => Some(" 250 ".to_string()),
            COMPANY_BUDGET_ENV => Some("1.5".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.zoo_water_limit, 250);
        assert_eq!(config.company_budget, 1.5);
        assert_eq!(config.zoo_budget, 1_000_000.0);
    }

    #[test]
    fn invalid_value_names_the_variable() {
        let err = DemoConfig::from_lookup(|key| {
            (key == ZOO_BUDGET_ENV).then(|| "lots".to_string())
        })
        .unwrap_err();

        assert!(err.to_string().contains(ZOO_BUDGET_ENV));
    }
}
