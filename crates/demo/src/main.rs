mod config;
mod scenarios;

use serde::Serialize;

use crate::config::DemoConfig;
use crate::scenarios::{CompanyReport, ZooReport};

#[derive(Debug, Serialize)]
struct Summary {
    company: CompanyReport,
    zoo: ZooReport,
}

fn main() -> anyhow::Result<()> {
    ledgerkit_observability::init();

    let config = DemoConfig::from_env()?;
    tracing::debug!(?config, "demo configuration loaded");

    let summary = Summary {
        company: scenarios::run_company(&config),
        zoo: scenarios::run_zoo(&config),
    };

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
