//! CLI command implementation
//!
//! Startup order:
//! 1. Parse flags and install logging
//! 2. Resolve configuration
//! 3. Parse filters (fail fast on bad syntax)
//! 4. Connect to the store (fail fast if unreachable)
//! 5. Run one discovery pass and print the report

use std::io::{self, Write};

use tracing::info;

use crate::clock::{Clock, SystemClock};
use crate::discovery::{DiscoveryPipeline, DiscoveryPlan, DiscoveryReport};
use crate::filter::parse_filters;
use crate::observability::{init_logging, Event, Verbosity};
use crate::report::ReportRenderer;
use crate::store::{ExecutionStore, RedisStore};

use super::args::Cli;
use super::config::Config;
use super::errors::CliResult;

/// Main entry point for the CLI
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    init_logging(Verbosity::from_flags(cli.quiet, cli.debug));

    let config = Config::resolve(&cli)?;
    info!(
        event = Event::ConfigLoaded.as_str(),
        execution_type = %config.execution_type,
        redis_addr = %config.redis_addr,
        redis_db = config.redis_db,
        "configuration loaded"
    );

    let plan = build_plan(&config)?;

    let mut store = RedisStore::connect(
        &config.redis_addr,
        config.redis_password.as_deref(),
        config.redis_db,
    )?;
    info!(
        event = Event::StoreConnected.as_str(),
        addr = store.addr(),
        "connected to redis"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    scan(&mut store, &SystemClock, &plan, &mut out)?;
    Ok(())
}

/// Builds the discovery plan, logging each active filter
pub fn build_plan(config: &Config) -> CliResult<DiscoveryPlan> {
    let predicates = parse_filters(&config.filters, &config.status)?;
    for predicate in &predicates {
        info!(
            event = Event::FilterAdded.as_str(),
            key = predicate.key(),
            value = predicate.value(),
            kind = predicate.kind().as_str(),
            "Adding result filter"
        );
    }
    Ok(DiscoveryPlan::new(
        config.execution_type.as_str(),
        predicates,
        config.fields.clone(),
    ))
}

/// Runs one discovery pass and writes the report table to `out`
pub fn scan<S, C, W>(
    store: &mut S,
    clock: &C,
    plan: &DiscoveryPlan,
    out: &mut W,
) -> CliResult<DiscoveryReport>
where
    S: ExecutionStore + ?Sized,
    C: Clock + ?Sized,
    W: Write,
{
    let report = DiscoveryPipeline::new(store).run(plan)?;
    ReportRenderer::new(&plan.extra_fields, clock.now()).render(out, &report.executions)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::store::MemoryStore;

    #[test]
    fn test_build_plan_status_first() {
        let config = Config {
            filters: "application=deck".to_string(),
            ..Config::default()
        };
        let plan = build_plan(&config).unwrap();
        assert_eq!(plan.execution_type, "orchestration");
        assert_eq!(plan.predicates.len(), 2);
        assert_eq!(plan.predicates[0].key(), "status");
        assert_eq!(plan.predicates[0].value(), "RUNNING");
    }

    #[test]
    fn test_build_plan_rejects_bad_filters() {
        let config = Config {
            filters: "application".to_string(),
            ..Config::default()
        };
        let err = build_plan(&config).unwrap_err();
        assert_eq!(err.code_str(), "EXECSCAN_CLI_FILTER_ERROR");
    }

    #[test]
    fn test_scan_prints_table() {
        let mut store = MemoryStore::new();
        store.insert_hash(
            "orchestration:1",
            [("status", "RUNNING"), ("startTime", "1000"), ("application", "deck")],
        );
        let config = Config {
            fields: vec!["application".to_string()],
            ..Config::default()
        };
        let plan = build_plan(&config).unwrap();
        let clock = FixedClock::from_millis(1000 + 90_000);

        let mut out = Vec::new();
        let report = scan(&mut store, &clock, &plan, &mut out).unwrap();

        assert_eq!(report.matched_count(), 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "key  runTime  application\norchestration:1  1m30s  deck\n"
        );
    }

    #[test]
    fn test_scan_enumeration_failure() {
        let mut store = MemoryStore::new();
        store.fail_enumeration();
        let plan = build_plan(&Config::default()).unwrap();

        let mut out = Vec::new();
        let err = scan(&mut store, &FixedClock::from_millis(0), &plan, &mut out).unwrap_err();

        assert_eq!(err.code_str(), "EXECSCAN_CLI_ENUMERATION_FAILED");
        assert!(out.is_empty());
    }
}
