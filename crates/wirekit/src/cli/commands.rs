//! Command runner

use std::io::Write;

use tracing::debug;
use wirekit_application::{Container, PlanSnapshot};
use wirekit_domain::error::{Error, Result};
use wirekit_domain::{Plan, ServiceIdentifier, Target};
use wirekit_infrastructure::bootstrap::build_container;
use wirekit_infrastructure::config::{AppConfig, ConfigLoader};

use super::{CheckArgs, Cli, Command, PlanArgs};

/// Load the configuration selected by `cli`
pub fn load_config(cli: &Cli) -> Result<AppConfig> {
    let loader = match &cli.config {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load()
}

/// Run the selected command, writing its report to `out`
///
/// Returns `false` when planning failed; the failure is part of the report.
/// Manifest, configuration and I/O problems are returned as errors.
pub fn run(cli: &Cli, config: &AppConfig, out: &mut dyn Write) -> Result<bool> {
    match &cli.command {
        Command::Plan(args) => plan(args, config, out),
        Command::Check(args) => check(args, config, out),
    }
}

fn plan(args: &PlanArgs, config: &AppConfig, out: &mut dyn Write) -> Result<bool> {
    let container = build_container(config, &args.manifest)?;
    let plans = match plan_service(&container, args) {
        Ok(plans) => plans,
        Err(err) if is_reportable(&err) => {
            writeln!(out, "error: {err}")?;
            return Ok(false);
        }
        Err(err) => return Err(err),
    };

    let snapshots: Vec<_> = plans
        .iter()
        .map(|plan| PlanSnapshot::capture(plan, container.registry()))
        .collect();
    debug!(plans = snapshots.len(), "Rendering plans");

    if args.json {
        match snapshots.as_slice() {
            [single] if !args.all => serde_json::to_writer_pretty(&mut *out, single)?,
            all => serde_json::to_writer_pretty(&mut *out, all)?,
        }
        writeln!(out)?;
    } else {
        for snapshot in &snapshots {
            write!(out, "{}", snapshot.render_tree())?;
        }
    }
    Ok(true)
}

fn plan_service(container: &Container, args: &PlanArgs) -> Result<Vec<Plan>> {
    let service = ServiceIdentifier::from(args.service.as_str());
    if args.all {
        return container.plan_all(service);
    }

    let mut target = Target::root(service);
    if let Some(named) = &args.named {
        target = target.with_named(named.as_str());
    }
    for (key, value) in &args.tagged {
        target = target.with_tag(key.as_str(), value.clone());
    }
    Ok(vec![container.plan_target(target)?])
}

fn check(args: &CheckArgs, config: &AppConfig, out: &mut dyn Write) -> Result<bool> {
    let container = build_container(config, &args.manifest)?;
    let services = container.bound_identifiers();
    let mut failures = 0usize;

    for service in &services {
        let name = container.display_name(service);
        match container.plan_all(service.clone()) {
            Ok(plans) => {
                let requests: usize = plans.iter().map(Plan::len).sum();
                writeln!(
                    out,
                    "ok    {name} ({} bindings, {requests} requests)",
                    plans.len()
                )?;
            }
            Err(err) if is_reportable(&err) => {
                failures += 1;
                writeln!(out, "FAIL  {name}: {err}")?;
            }
            Err(err) => return Err(err),
        }
    }

    writeln!(out, "{} services checked, {failures} failed", services.len())?;
    Ok(failures == 0)
}

fn is_reportable(err: &Error) -> bool {
    err.is_planning_error() || matches!(err, Error::InvalidArgument { .. })
}
