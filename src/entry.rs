use std::ffi::OsString;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::info;
use url::Url;

use leitner_stress::args::StressArgs;
use leitner_stress::catalog::Catalog;
use leitner_stress::config::{apply_config, build_catalog, load_config};
use leitner_stress::error::{AppError, AppResult, HttpError};
use leitner_stress::http::{LoadDriver, build_client};
use leitner_stress::logger::init_logging;
use leitner_stress::scenario::{RunOutcome, ScenarioPlan, ScenarioRunner};
use leitner_stress::shutdown::{setup_signal_shutdown_handler, shutdown_channel};
use leitner_stress::sink::spawn_writer;

struct RunSetup {
    args: StressArgs,
    catalog: Catalog,
    base_url: Url,
    plan: ScenarioPlan,
}

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;

    init_logging(args.verbose, args.no_color);

    let setup = prepare(&mut args, &matches)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(setup))
}

fn parse_args() -> AppResult<(StressArgs, ArgMatches)> {
    let raw_args: Vec<OsString> = std::env::args_os().collect();
    let matches = StressArgs::command().get_matches_from(raw_args);
    let args = StressArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

fn prepare(args: &mut StressArgs, matches: &ArgMatches) -> AppResult<RunSetup> {
    let config = load_config(args.config.as_deref())?;
    if let Some(config) = config.as_ref() {
        apply_config(args, matches, config)?;
    }
    let catalog = build_catalog(config.as_ref())?;

    let base_url = Url::parse(&args.base_url).map_err(|err| {
        AppError::http(HttpError::InvalidBaseUrl {
            url: args.base_url.clone(),
            source: err,
        })
    })?;
    let plan = ScenarioPlan::from_args(args, &catalog);
    plan.validate(&catalog)?;

    Ok(RunSetup {
        args: args.clone(),
        catalog,
        base_url,
        plan,
    })
}

async fn run_async(setup: RunSetup) -> AppResult<()> {
    let RunSetup {
        args,
        catalog,
        base_url,
        plan,
    } = setup;

    let client = build_client(&args)?;
    let (sink, writer) = spawn_writer(std::io::stdout(), args.summary);
    let driver = LoadDriver::new(client, args.max_in_flight, sink);

    info!(
        "Target {} with {} step(s), at most {} request(s) in flight",
        base_url,
        plan.steps.len(),
        args.max_in_flight.get()
    );

    let (shutdown_tx, mut shutdown_rx) = shutdown_channel();
    let signal_handle = setup_signal_shutdown_handler(&shutdown_tx);

    let outcome = ScenarioRunner::new(&driver, &catalog, &base_url)
        .run_until_shutdown(&plan, &mut shutdown_rx)
        .await;
    drop(driver);
    drop(shutdown_tx.send(()));
    signal_handle.await?;

    let report = writer.await??;
    match outcome? {
        RunOutcome::Completed { issued } => info!(
            "Run complete: {} requests, {} passed, {} failed",
            issued, report.passed, report.failed
        ),
        RunOutcome::Interrupted => info!(
            "Stopped early: {} results written, {} passed, {} failed",
            report.lines_written, report.passed, report.failed
        ),
    }
    Ok(())
}
