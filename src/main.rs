//! Command line front end: plan a scenario file (or the built-in demo) and
//! print the dispatch table.

use std::process;

use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use haul_dispatch::error::DispatchError;
use haul_dispatch::planner::{PlanOptions, fulfillment, plan};
use haul_dispatch::report::{render_json, render_table};
use haul_dispatch::route_service::{RouteServiceClient, RouteServiceConfig};
use haul_dispatch::scenario::{self, Scenario};

const SCENARIO_ARG_NAME: &str = "SCENARIO";
const JSON_ARG_NAME: &str = "json";
const HORIZON_ARG_NAME: &str = "horizon";
const ROUTE_SERVICE_ARG_NAME: &str = "route-service";
const FLEET_ARG_NAME: &str = "fleet";

fn get_arg_matches() -> ArgMatches {
    Command::new("haul-dispatch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Greedy truck dispatch planner for mine to plant hauling")
        .arg(
            Arg::new(SCENARIO_ARG_NAME)
                .help("Scenario file (orders, trucks, routes). Runs the demo when omitted")
                .required(false)
                .index(1),
        )
        .arg(
            Arg::new(JSON_ARG_NAME)
                .help("Print the plan as JSON")
                .long(JSON_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(HORIZON_ARG_NAME)
                .help("Latest allowed arrival hour")
                .long(HORIZON_ARG_NAME)
                .value_parser(clap::value_parser!(i64)),
        )
        .arg(
            Arg::new(ROUTE_SERVICE_ARG_NAME)
                .help("Base URL of a route service; replaces the scenario's route tables")
                .long(ROUTE_SERVICE_ARG_NAME)
                .requires(FLEET_ARG_NAME),
        )
        .arg(
            Arg::new(FLEET_ARG_NAME)
                .help("Fleet name used when fetching route tables")
                .long(FLEET_ARG_NAME),
        )
        .get_matches()
}

fn run(matches: &ArgMatches) -> Result<(), DispatchError> {
    let mut scenario = match matches.get_one::<String>(SCENARIO_ARG_NAME) {
        Some(path) => Scenario::from_path(path)?,
        None => scenario::demo(),
    };

    if let (Some(base_url), Some(fleet)) = (
        matches.get_one::<String>(ROUTE_SERVICE_ARG_NAME),
        matches.get_one::<String>(FLEET_ARG_NAME),
    ) {
        let client = RouteServiceClient::new(RouteServiceConfig {
            base_url: base_url.clone(),
            ..RouteServiceConfig::default()
        })?;
        scenario.routes = client.fetch_tables(fleet)?;
    }

    let options = PlanOptions {
        horizon_hour: matches.get_one::<i64>(HORIZON_ARG_NAME).copied(),
        ..PlanOptions::default()
    };

    let dispatches = plan(&scenario.orders, &scenario.trucks, &scenario.routes, &options)?;

    if matches.get_flag(JSON_ARG_NAME) {
        println!("{}", render_json(&dispatches)?);
    } else {
        println!("=== Haul dispatch plan (priority-first delivery) ===");
        print!("{}", render_table(&dispatches));

        for status in fulfillment(&scenario.orders, &dispatches) {
            if !status.is_complete() {
                println!(
                    "order {} short by {} of {} tons",
                    status.order_id,
                    status.remaining_tons(),
                    status.total_tons
                );
            }
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let matches = get_arg_matches();

    if let Err(err) = run(&matches) {
        eprintln!("{}", err);
        process::exit(1);
    }
}
