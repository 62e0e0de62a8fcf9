mod config;
mod error;
mod hotstorage;

use std::path::PathBuf;

use clap::Parser;
use config::{OptimizerType, PlannerConfig};
use error::{PlanError, TransportError};
use hotstorage::{Strategy, World};
use protobuf::Message;
use tracing::{info, warn};
use tracing_subscriber::{
    filter::{Directive, ParseError},
    EnvFilter,
};

const DEFAULT_LOG_DIRECTIVE: &str = "hotstorage_planner=info";

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Address of the world socket, e.g. tcp://localhost:8080
    socket_addr: String,

    /// Simulation id, used as socket identity
    sim_id: String,

    /// Use the rule based heuristic instead of the search
    #[clap(long)]
    rule_based: bool,

    /// Node-expansion budget of the search
    #[clap(long)]
    budget: Option<usize>,

    /// TOML configuration file
    #[clap(long)]
    config: Option<PathBuf>,
}

impl Args {
    fn planner_config(&self) -> Result<PlannerConfig, config::ConfigError> {
        let mut config = match &self.config {
            Some(path) => PlannerConfig::load(path)?,
            None => PlannerConfig::default(),
        };
        if self.rule_based {
            config = config.with_strategy(OptimizerType::RuleBased);
        }
        if let Some(budget) = self.budget {
            config = config.with_node_budget(budget);
        }
        Ok(config)
    }
}

fn default_directive() -> Result<Directive, ParseError> {
    DEFAULT_LOG_DIRECTIVE.parse()
}

/// Installs the fmt subscriber. `RUST_LOG` overrides the default directive.
fn init_logging() -> Result<(), TransportError> {
    let filter = EnvFilter::builder()
        .with_default_directive(default_directive()?)
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}

/// Decodes a world, plans and encodes the answer. `None` means "no schedule this cycle".
fn handle_world(bytes: &[u8], strategy: &dyn Strategy) -> Result<Option<Vec<u8>>, PlanError> {
    let world = World::parse_from_bytes(bytes).map_err(PlanError::Decode)?;
    match hotstorage::plan_moves(&world, strategy)? {
        Some(schedule) => Ok(Some(schedule.write_to_bytes().map_err(PlanError::Encode)?)),
        None => Ok(None),
    }
}

fn main() -> Result<(), TransportError> {
    init_logging()?;
    let args = Args::parse();
    let config = args.planner_config()?;
    info!(
        strategy = ?config.strategy,
        budget = config.search.node_budget,
        "starting planner"
    );
    let strategy = hotstorage::strategy(&config);

    let ctx = zmq::Context::new();
    let socket = ctx.socket(zmq::DEALER)?;
    socket.set_identity(args.sim_id.as_bytes())?;
    socket.connect(&args.socket_addr)?;
    info!(addr = %args.socket_addr, "connected");

    while let Ok(msg) = socket.recv_multipart(0) {
        let response = match msg.get(2) {
            Some(bytes) => handle_world(bytes, strategy.as_ref()).unwrap_or_else(|err| {
                warn!(%err, "planning failed, no schedule this cycle");
                None
            }),
            None => {
                warn!(frames = msg.len(), "unexpected message layout");
                None
            }
        };

        // the simulation waits for an answer, so an empty frame stands for "no schedule"
        let payload = response.unwrap_or_default();
        if !payload.is_empty() {
            info!(bytes = payload.len(), "send schedule");
        }
        socket.send_multipart(vec![Vec::new(), b"crane".to_vec(), payload], 0)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotstorage::{
        testutil::{block, stack, world},
        CraneSchedule, ModelBased,
    };

    fn model_based() -> ModelBased {
        ModelBased {
            search: PlannerConfig::default().search,
        }
    }

    #[test]
    fn world_bytes_round_trip_into_schedule() {
        let world = world(
            stack(0, 3, vec![block(1, 10)]),
            vec![stack(1, 2, vec![])],
            9,
            true,
        );
        let bytes = world.write_to_bytes().unwrap();
        let answer = handle_world(&bytes, &model_based()).unwrap().unwrap();
        let schedule = CraneSchedule::parse_from_bytes(&answer).unwrap();
        assert_eq!(schedule.get_Moves().len(), 1);
        assert_eq!(schedule.get_Moves()[0].get_TargetId(), 9);
        assert_eq!(schedule.get_SequenceNr(), 1);
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let err = handle_world(&[0xff, 0xff, 0xff], &model_based()).unwrap_err();
        assert!(matches!(err, PlanError::Decode(_)));
    }

    #[test]
    fn default_log_filter_targets_the_planner() {
        let filter = EnvFilter::builder()
            .with_default_directive(default_directive().unwrap())
            .parse_lossy("");
        assert!(filter
            .to_string()
            .to_lowercase()
            .contains("hotstorage_planner=info"));
    }

    #[test]
    fn missing_config_file_is_a_startup_error() {
        let args = Args::parse_from([
            "hotstorage-planner",
            "tcp://localhost:8080",
            "sim",
            "--config",
            "does/not/exist.toml",
        ]);
        let err: TransportError = args.planner_config().unwrap_err().into();
        assert!(matches!(err, TransportError::Config(_)));
    }

    #[test]
    fn cli_flags_override_defaults() {
        let args = Args::parse_from([
            "hotstorage-planner",
            "tcp://localhost:8080",
            "sim",
            "--rule-based",
            "--budget",
            "7",
        ]);
        let config = args.planner_config().unwrap();
        assert_eq!(config.strategy, OptimizerType::RuleBased);
        assert_eq!(config.search.node_budget, 7);
    }
}
