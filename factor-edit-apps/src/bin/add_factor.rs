use anyhow::Result;
use clap::{CommandFactory, Parser, error::ErrorKind};
use factor_edit::{EdgeController, LineEditorConsole};
use factor_edit_apps::{
    args::AddFactorArgs,
    utils::{init_tracing, load_config},
};
use factor_edit_ros::{RosEdgeHighlighter, RosFactorGraphClient};
use tracing::debug;

fn main() -> Result<()> {
    init_tracing();
    let args = AddFactorArgs::parse();
    debug!(?args, "parsed args");

    // Reject malformed rotations before anything is sent to the services.
    let factor = match args.factor() {
        Ok(factor) => factor,
        Err(e @ factor_edit::Error::InvalidArgumentCount(_)) => AddFactorArgs::command()
            .error(ErrorKind::WrongNumberOfValues, e)
            .exit(),
        Err(e) => AddFactorArgs::command()
            .error(ErrorKind::InvalidValue, e)
            .exit(),
    };
    debug!(?factor, "factor to add");
    let config = load_config(&args.config)?;

    factor_edit_ros::init("add_factor_client");
    let highlighter = RosEdgeHighlighter::new(&config.highlighter_config())?;
    let graph = RosFactorGraphClient::new(&config.factor_graph_config())?;
    let mut controller = EdgeController::new(highlighter, graph, LineEditorConsole::new()?);
    controller.add_factor(&factor)?;
    Ok(())
}
