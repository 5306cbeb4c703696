use anyhow::Result;
use clap::Parser;
use factor_edit::{EdgeController, LineEditorConsole};
use factor_edit_apps::{
    args::RemoveFactorArgs,
    utils::{init_tracing, load_config},
};
use factor_edit_ros::{RosEdgeHighlighter, RosFactorGraphClient};
use tracing::debug;

fn main() -> Result<()> {
    init_tracing();
    let args = RemoveFactorArgs::parse();
    debug!(?args, "parsed args");
    let config = load_config(&args.config)?;

    factor_edit_ros::init("remove_factor_client");
    let highlighter = RosEdgeHighlighter::new(&config.highlighter_config())?;
    let graph = RosFactorGraphClient::new(&config.factor_graph_config())?;
    let mut controller = EdgeController::new(highlighter, graph, LineEditorConsole::new()?);
    controller.remove_factor(args.edge())?;
    Ok(())
}
