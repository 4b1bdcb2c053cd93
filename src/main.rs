//! Builds a small tree, then removes and inserts values, printing all three walks after each step.

use std::env;

use log::{info, LevelFilter, SetLoggerError};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use ordered_tree::OrderedTree;

/// Environment variable that overrides the default `warn` log level.
const LOG_LEVEL_VAR: &str = "ORDERED_TREE_LOG";

fn log_level() -> LevelFilter {
    env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

fn main() -> Result<(), SetLoggerError> {
    TermLogger::init(
        log_level(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let mut tree = OrderedTree::from([30, 20, 10, 80, 40, 60, 120, 50, 100, 140, 70, 130, 150]);
    info!("Built tree with {} values", tree.len());
    print!("{}", tree);

    println!("Remove node 30...");
    tree.remove(&30);
    print!("{}", tree);

    println!("Insert node 18, 15, 27, 32...");
    tree.extend([18, 15, 27, 32]);
    print!("{}", tree);

    Ok(())
}
