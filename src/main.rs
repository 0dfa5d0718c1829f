//! Console entry point.
mod console;
mod flavour;

use anyhow::Result;
use console::ConsoleApp;
use hero_clash::BattleConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = BattleConfig::from_env();

    ConsoleApp::stdio(config)?.run()
}
