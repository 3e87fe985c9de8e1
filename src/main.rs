use anyhow::Context;
use clap::Parser;
use std::time::Duration;

use counter_app::cli::Args;
use counter_app::i18n::Localizer;
use counter_app::logging::init_tracing;
use counter_app::ui::app::App;
use counter_app::ui::runtime;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = args.load_config()?;
    let counter = config.build_counter()?;

    if config.logging.enabled {
        let log_path = init_tracing(&config.logging).context("Failed to initialize logging")?;
        tracing::debug!("Logging to {}", log_path.display());
    }

    let localizer = Localizer::resolve(config.ui.locale.as_deref());
    tracing::info!(
        min = counter.min(),
        max = counter.max(),
        count = counter.count(),
        locale = localizer.locale(),
        "Starting counter"
    );

    let app = App::new(counter, localizer);
    runtime::run(app, Duration::from_millis(config.ui.tick_rate_ms))
        .context("Terminal UI failed")?;
    Ok(())
}
