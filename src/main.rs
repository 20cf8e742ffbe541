use anyhow::Result;
use clap::Parser;
use cursor_presets::cli::{self, Cli};
use cursor_presets::{VERSION, debug_error, debug_info};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Route log::info!() etc. to the debug log file. The CLI --log-level flag
    // takes precedence, then DEBUG_LEVEL, then the config (applied below).
    let cli_level = cli.log_level.map(Into::into);
    cursor_presets::debug::init_log_bridge(cli_level);
    debug_info!("STARTUP", "cursor-presets {} starting", VERSION);

    let config = match cli::load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            debug_error!("STARTUP", "Failed to load config: {:#}", e);
            eprintln!("cursor-presets: error: {e:#}");
            std::process::exit(1);
        }
    };
    if cli_level.is_none() && config.log_level.is_some() {
        cursor_presets::debug::init_log_bridge(config.log_level);
    }

    let result = cli::run(cli, &config);
    if let Err(ref e) = result {
        debug_error!("CLI", "{:#}", e);
        eprintln!("cursor-presets: error: {e:#}");
        std::process::exit(1);
    }
    result
}
