use better_rest::app;
use better_rest::utils::logger;
use better_rest::CliConfig;
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    if config.json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    match app::run(&config) {
        Ok(line) => println!("{}", line),
        Err(e) => {
            tracing::error!(
                "❌ Failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    }
}
