use clap::Parser;
use tagsync_cli::config::get_config;
use tagsync_cli::{Cli, CliError, app, terminal};

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let result = get_config(cli.config.as_deref())
        .map_err(CliError::from)
        .and_then(|config| {
            terminal::configure_colors(config.output.color_enabled);
            app::run(&cli, &config)
        });

    match result {
        Ok(report) => app::print_report(&report),
        Err(error) => {
            log::debug!("Exiting with {:?}", error.exit_code());
            eprint!("{}", error.format_for_user(cli.verbose > 1));
            std::process::exit(error.exit_code() as i32);
        }
    }
}

fn init_logging(cli: &Cli) {
    let level = cli.log_level();

    if cli.verbose == 0 {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .format_timestamp(None)
            .init();
        return;
    }

    let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
    builder
        .filter_level(log::LevelFilter::Warn)
        .filter_module("tagsync_core", level)
        .filter_module("tagsync_cli", level)
        .filter_module("tagsync", level);
    if level >= log::LevelFilter::Debug {
        builder.format_timestamp_millis();
    } else {
        builder.format_timestamp(None).format_target(false);
    }
    builder.init();
}
