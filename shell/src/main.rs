use crate::error::StackTrace;
use crate::handler::AppModule;
use crate::shell::Shell;
use driver::config::LibraryConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

mod command;
mod controller;
mod error;
mod handler;
mod request;
mod response;
mod shell;

fn main() -> Result<(), StackTrace> {
    let config = LibraryConfig::from_env()?;

    let appender = tracing_appender::rolling::daily(std::path::Path::new("./logs/"), "library.log");
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .init();

    tracing::debug!(?config, "loaded configuration");

    let app = AppModule::new(&config);
    if *config.seed_demo() {
        app.seed_demo()?;
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Shell::new(stdin.lock(), stdout.lock()).run(&*app)?;

    Ok(())
}
