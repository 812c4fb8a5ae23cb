use remotune::{
    player::config::ClientConfig,
    ui::app::App,
    util::{hook::set_panic_hook, log::initialize_logging},
};
use tracing::info;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> color_eyre::Result<()> {
    setup()?;

    let config = ClientConfig::from_env()?;
    info!(
        "Starting with server {} polling every {:?}",
        config.base_url, config.poll_interval
    );

    let mut app = App::new(config)?;
    app.run().await
}

/// Startup steps past `color_eyre` are best-effort: a failure is reported
/// and launch continues.
fn setup() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = dotenv::dotenv() {
        if !e.not_found() {
            eprintln!("Ignoring unreadable .env file: {e}");
        }
    }
    set_panic_hook();
    if let Err(e) = initialize_logging() {
        eprintln!("Logging disabled: {e}");
    }
    Ok(())
}
