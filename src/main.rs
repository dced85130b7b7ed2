use std::io::IsTerminal;

use heatwave::telemetry::{get_subscriber, init_subscriber};
use heatwave::{Application, configuration};

const PACKAGE_NAME: &str = env!("CARGO_PKG_NAME");

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::config::HookBuilder::default()
        .theme(if std::io::stderr().is_terminal() {
            color_eyre::config::Theme::dark()
        } else {
            color_eyre::config::Theme::new()
        })
        .install()?;

    let configuration = configuration::get()?;

    let subscriber = get_subscriber(
        PACKAGE_NAME.into(),
        configuration.telemetry.filter.clone(),
        &configuration.telemetry.format,
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let application = Application::build(configuration).await?;
    application.run_until_stopped().await?;
    Ok(())
}
