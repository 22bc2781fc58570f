use crate::{
    adapters::http::app_state::AppState,
    infra::{config::AppConfig, postgres_persistence},
    use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env();

    let postgres_arc = Arc::new(postgres_persistence(&config).await?);

    let waitlist_use_cases = WaitlistUseCases::new(postgres_arc as Arc<dyn WaitlistRepo>);

    Ok(AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
    })
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "waitlist_api=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .pretty();

    // File (structured JSON logs), skipped if the working directory is read-only
    let json_layer = match File::create("app.log") {
        Ok(file) => Some(
            fmt::layer()
                .json()
                .with_writer(file)
                .with_current_span(true)
                .with_span_list(true),
        ),
        Err(err) => {
            eprintln!("cannot create app.log, JSON logs disabled: {err}");
            None
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
