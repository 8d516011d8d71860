use cached::proc_macro::cached;
use config::{Config, Environment, File, FileFormat};
use futures_locks::RwLock;
use once_cell::sync::Lazy;
use serde::Deserialize;

pub use sentry::ClientInitGuard;

static CONFIG_BUILDER: Lazy<RwLock<Config>> = Lazy::new(|| {
    RwLock::new({
        let mut builder = Config::builder().add_source(File::from_str(
            include_str!("../Marketplace.toml"),
            FileFormat::Toml,
        ));

        if std::path::Path::new("Marketplace.toml").exists() {
            builder = builder.add_source(File::new("Marketplace.toml", FileFormat::Toml));
        }

        builder = builder.add_source(
            Environment::with_prefix("MARKETPLACE")
                .prefix_separator("__")
                .separator("__"),
        );

        builder.build().expect("configuration sources should be valid")
    })
});

#[derive(Deserialize, Debug, Clone)]
pub struct Database {
    pub mongodb: String,
    pub name: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Api {
    pub listen: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Onboarding {
    pub reconcile_interval_secs: u64,
    pub reconcile_batch_size: usize,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Sentry {
    pub api: String,
    pub crond: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub database: Database,
    pub api: Api,
    pub onboarding: Onboarding,
    pub sentry: Sentry,
}

pub async fn read() -> Config {
    CONFIG_BUILDER.read().await.clone()
}

#[cached(time = 30)]
pub async fn config() -> Settings {
    read()
        .await
        .try_deserialize::<Settings>()
        .expect("configuration should match the settings schema")
}

/// Configure logging and error reporting for a service
///
/// Loads `.env`, defaults `RUST_LOG` to `info` and starts Sentry
/// if a DSN was provided for this service.
pub fn setup_logging(release: &'static str, dsn: String) -> Option<ClientInitGuard> {
    dotenv::dotenv().ok();

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }

    if pretty_env_logger::try_init().is_err() {
        log::debug!("Logger was already initialised.");
    }

    if dsn.is_empty() {
        None
    } else {
        Some(sentry::init((
            dsn,
            sentry::ClientOptions {
                release: Some(release.into()),
                ..Default::default()
            },
        )))
    }
}

/// Log an error and forward it to Sentry
pub fn capture_error<E: std::fmt::Debug>(error: &E) {
    log::error!("{error:?}");
    sentry::capture_message(&format!("{error:?}"), sentry::Level::Error);
}

/// Load configuration and set up logging for the named service
#[macro_export]
macro_rules! configure {
    ($application: ident) => {
        let config = $crate::config().await;
        let _sentry = $crate::setup_logging(
            concat!(env!("CARGO_PKG_NAME"), "@", env!("CARGO_PKG_VERSION")),
            config.sentry.$application.clone(),
        );
    };
}
