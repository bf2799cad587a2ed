use dotenvy::dotenv;

use care_lookup::models::config::{self, AppConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let app_config = match config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("Falling back to default configuration: {e}");
            AppConfig::default()
        }
    };

    care_lookup::run(app_config).await
}
