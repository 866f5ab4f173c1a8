use std::env;

#[derive(Clone)]
pub struct Config {
    /// Base URL prepended to chart image filenames in industry feed bodies
    pub chart_base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            chart_base_url: env::var("CHART_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080/charts".to_string()),
        }
    }
}
