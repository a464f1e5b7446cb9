use std::env;

/// Runtime configuration, read from the environment with local-development
/// defaults.
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Base URL of the election platform's REST API.
    pub gateway_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let host = env::var("VOTER_IMPORT_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("VOTER_IMPORT_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        let gateway_url =
            env::var("ELECTION_API_URL").unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());
        Config {
            host,
            port,
            gateway_url,
        }
    }
}
