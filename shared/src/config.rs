pub struct Config {
    pub host: String,
    pub http_port: u16,
    pub redis_url: String,
    pub default_ttl_secs: u64,
    pub sync_interval_secs: u64,
    pub allowed_origins: Vec<String>,
}

impl Config {
    const DEFAULT_REDIS_URL: &str = "redis://localhost:6379";
    const DEFAULT_TTL_SECS: u64 = 300;
    const DEFAULT_SYNC_INTERVAL_SECS: u64 = 300;

    pub fn from_env() -> Self {
        let host = std::env::var("VORTEX_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let http_port = std::env::var("VORTEX_HTTP_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .unwrap_or(8080);
        Self {
            host,
            http_port,
            redis_url: std::env::var("REDIS_URL")
                .unwrap_or_else(|_| Self::DEFAULT_REDIS_URL.to_string()),
            default_ttl_secs: std::env::var("VORTEX_DEFAULT_TTL_SECS")
                .unwrap_or_else(|_| Self::DEFAULT_TTL_SECS.to_string())
                .parse::<u64>()
                .unwrap_or(Self::DEFAULT_TTL_SECS),
            sync_interval_secs: std::env::var("VORTEX_SYNC_INTERVAL_SECS")
                .unwrap_or_else(|_| Self::DEFAULT_SYNC_INTERVAL_SECS.to_string())
                .parse::<u64>()
                .unwrap_or(Self::DEFAULT_SYNC_INTERVAL_SECS),
            allowed_origins: std::env::var("VORTEX_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
        }
    }
}
