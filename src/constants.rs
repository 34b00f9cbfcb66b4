//! Application-wide constants and configuration values

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Default root of the Master League API
pub const DEFAULT_API_ROOT: &str = "https://api.masterleague.net";

/// Cache TTL (Time To Live) values in seconds
pub mod cache_ttl {
    /// How long a fetched page document stays fresh (1 hour)
    pub const DOCUMENT_SECONDS: u64 = 3600;
}

/// Sentinel values used when an entity cannot be built from a record
pub mod unknown {
    pub const TEAM_NAME: &str = "NO NAME";
    pub const TEAM_LOGO: &str = "NO LOGO";
    pub const TEXT: &str = "unknown";
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API root override
    pub const API_ROOT: &str = "MASTERLEAGUE_API_ROOT";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "MASTERLEAGUE_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "MASTERLEAGUE_HTTP_TIMEOUT";

    /// Environment variable for toggling certificate validation (`true`/`false`)
    pub const VERIFY_TLS: &str = "MASTERLEAGUE_VERIFY_TLS";
}

/// Default log file name
pub const LOG_FILE_NAME: &str = "masterleague_stats.log";

/// Name of the directory under the platform config dir
pub const APP_DIR_NAME: &str = "masterleague_stats";
