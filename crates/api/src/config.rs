use movieflix_core::paging::{MovieSortField, PageRequest};

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory holding poster files (default: `posters`).
    pub poster_dir: String,
    /// Public base URL prefixed to `/file/<poster>` (default: `http://localhost:3000`).
    pub base_url: String,
    /// Largest accepted request body in bytes (default: 10 MiB).
    pub max_upload_bytes: usize,
    pub default_page_number: i64,
    pub default_page_size: i64,
    pub default_sort_by: String,
    pub default_sort_dir: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `POSTER_DIR`           | `posters`                  |
    /// | `BASE_URL`             | `http://localhost:3000`    |
    /// | `MAX_UPLOAD_BYTES`     | `10485760`                 |
    /// | `DEFAULT_PAGE_NUMBER`  | `0`                        |
    /// | `DEFAULT_PAGE_SIZE`    | `10`                       |
    /// | `DEFAULT_SORT_BY`      | `movieId`                  |
    /// | `DEFAULT_SORT_DIR`     | `asc`                      |
    ///
    /// Panics on a malformed value, including a default sort field that is
    /// not sortable or default paging outside the accepted range.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.into());

        let host = env_or("HOST", "0.0.0.0");

        let port: u16 = env_or("PORT", "3000")
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = env_or("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let max_upload_bytes: usize = env_or("MAX_UPLOAD_BYTES", "10485760")
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        let default_page_number: i64 = env_or("DEFAULT_PAGE_NUMBER", "0")
            .parse()
            .expect("DEFAULT_PAGE_NUMBER must be a valid i64");

        let default_page_size: i64 = env_or("DEFAULT_PAGE_SIZE", "10")
            .parse()
            .expect("DEFAULT_PAGE_SIZE must be a valid i64");

        PageRequest::new(default_page_number, default_page_size, None)
            .expect("DEFAULT_PAGE_NUMBER and DEFAULT_PAGE_SIZE must form a valid page request");

        let default_sort_by = env_or("DEFAULT_SORT_BY", "movieId");
        MovieSortField::parse(&default_sort_by)
            .expect("DEFAULT_SORT_BY must name a sortable movie field");

        let default_sort_dir = env_or("DEFAULT_SORT_DIR", "asc");
        assert!(
            matches!(default_sort_dir.to_ascii_lowercase().as_str(), "asc" | "desc"),
            "DEFAULT_SORT_DIR must be 'asc' or 'desc'"
        );

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            poster_dir: env_or("POSTER_DIR", "posters"),
            base_url: env_or("BASE_URL", "http://localhost:3000"),
            max_upload_bytes,
            default_page_number,
            default_page_size,
            default_sort_by,
            default_sort_dir,
        }
    }
}
