//! Service configuration

/// Runtime configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port to listen on
    pub port: u16,

    /// Base URL of the Supabase project
    pub supabase_url: String,

    /// Service-role key used for server-side writes
    pub supabase_service_key: String,

    /// Directory of built landing-page assets
    pub static_dir: String,
}

impl Config {
    /// Read configuration from the environment, falling back to local
    /// development defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(defaults.port),
            supabase_url: std::env::var("SUPABASE_URL").unwrap_or(defaults.supabase_url),
            supabase_service_key: std::env::var("SUPABASE_SERVICE_KEY")
                .unwrap_or(defaults.supabase_service_key),
            static_dir: std::env::var("STATIC_DIR").unwrap_or(defaults.static_dir),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            // Supabase CLI local stack.
            supabase_url: "http://localhost:54321".to_string(),
            supabase_service_key: String::new(),
            static_dir: "static".to_string(),
        }
    }
}
