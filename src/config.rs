use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub gemini_api_key: SecretString,
    pub gemini_model: String,
    pub supabase_url: String,
    pub supabase_key: SecretString,
    pub results_table: String,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: SecretString::from(
                env::var("GEMINI_API_KEY").unwrap_or_else(|_| "SUA_CHAVE_AQUI".to_string()),
            ),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-1.5-flash".to_string()),
            supabase_url: env::var("SUPABASE_URL").unwrap_or_else(|_| "SUA_URL_AQUI".to_string()),
            supabase_key: SecretString::from(
                env::var("SUPABASE_KEY").unwrap_or_else(|_| "SUA_CHAVE_AQUI".to_string()),
            ),
            results_table: env::var("RESULTS_TABLE").unwrap_or_else(|_| "simulados".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if required secrets are using placeholder values
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        if self.gemini_api_key.expose_secret() == "SUA_CHAVE_AQUI" {
            panic!("FATAL: GEMINI_API_KEY is using placeholder value! Set GEMINI_API_KEY environment variable.");
        }

        if self.supabase_url == "SUA_URL_AQUI" {
            panic!("FATAL: SUPABASE_URL is using placeholder value! Set SUPABASE_URL environment variable.");
        }

        if self.supabase_key.expose_secret() == "SUA_CHAVE_AQUI" {
            panic!("FATAL: SUPABASE_KEY is using placeholder value! Set SUPABASE_KEY environment variable.");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            gemini_api_key: SecretString::from("test_gemini_key".to_string()),
            gemini_model: "gemini-1.5-flash".to_string(),
            supabase_url: "http://localhost:54321".to_string(),
            supabase_key: SecretString::from("test_supabase_key".to_string()),
            results_table: "simulados".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}
