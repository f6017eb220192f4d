pub const DEFAULT_EXEC_ENDPOINT: &str = "https://emkc.org/api/v2/piston/execute";
pub const DEFAULT_GENERATION_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GENERATION_MODEL: &str = "gemini-pro";

#[derive(Clone, Debug)]
pub struct GatewayConfig {
    pub exec_endpoint: String,
    pub generation_endpoint: String,
    pub generation_model: String,
    pub api_key: Option<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            exec_endpoint: DEFAULT_EXEC_ENDPOINT.to_string(),
            generation_endpoint: DEFAULT_GENERATION_ENDPOINT.to_string(),
            generation_model: DEFAULT_GENERATION_MODEL.to_string(),
            api_key: None,
        }
    }
}
