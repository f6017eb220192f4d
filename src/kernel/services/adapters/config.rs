//! 配置服务：管理远程网关配置
//!
//! 凭证默认从环境变量读取，支持运行时覆盖

use crate::kernel::services::ports::GatewayConfig;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

pub struct ConfigService {
    gateway: GatewayConfig,
}

impl ConfigService {
    pub fn new() -> Self {
        Self {
            gateway: GatewayConfig::default(),
        }
    }

    /// 从环境变量读取 API key
    pub fn from_env() -> Self {
        let mut gateway = GatewayConfig::default();
        gateway.api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty());
        Self { gateway }
    }

    pub fn with_gateway_config(gateway: GatewayConfig) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &GatewayConfig {
        &self.gateway
    }

    pub fn gateway_mut(&mut self) -> &mut GatewayConfig {
        &mut self.gateway
    }

    pub fn set_api_key(&mut self, key: Option<String>) {
        self.gateway.api_key = key;
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/config.rs"]
mod tests;
