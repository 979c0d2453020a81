//! Server configuration

use crewline_billing::{PlanCatalog, PriceId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address (e.g., "127.0.0.1:8080")
    pub bind_address: String,

    /// JWT secret for signing tokens
    pub jwt_secret: String,

    /// Access token lifetime in seconds
    pub access_token_ttl: u64,

    /// CORS configuration
    pub cors: CorsConfig,

    /// Rate limiting
    pub rate_limit: RateLimitConfig,

    /// Billing catalog and checkout return target
    pub billing: BillingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub max_age: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    pub enabled: bool,
    pub requests_per_minute: u32,
    pub burst_size: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingConfig {
    /// Provider price id for the monthly plan
    pub monthly_price_id: String,
    /// Provider price id for the yearly plan
    pub yearly_price_id: String,
    /// Where the provider returns users after checkout approval
    pub return_url: String,
}

impl BillingConfig {
    pub fn catalog(&self) -> PlanCatalog {
        PlanCatalog::new(
            PriceId::new(&self.monthly_price_id),
            PriceId::new(&self.yearly_price_id),
        )
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            jwt_secret: "change-me-in-production".to_string(),
            access_token_ttl: 3600, // 1 hour
            cors: CorsConfig {
                allowed_origins: vec!["*".to_string()],
                allowed_methods: vec![
                    "GET".to_string(),
                    "POST".to_string(),
                    "PUT".to_string(),
                    "PATCH".to_string(),
                    "DELETE".to_string(),
                ],
                allowed_headers: vec!["*".to_string()],
                max_age: 3600,
            },
            rate_limit: RateLimitConfig {
                enabled: false,
                requests_per_minute: 60,
                burst_size: 10,
            },
            billing: BillingConfig {
                monthly_price_id: "price_monthly_01".to_string(),
                yearly_price_id: "price_yearly_01".to_string(),
                return_url: "http://localhost:8000/subscriptions".to_string(),
            },
        }
    }
}
