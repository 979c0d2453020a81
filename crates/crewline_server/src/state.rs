//! Application state

use std::sync::Arc;

use crewline_billing::{BillingProvider, SubscriptionService};

use crate::{config::ServerConfig, store::Registry};

/// Billing service over whichever provider the deployment wires in.
pub type BillingService = SubscriptionService<Box<dyn BillingProvider>>;

#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
    pub registry: Arc<Registry>,
    pub billing: Arc<BillingService>,
    pub jwt_encoding_key: jsonwebtoken::EncodingKey,
    pub jwt_decoding_key: jsonwebtoken::DecodingKey,
}

impl AppState {
    pub fn new(config: ServerConfig, provider: Box<dyn BillingProvider>) -> Self {
        let billing = SubscriptionService::new(
            provider,
            config.billing.catalog(),
            config.billing.return_url.clone(),
        );

        // Create JWT keys
        let jwt_encoding_key = jsonwebtoken::EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let jwt_decoding_key = jsonwebtoken::DecodingKey::from_secret(config.jwt_secret.as_bytes());

        Self {
            config,
            registry: Arc::new(Registry::new()),
            billing: Arc::new(billing),
            jwt_encoding_key,
            jwt_decoding_key,
        }
    }
}
