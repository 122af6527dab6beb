pub mod fixture;
pub mod fixture_data;
pub mod http;
pub mod stream;

use crate::core::config::AppConfig;
use crate::core::provider::{DataProvider, ProviderError};
use std::sync::Arc;
use tracing::info;

pub use fixture::FixtureProvider;
pub use http::HttpProvider;
pub use stream::EventStream;

/// Picks the fixture or live backend according to `data_source.use_mock`.
pub fn build_provider(config: &AppConfig) -> Result<Arc<dyn DataProvider>, ProviderError> {
    let source = &config.data_source;
    if source.use_mock {
        info!("Using fixture data source");
        Ok(Arc::new(FixtureProvider::new(source.simulate_latency)))
    } else {
        info!("Using live data source at {}", source.base_url);
        Ok(Arc::new(HttpProvider::new(&source.base_url)?))
    }
}

/// Opens the push channel matching the configured backend.
pub async fn subscribe(config: &AppConfig) -> Result<EventStream, ProviderError> {
    if config.data_source.use_mock {
        Ok(stream::fixture_stream(config.refresh.stream_interval()))
    } else {
        stream::connect(&config.data_source.base_url).await
    }
}
