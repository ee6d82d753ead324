use ferrous_ns_application::ports::{UpstreamResolver, ZoneStore};
use ferrous_ns_application::use_cases::{ResolutionContext, ResolveQueryUseCase};
use ferrous_ns_domain::Config;
use ferrous_ns_infrastructure::dns::{DnsRequestHandler, DohJsonResolver, InMemoryZoneStore};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct DnsServices {
    pub handler: DnsRequestHandler,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let zone_store = match &config.resolution.zone_file {
            Some(path) => {
                let store: Arc<dyn ZoneStore> = Arc::new(InMemoryZoneStore::load(path)?);
                Some(store)
            }
            None => None,
        };

        let upstream: Arc<dyn UpstreamResolver> = Arc::new(DohJsonResolver::new(
            config.upstream.url.clone(),
            Duration::from_secs(config.upstream.timeout_secs),
        )?);

        match config.resolution.mitm {
            Some(addr) => info!(mitm = %addr, "Spoofing A and MX answers"),
            None if zone_store.is_some() => info!("Serving zone, recursing for everything else"),
            None => info!("Recursive mode"),
        }
        info!(upstream = %config.upstream.url, "Upstream resolver configured");

        let context = ResolutionContext::new(zone_store, config.resolution.mitm);
        let use_case = Arc::new(ResolveQueryUseCase::new(context, upstream));

        Ok(Self {
            handler: DnsRequestHandler::new(use_case),
        })
    }
}
