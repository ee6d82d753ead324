use clap::Parser;
use ferrous_ns_domain::CliOverrides;
use std::net::Ipv4Addr;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "ferrous-ns")]
#[command(version)]
#[command(about = "Ferrous NS - minimal authoritative, recursive and spoofing DNS nameserver")]
struct Cli {
    /// Zone file to serve authoritatively
    #[arg(value_name = "ZONEFILE")]
    zone_file: Option<String>,

    /// DNS server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Answer every A and MX query with this address
    #[arg(short = 'm', long, value_name = "IP")]
    mitm: Option<Ipv4Addr>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// DNS-over-HTTPS JSON endpoint used for recursion
    #[arg(long, value_name = "URL")]
    upstream: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind,
        mitm: cli.mitm,
        zone_file: cli.zone_file,
        upstream_url: cli.upstream,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Ferrous NS v{}", env!("CARGO_PKG_VERSION"));

    let dns_services = di::DnsServices::new(&config)?;
    let dns_addr = config.server.listen_addr();

    tokio::select! {
        result = server::start_dns_server(&dns_addr, dns_services.handler) => result?,
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
