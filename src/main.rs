use clap::Parser;
use rdns_sweep::{ProbeMode, Scanner, ScannerConfig, select_prober};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "rdns-sweep")]
#[command(about = "Reverse-DNS and DNS server sweeper for IPv4 networks", long_about = None)]
struct Args {
    /// CIDR notation of the network to scan, e.g. 192.168.1.0/24
    #[arg(short = 'n', long)]
    network: String,

    /// DNS server to send reverse lookups to, e.g. 192.168.1.155
    #[arg(short = 'd', long, required_unless_present = "find_dns_servers")]
    dns_server: Option<Ipv4Addr>,

    /// Search the network for DNS servers instead of resolving hostnames
    #[arg(short = 'f', long)]
    find_dns_servers: bool,

    /// Number of workers
    #[arg(short = 't', long, default_value = "1", value_parser = parse_threads)]
    threads: usize,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,

    #[arg(long)]
    no_progress: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn parse_threads(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(threads) if threads >= 1 => Ok(threads),
        _ => Err("number of threads must be a positive integer".to_string()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .init();

    let config = Arc::new(ScannerConfig {
        workers: args.threads,
        mode: if args.find_dns_servers {
            ProbeMode::DnsDiscovery
        } else {
            ProbeMode::ReverseDns
        },
        dns_server: args.dns_server,
        show_progress: !args.no_progress,
        ..Default::default()
    });

    let prober = select_prober(&config)?;
    let scanner = Scanner::new(prober, config.clone());
    let report = scanner.scan(&args.network).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "\nTime: {:?}\n{}: {}",
            report.elapsed,
            report.results.label(),
            serde_json::to_string(&report.results)?
        );
    }

    Ok(())
}
