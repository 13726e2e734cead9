use ping_handler::{PingOutcome, PingSession, PingSessionConfig};
use std::time::Duration;

type GenericError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(argh::FromArgs)]
/// ping - send ICMP ECHO_REQUEST to a host (needs raw-socket privilege)
struct Args {
    #[argh(positional)]
    /// hostname or IPv4 address
    destination: String,

    #[argh(option, short = 'c', default = "1")]
    /// number of requests to send
    count: u32,

    #[argh(option, short = 'W', default = "5.0")]
    /// seconds to wait for each reply
    timeout: f64,

    #[argh(option, short = 's', default = "56")]
    /// number of payload bytes
    size: usize,

    #[argh(switch)]
    /// resolve the destination again before every request
    requery_dns: bool,
}

fn main() -> Result<(), GenericError> {
    let subscriber =
        tracing_subscriber::FmtSubscriber::builder().with_max_level(tracing::Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args: Args = argh::from_env();

    let mut config = PingSessionConfig::new(&args.destination);
    config.timeout = Duration::try_from_secs_f64(args.timeout)?;
    config.payload_size = args.size;

    let mut session = PingSession::new(&config)?;
    println!("PING {} with {} bytes of data", session.destination(), args.size);
    for _ in 0..args.count {
        let outcome = session.ping(args.requery_dns)?;
        let ip_addr = session.destination_ip().map(|ip| ip.to_string()).unwrap_or_default();
        let sequence_number = session.last_sequence_number().map(|sn| sn.to_string()).unwrap_or_default();
        match outcome {
            PingOutcome::RoundTrip(_) => {
                println!("{} bytes from {ip_addr}: icmp_seq={sequence_number} {outcome}", args.size + 8);
            }
            _ => println!("{ip_addr}: icmp_seq={sequence_number} {outcome}"),
        }
    }
    session.close();

    Ok(())
}
