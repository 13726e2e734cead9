use std::time::Duration;

use more_asserts as ma;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use ping_handler::{PingOutcome, PingSession, PingSessionConfig};

/*
* Note: Raw sockets work only with root privileges.
*/
#[test]
#[ignore = "needs a raw ICMP socket (root or CAP_NET_RAW)"]
fn ping_localhost_with_raw_socket_succeeds() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::TRACE).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let mut config = PingSessionConfig::new("127.0.0.1");
    config.timeout = Duration::from_secs(1);

    let mut session = PingSession::new(&config).unwrap();
    assert_eq!("127.0.0.1", session.destination());
    for _ in 0..3 {
        match session.ping(false).unwrap() {
            PingOutcome::RoundTrip(round_trip) => ma::assert_lt!(round_trip, config.timeout),
            other => panic!("unexpected outcome {other:?}"),
        }
    }
    session.close();

    assert!(session.ping(false).is_err());
}
