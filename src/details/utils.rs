use crate::details::{PingError, PingResult};
use std::net::{IpAddr, Ipv4Addr};

pub(crate) fn lookup_host_v4(hostname: &str) -> PingResult<Ipv4Addr> {
    let ips: Vec<IpAddr> = dns_lookup::lookup_host(hostname)
        .map_err(|error| PingError::Resolution { hostname: hostname.to_owned(), source: Some(error) })?;
    ips.into_iter()
        .find_map(|ip| match ip {
            IpAddr::V4(ipv4) => Some(ipv4),
            IpAddr::V6(_) => None,
        })
        .ok_or_else(|| PingError::Resolution { hostname: hostname.to_owned(), source: None })
}
