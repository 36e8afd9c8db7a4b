use std::net::{Ipv4Addr, Ipv6Addr};

/// Syntactic IPv4/IPv6 check. Hostnames, CIDR blocks, empty strings and
/// out-of-range octets all fail. Equivalent textual forms of the same
/// address are not canonicalized here; callers compare exact strings.
pub fn is_valid_ip(candidate: &str) -> bool {
    candidate.parse::<Ipv4Addr>().is_ok() || candidate.parse::<Ipv6Addr>().is_ok()
}
