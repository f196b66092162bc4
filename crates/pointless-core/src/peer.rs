//! Peer address parsing.
//!
//! The transport reports the client as a `host:port` string (`[v6]:port` for
//! IPv6). Only the host part is shown on the status page.

use crate::error::{PointlessError, Result};

/// Split `host:port` / `[host]:port` into its two parts.
///
/// The port may be empty. The host is returned without brackets.
pub fn split_host_port(addr: &str) -> Result<(&str, &str)> {
    let colon = addr
        .rfind(':')
        .ok_or_else(|| PointlessError::bad_address(addr, "missing port in address"))?;

    let (host, host_start, after_host) = if addr.starts_with('[') {
        let end = addr
            .find(']')
            .ok_or_else(|| PointlessError::bad_address(addr, "missing ']' in address"))?;
        if end + 1 == addr.len() {
            return Err(PointlessError::bad_address(addr, "missing port in address"));
        }
        if end + 1 != colon {
            return Err(if addr.as_bytes()[end + 1] == b':' {
                PointlessError::bad_address(addr, "too many colons in address")
            } else {
                PointlessError::bad_address(addr, "missing port in address")
            });
        }
        (&addr[1..end], 1, end + 1)
    } else {
        let host = &addr[..colon];
        if host.contains(':') {
            return Err(PointlessError::bad_address(addr, "too many colons in address"));
        }
        (host, 0, 0)
    };

    if addr[host_start..].contains('[') {
        return Err(PointlessError::bad_address(addr, "unexpected '[' in address"));
    }
    if addr[after_host..].contains(']') {
        return Err(PointlessError::bad_address(addr, "unexpected ']' in address"));
    }

    Ok((host, &addr[colon + 1..]))
}

/// Host part of a peer address, or an empty string if it cannot be split.
///
/// Addresses without a port (unix sockets, bare IPs) degrade to empty rather
/// than being echoed back raw.
pub fn peer_host(addr: &str) -> String {
    match split_host_port(addr) {
        Ok((host, _)) => host.to_string(),
        Err(_) => String::new(),
    }
}
