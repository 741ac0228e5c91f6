//! One-shot network join probe.
//!
//! The device analogue joins WiFi once at startup and restarts on failure;
//! here the equivalent is resolving the local outbound address once and
//! failing the process if the host has no usable network. The `connected`
//! flag is consumed exactly once to seed the scheduler's refresh state and
//! is never revisited in-loop.

use std::net::UdpSocket;
use tracing::info;

use crate::error::AppError;

/// Result of the startup join probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkStatus {
    pub connected: bool,
    pub local_addr: String,
}

/// Probes for a usable network interface and resolves the local address.
///
/// Connecting a UDP socket picks the outbound interface without sending any
/// packets. Failure here is terminal for the process, mirroring the device
/// restarting when it cannot join its network.
pub fn join() -> Result<NetworkStatus, AppError> {
    let socket = UdpSocket::bind("0.0.0.0:0")
        .map_err(|e| AppError::network_join_error(format!("cannot bind probe socket: {e}")))?;
    socket
        .connect("8.8.8.8:80")
        .map_err(|e| AppError::network_join_error(format!("no route to network: {e}")))?;
    let local_addr = socket
        .local_addr()
        .map_err(|e| AppError::network_join_error(format!("cannot resolve local address: {e}")))?;

    let status = NetworkStatus {
        connected: true,
        local_addr: local_addr.ip().to_string(),
    };
    info!("Network joined, local address {}", status.local_addr);
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_reports_connected_with_an_address() {
        // Hosts running the test suite have a loopback at minimum; a failure
        // here is the same terminal condition the process would report.
        match join() {
            Ok(status) => {
                assert!(status.connected);
                assert!(!status.local_addr.is_empty());
            }
            Err(e) => {
                assert!(matches!(e, AppError::NetworkJoin(_)));
            }
        }
    }
}
