use crate::controller::ProcessId;
use thiserror::Error;

/// Errors raised while building or validating a controller configuration
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("shutdown notification endpoint is empty")]
    EmptyEndpoint,

    #[error("shutdown notification endpoint is not an http(s) URL: {0}")]
    InvalidEndpoint(String),
}

/// Errors raised while attempting cooperative shutdown
#[derive(Debug, Error)]
pub enum ShutdownError {
    #[error("failed to deliver {signal} to process {pid}: {source}")]
    SignalDelivery {
        pid: ProcessId,
        signal: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("shutdown endpoint {endpoint} returned status {status}")]
    NotifyRejected { endpoint: String, status: u16 },

    #[error("shutdown request to {endpoint} failed: {source}")]
    NotifyTransport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to send {event} to process group {pid}: {source}")]
    ConsoleEvent {
        pid: ProcessId,
        event: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to sweep children of process {pid}: {source}")]
    Sweep {
        pid: ProcessId,
        #[source]
        source: KillError,
    },
}

/// Errors raised while verifying or terminating a process
#[derive(Debug, Error)]
pub enum KillError {
    #[error("failed to open process {pid}: {source}")]
    Open {
        pid: ProcessId,
        #[source]
        source: std::io::Error,
    },

    #[error("unexpected wait result {code:#x} for process {pid}: {source}")]
    Wait {
        pid: ProcessId,
        code: u32,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to terminate process {pid}: {source}")]
    Terminate {
        pid: ProcessId,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shutdown_error_display() {
        let error = ShutdownError::NotifyRejected {
            endpoint: "http://localhost:8000/shutdown".to_string(),
            status: 503,
        };
        let display = format!("{error}");
        assert!(display.contains("503"));
        assert!(display.contains("http://localhost:8000/shutdown"));

        let error = ShutdownError::SignalDelivery {
            pid: 42,
            signal: "SIGINT",
            source: std::io::Error::from_raw_os_error(1),
        };
        let display = format!("{error}");
        assert!(display.contains("SIGINT"));
        assert!(display.contains("42"));
    }

    #[test]
    fn test_kill_error_display() {
        let error = KillError::Open {
            pid: 1234,
            source: std::io::Error::from_raw_os_error(13),
        };
        assert!(format!("{error}").contains("1234"));

        let error = KillError::Wait {
            pid: 1234,
            code: 0xFFFFFFFF,
            source: std::io::Error::other("wait failed"),
        };
        let display = format!("{error}");
        assert!(display.contains("0xffffffff"));
    }

    #[test]
    fn test_configuration_error_display() {
        let error = ConfigurationError::InvalidEndpoint("ftp://nope".to_string());
        assert!(format!("{error}").contains("ftp://nope"));
    }

    #[test]
    fn test_error_source_is_preserved() {
        use std::error::Error as _;

        let error = KillError::Terminate {
            pid: 7,
            source: std::io::Error::from_raw_os_error(5),
        };
        assert!(error.source().is_some());
    }
}
