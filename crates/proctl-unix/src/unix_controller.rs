#[cfg(unix)]
mod unix_impl {
    use async_trait::async_trait;
    use nix::errno::Errno;
    use nix::sys::signal::{self, Signal, killpg};
    use nix::unistd::Pid as NixPid;
    use proctl_core::{
        ConfigurationError, KillError, ProcessController, ProcessId, ShutdownError, ShutdownIntent,
    };
    use tokio::process::Command;
    use tracing::{debug, info};

    /// Unix implementation of the process lifecycle controller
    ///
    /// Children are isolated by making them session leaders, so the kernel
    /// keeps them out of the parent terminal's foreground process group. A
    /// session leader also leads its own process group (pgid == pid), which
    /// is what `kill_tree` targets.
    pub struct UnixProcessController;

    impl Default for UnixProcessController {
        fn default() -> Self {
            Self::new()
        }
    }

    impl UnixProcessController {
        pub fn new() -> Self {
            Self
        }

        fn deliver(pid: ProcessId, sig: Signal, name: &'static str) -> Result<(), ShutdownError> {
            match signal::kill(NixPid::from_raw(pid as i32), sig) {
                Ok(()) => {
                    info!(pid = %pid, signal = name, "Delivered shutdown signal");
                    Ok(())
                }
                Err(Errno::ESRCH) => {
                    // Target already exited; delivery is idempotent.
                    debug!(pid = %pid, signal = name, "Process gone, shutdown already complete");
                    Ok(())
                }
                Err(errno) => Err(ShutdownError::SignalDelivery {
                    pid,
                    signal: name,
                    source: std::io::Error::from_raw_os_error(errno as i32),
                }),
            }
        }
    }

    #[async_trait]
    impl ProcessController for UnixProcessController {
        fn isolate(&self, cmd: &mut Command) -> Result<(), ConfigurationError> {
            // setsid() in the child, before exec: the child becomes a new
            // session leader and stops receiving signals sent to the
            // parent's foreground process group.
            unsafe {
                cmd.pre_exec(|| {
                    nix::unistd::setsid()
                        .map(|_| ())
                        .map_err(|errno| std::io::Error::from_raw_os_error(errno as i32))
                });
            }
            Ok(())
        }

        async fn shutdown(
            &self,
            intent: ShutdownIntent,
            pid: ProcessId,
        ) -> Result<(), ShutdownError> {
            match intent {
                ShutdownIntent::Cooperative => Self::deliver(pid, Signal::SIGINT, "SIGINT"),
                ShutdownIntent::Forceful => Self::deliver(pid, Signal::SIGKILL, "SIGKILL"),
            }
        }

        async fn kill_tree(&self, pid: ProcessId) -> Result<(), KillError> {
            let target = NixPid::from_raw(pid as i32);

            // Non-blocking liveness probe. An exited process is success; an
            // unsignalable one (EPERM) is ambiguous and must surface.
            match signal::kill(target, None) {
                Ok(()) => {}
                Err(Errno::ESRCH) => {
                    debug!(pid = %pid, "Process already exited, nothing to reap");
                    return Ok(());
                }
                Err(errno) => {
                    return Err(KillError::Open {
                        pid,
                        source: std::io::Error::from_raw_os_error(errno as i32),
                    });
                }
            }

            // Still running: kill the whole group created at spawn, falling
            // back to the single PID if the group id is no longer valid.
            match killpg(target, Signal::SIGKILL) {
                Ok(()) => {
                    info!(pid = %pid, "Killed process group");
                    Ok(())
                }
                Err(Errno::ESRCH) => match signal::kill(target, Signal::SIGKILL) {
                    Ok(()) | Err(Errno::ESRCH) => Ok(()),
                    Err(errno) => Err(KillError::Terminate {
                        pid,
                        source: std::io::Error::from_raw_os_error(errno as i32),
                    }),
                },
                Err(errno) => Err(KillError::Terminate {
                    pid,
                    source: std::io::Error::from_raw_os_error(errno as i32),
                }),
            }
        }

        fn is_alive(&self, pid: ProcessId) -> bool {
            signal::kill(NixPid::from_raw(pid as i32), None).is_ok()
        }
    }
}

// Re-export the Unix implementation when on Unix systems
#[cfg(unix)]
pub use unix_impl::UnixProcessController;

// Provide a stub for non-Unix systems so the crate still compiles there
#[cfg(not(unix))]
pub struct UnixProcessController;

#[cfg(not(unix))]
impl UnixProcessController {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(not(unix))]
impl Default for UnixProcessController {
    fn default() -> Self {
        Self::new()
    }
}
