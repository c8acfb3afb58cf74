#[cfg(windows)]
mod windows_impl {
    use async_trait::async_trait;
    use proctl_core::{
        ConfigurationError, ControllerConfig, CooperativeShutdown, KillError, ProcessController,
        ProcessId, ShutdownError, ShutdownIntent, ShutdownNotifier,
    };
    use sysinfo::System;
    use tokio::process::Command;
    use tracing::{debug, info};
    use windows::Win32::Foundation::{CloseHandle, HANDLE, WAIT_OBJECT_0, WAIT_TIMEOUT};
    use windows::Win32::System::Console::{
        CTRL_BREAK_EVENT, CTRL_C_EVENT, GenerateConsoleCtrlEvent,
    };
    use windows::Win32::System::Threading::{
        CREATE_NEW_PROCESS_GROUP, OpenProcess, PROCESS_ACCESS_RIGHTS, PROCESS_QUERY_INFORMATION,
        PROCESS_SYNCHRONIZE, PROCESS_TERMINATE, TerminateProcess, WaitForSingleObject,
    };

    fn os_error(error: windows::core::Error) -> std::io::Error {
        std::io::Error::other(error)
    }

    /// Process handle owned for the duration of one operation, closed on
    /// every exit path.
    struct OwnedHandle(HANDLE);

    impl OwnedHandle {
        fn open(pid: ProcessId, access: PROCESS_ACCESS_RIGHTS) -> Result<Self, KillError> {
            // Failure here is ambiguous (already exited vs. access denied)
            // and must surface to the caller.
            let handle = unsafe { OpenProcess(access, false, pid) }.map_err(|e| KillError::Open {
                pid,
                source: os_error(e),
            })?;
            Ok(Self(handle))
        }

        fn raw(&self) -> HANDLE {
            self.0
        }
    }

    impl Drop for OwnedHandle {
        fn drop(&mut self) {
            unsafe {
                let _ = CloseHandle(self.0);
            }
        }
    }

    /// Send a Ctrl-C event to the console process group rooted at `pid`.
    pub fn send_ctrl_c(pid: ProcessId) -> Result<(), ShutdownError> {
        unsafe { GenerateConsoleCtrlEvent(CTRL_C_EVENT, pid) }.map_err(|e| {
            ShutdownError::ConsoleEvent {
                pid,
                event: "CTRL_C_EVENT",
                source: os_error(e),
            }
        })
    }

    /// Send a Ctrl-Break event to the console process group rooted at `pid`,
    /// which the target can trap and handle before exiting.
    pub fn send_ctrl_break(pid: ProcessId) -> Result<(), ShutdownError> {
        unsafe { GenerateConsoleCtrlEvent(CTRL_BREAK_EVENT, pid) }.map_err(|e| {
            ShutdownError::ConsoleEvent {
                pid,
                event: "CTRL_BREAK_EVENT",
                source: os_error(e),
            }
        })
    }

    /// Direct children of `pid`, from a fresh process table snapshot.
    pub fn find_child_processes(pid: ProcessId) -> Vec<ProcessId> {
        let mut system = System::new();
        system.refresh_processes_specifics(
            sysinfo::ProcessesToUpdate::All,
            true,
            sysinfo::ProcessRefreshKind::default(),
        );

        system
            .processes()
            .iter()
            .filter(|(_, process)| process.parent().map(|p| p.as_u32()) == Some(pid))
            .map(|(child, _)| child.as_u32())
            .collect()
    }

    /// Windows implementation of the process lifecycle controller
    ///
    /// Children are isolated by creating them in a new process group, so
    /// console control events aimed at the parent's group do not propagate
    /// while the child's own group (id == pid) stays targetable.
    pub struct WindowsProcessController {
        kill_exit_code: u32,
        notifier: Option<ShutdownNotifier>,
    }

    impl WindowsProcessController {
        pub fn new(config: &ControllerConfig) -> Self {
            let notifier = match &config.cooperative {
                CooperativeShutdown::Notify { endpoint } => {
                    Some(ShutdownNotifier::new(endpoint.clone()))
                }
                CooperativeShutdown::ChildSweep => None,
            };
            Self {
                kill_exit_code: config.kill_exit_code,
                notifier,
            }
        }

        /// Verify the wait state of `pid` and terminate it if still running.
        ///
        /// Windows processes can linger after being reported dead to the
        /// supervising layer, so the wait state is checked before the
        /// terminate call rather than trusting the report.
        fn reap(&self, pid: ProcessId) -> Result<(), KillError> {
            let handle = OwnedHandle::open(
                pid,
                PROCESS_TERMINATE | PROCESS_SYNCHRONIZE | PROCESS_QUERY_INFORMATION,
            )?;

            let wait = unsafe { WaitForSingleObject(handle.raw(), 0) };
            if wait == WAIT_OBJECT_0 {
                debug!(pid = %pid, "Process already exited, nothing to reap");
                Ok(())
            } else if wait == WAIT_TIMEOUT {
                unsafe { TerminateProcess(handle.raw(), self.kill_exit_code) }.map_err(|e| {
                    KillError::Terminate {
                        pid,
                        source: os_error(e),
                    }
                })?;
                info!(pid = %pid, "Terminated lingering process");
                Ok(())
            } else {
                Err(KillError::Wait {
                    pid,
                    code: wait.0,
                    source: os_error(windows::core::Error::from_win32()),
                })
            }
        }

        /// Force-terminate the target's direct children, then the target.
        ///
        /// Used when the target exposes no cooperative shutdown channel.
        /// One level only; deeper descendants are orphaned to the system.
        fn sweep(&self, pid: ProcessId) -> Result<(), ShutdownError> {
            let children = find_child_processes(pid);
            info!(pid = %pid, children = children.len(), "Sweeping direct children before target");

            for child in children {
                match self.reap(child) {
                    Ok(()) => {}
                    // Children may exit while the sweep runs; skip those.
                    Err(KillError::Open { .. }) => {
                        debug!(pid = %child, "Child gone before sweep reached it");
                    }
                    Err(source) => return Err(ShutdownError::Sweep { pid, source }),
                }
            }

            self.reap(pid)
                .map_err(|source| ShutdownError::Sweep { pid, source })
        }
    }

    #[async_trait]
    impl ProcessController for WindowsProcessController {
        fn isolate(&self, cmd: &mut Command) -> Result<(), ConfigurationError> {
            // New process group: group-targeted console events sent to the
            // parent stop propagating to the child.
            cmd.creation_flags(CREATE_NEW_PROCESS_GROUP.0);
            Ok(())
        }

        async fn shutdown(
            &self,
            intent: ShutdownIntent,
            pid: ProcessId,
        ) -> Result<(), ShutdownError> {
            match intent {
                ShutdownIntent::Cooperative => match &self.notifier {
                    Some(notifier) => notifier.notify().await,
                    None => self.sweep(pid),
                },
                // No direct interrupt equivalent exists for an isolated
                // group; Ctrl-Break is the trappable group-scoped event.
                ShutdownIntent::Forceful => send_ctrl_break(pid),
            }
        }

        async fn kill_tree(&self, pid: ProcessId) -> Result<(), KillError> {
            self.reap(pid)
        }

        fn is_alive(&self, pid: ProcessId) -> bool {
            let Ok(handle) = OwnedHandle::open(pid, PROCESS_SYNCHRONIZE | PROCESS_QUERY_INFORMATION)
            else {
                return false;
            };
            (unsafe { WaitForSingleObject(handle.raw(), 0) }) == WAIT_TIMEOUT
        }
    }
}

// Re-export the Windows implementation when on Windows systems
#[cfg(windows)]
pub use windows_impl::{
    WindowsProcessController, find_child_processes, send_ctrl_break, send_ctrl_c,
};

// Provide a stub for non-Windows systems so the crate still compiles there
#[cfg(not(windows))]
pub struct WindowsProcessController;

#[cfg(not(windows))]
impl WindowsProcessController {
    pub fn new(_config: &proctl_core::ControllerConfig) -> Self {
        Self
    }
}
