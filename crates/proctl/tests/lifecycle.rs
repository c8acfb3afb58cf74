//! End-to-end lifecycle flow through the platform facade.

#![cfg(unix)]

use proctl::{ControllerConfig, PlatformControllerFactory, ProcessController, ShutdownIntent};
use std::os::unix::process::ExitStatusExt;
use tokio::process::Command;

#[tokio::test]
async fn full_lifecycle_isolate_shutdown_escalate() {
    let _ = tracing_subscriber::fmt().try_init();

    let ctl = PlatformControllerFactory::create_controller(&ControllerConfig::default()).unwrap();

    let mut cmd = Command::new("sleep");
    cmd.arg("30").kill_on_drop(true);
    ctl.isolate(&mut cmd).unwrap();
    let mut child = cmd.spawn().unwrap();
    let pid = child.id().unwrap();
    assert!(ctl.is_alive(pid));

    ctl.shutdown(ShutdownIntent::Cooperative, pid).await.unwrap();

    let status = child.wait().await.unwrap();
    assert!(status.signal().is_some());

    // Escalation after exit is a no-op, twice.
    ctl.kill_tree(pid).await.unwrap();
    ctl.kill_tree(pid).await.unwrap();
    assert!(!ctl.is_alive(pid));
}
