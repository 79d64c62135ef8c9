//! Idle-timer suppression: keeps the display awake while the timer runs

use std::future::Future;
use tokio::process::{Child, Command};
use tracing::{debug, info};

/// Something that can keep the display from dimming
pub trait IdleLock: Send {
    /// Take the lock. Idempotent.
    fn acquire(&mut self) -> impl Future<Output = Result<(), String>> + Send;
    /// Drop the lock. Idempotent.
    fn release(&mut self) -> impl Future<Output = Result<(), String>> + Send;
    fn is_held(&self) -> bool;
}

/// Holds a `systemd-inhibit` idle lock for as long as the child process lives
#[derive(Debug, Default)]
pub struct IdleInhibitor {
    child: Option<Child>,
}

impl IdleInhibitor {
    pub fn new() -> Self {
        Self { child: None }
    }
}

impl IdleLock for IdleInhibitor {
    fn is_held(&self) -> bool {
        self.child.is_some()
    }

    async fn acquire(&mut self) -> Result<(), String> {
        if self.is_held() {
            debug!("Idle inhibitor already held");
            return Ok(());
        }

        let child = Command::new("systemd-inhibit")
            .args([
                "--what=idle",
                "--who=custom-timer",
                "--why=Interval timer running",
                "--mode=block",
                "sleep",
                "infinity",
            ])
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| format!("Failed to execute systemd-inhibit: {}", e))?;

        self.child = Some(child);
        info!("Idle inhibitor acquired, display will stay awake");
        Ok(())
    }

    async fn release(&mut self) -> Result<(), String> {
        let Some(mut child) = self.child.take() else {
            return Ok(());
        };

        child
            .kill()
            .await
            .map_err(|e| format!("Failed to stop systemd-inhibit: {}", e))?;

        info!("Idle inhibitor released");
        Ok(())
    }
}
