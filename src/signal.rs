use crate::cancel::CancellationToken;
use crate::error::Result;
use crate::{verbose, warn};
use tokio::runtime::{Builder, Runtime};

/// Starts a background runtime that turns Ctrl+C into a cancellation request.
///
/// The interrupt handler is registered before this returns, so from then on
/// the default terminate-on-interrupt behaviour is replaced and the process
/// keeps running until the controller has cleaned up. Repeated presses are
/// ignored. The returned runtime must be kept alive for as long as interrupts
/// should reach the token.
pub fn spawn_interrupt_listener(token: CancellationToken) -> Result<Runtime> {
    let runtime = Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("interrupt-listener")
        .enable_all()
        .build()?;

    let mut interrupts = {
        let _context = runtime.enter();
        register_interrupts()?
    };

    runtime.spawn(async move {
        while interrupts.recv().await.is_some() {
            if token.cancel() {
                warn!("Interrupt received, finishing in-flight files before cleanup...");
            } else {
                verbose!("Interrupt received again, already cancelling");
            }
        }
        verbose!("Interrupt stream closed");
    });

    Ok(runtime)
}

#[cfg(unix)]
fn register_interrupts() -> std::io::Result<tokio::signal::unix::Signal> {
    tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt())
}

#[cfg(windows)]
fn register_interrupts() -> std::io::Result<tokio::signal::windows::CtrlC> {
    tokio::signal::windows::ctrl_c()
}
