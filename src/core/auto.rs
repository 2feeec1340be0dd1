//! Auto mode: recurring random color generation
//!
//! [`AutoGenerator`] runs a background thread that draws a random color on a
//! fixed interval and sends it to the owner as an [`AutoEvent`]. The thread
//! never touches application state; the owner applies each color to its own
//! [`GeneratorState`](crate::core::state::GeneratorState).
//!
//! ```rust,no_run
//! use color_generator::core::auto::{AutoConfig, AutoEvent, AutoGenerator};
//! use std::time::Duration;
//!
//! let mut generator = AutoGenerator::new(AutoConfig::default().with_max_colors(3));
//! generator.start()?;
//! while let Some(event) = generator.recv_event_timeout(Duration::from_secs(10)) {
//!     match event {
//!         AutoEvent::Generated { color, .. } => println!("{}", color),
//!         AutoEvent::Finished { .. } => break,
//!     }
//! }
//! generator.stop();
//! # Ok::<(), color_generator::core::error::GeneratorError>(())
//! ```

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, info, trace};

use crate::color::{generate_random_hex, HexColor};
use crate::core::config::AutoModeConfig;
use crate::core::error::{GeneratorError, Result};

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for the auto generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoConfig {
    /// Delay between generated colors
    pub interval: Duration,
    /// Stop after this many colors (0 = run until stopped)
    pub max_colors: u64,
}

impl Default for AutoConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(3000),
            max_colors: 0,
        }
    }
}

impl From<&AutoModeConfig> for AutoConfig {
    fn from(config: &AutoModeConfig) -> Self {
        Self {
            interval: Duration::from_millis(config.interval_ms),
            max_colors: config.max_colors,
        }
    }
}

impl AutoConfig {
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_max_colors(mut self, max_colors: u64) -> Self {
        self.max_colors = max_colors;
        self
    }
}

// =============================================================================
// Events
// =============================================================================

/// Events sent from the generator thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoEvent {
    /// A new color was generated; `sequence` counts from 1 per run
    Generated { color: HexColor, sequence: u64 },
    /// The run reached `max_colors` and the thread exited
    Finished { generated: u64 },
}

// =============================================================================
// Auto Generator
// =============================================================================

/// Cancellable recurring color generator
///
/// Stopping wakes the worker immediately instead of waiting out the current
/// interval. Dropping a running generator stops it.
#[derive(Debug)]
pub struct AutoGenerator {
    /// Configuration
    config: AutoConfig,
    /// Event sender handed to each worker
    event_tx: Sender<AutoEvent>,
    /// Event receiver for the owner
    event_rx: Receiver<AutoEvent>,
    /// Wakes the worker to stop it
    stop_tx: Option<Sender<()>>,
    /// Worker thread handle
    thread_handle: Option<JoinHandle<()>>,
}

impl Default for AutoGenerator {
    fn default() -> Self {
        Self::new(AutoConfig::default())
    }
}

impl AutoGenerator {
    pub fn new(config: AutoConfig) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        Self {
            config,
            event_tx,
            event_rx,
            stop_tx: None,
            thread_handle: None,
        }
    }

    pub fn config(&self) -> &AutoConfig {
        &self.config
    }

    /// Start generating colors in the background
    ///
    /// # Errors
    ///
    /// Fails if the generator is already running or the thread cannot be
    /// spawned.
    pub fn start(&mut self) -> Result<()> {
        if self.is_running() {
            return Err(GeneratorError::AutoModeError(
                "Auto mode is already running".to_string(),
            ));
        }
        // Reap a worker that finished on its own
        self.join_worker();

        let (stop_tx, stop_rx) = mpsc::channel();
        let config = self.config.clone();
        let event_tx = self.event_tx.clone();

        let handle = thread::Builder::new()
            .name("auto-generator".to_string())
            .spawn(move || Self::generate_loop(config, stop_rx, event_tx))
            .map_err(|e| {
                GeneratorError::AutoModeError(format!("Failed to spawn auto mode thread: {}", e))
            })?;

        self.stop_tx = Some(stop_tx);
        self.thread_handle = Some(handle);
        info!(
            "Auto mode started (every {} ms)",
            self.config.interval.as_millis()
        );
        Ok(())
    }

    /// Stop generating and wait for the worker to exit
    pub fn stop(&mut self) {
        if self.thread_handle.is_none() {
            return;
        }

        debug!("Stopping auto mode...");
        if let Some(stop_tx) = self.stop_tx.take() {
            // The worker may already be gone after reaching max_colors
            let _ = stop_tx.send(());
        }
        self.join_worker();
        info!("Auto mode stopped");
    }

    /// Change the interval, restarting the worker if it is running
    pub fn set_interval(&mut self, interval: Duration) -> Result<()> {
        self.config.interval = interval;
        if self.is_running() {
            self.stop();
            self.start()?;
        }
        Ok(())
    }

    /// Whether the worker thread is alive
    pub fn is_running(&self) -> bool {
        self.thread_handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Try to receive the next event (non-blocking)
    pub fn try_recv_event(&self) -> Option<AutoEvent> {
        match self.event_rx.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Receive event with timeout
    pub fn recv_event_timeout(&self, timeout: Duration) -> Option<AutoEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    /// Drain all pending events
    pub fn drain_events(&self) -> Vec<AutoEvent> {
        std::iter::from_fn(|| self.try_recv_event()).collect()
    }

    fn join_worker(&mut self) {
        self.stop_tx = None;
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }

    /// The worker loop; waits on the stop channel between colors
    fn generate_loop(config: AutoConfig, stop_rx: Receiver<()>, event_tx: Sender<AutoEvent>) {
        let mut generated = 0u64;

        loop {
            match stop_rx.recv_timeout(config.interval) {
                Err(RecvTimeoutError::Timeout) => {}
                Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                    debug!("Auto mode shutdown requested after {} colors", generated);
                    return;
                }
            }

            generated += 1;
            let color = generate_random_hex();
            trace!("Auto mode generated {} (#{})", color, generated);

            if event_tx
                .send(AutoEvent::Generated {
                    color,
                    sequence: generated,
                })
                .is_err()
            {
                return;
            }

            if config.max_colors > 0 && generated >= config.max_colors {
                let _ = event_tx.send(AutoEvent::Finished { generated });
                return;
            }
        }
    }
}

impl Drop for AutoGenerator {
    fn drop(&mut self) {
        self.stop();
    }
}
