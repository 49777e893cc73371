//! Temp Upload Cleanup Task
//!
//! Background task that periodically deletes stale temporary upload files.
//!
//! Each tick lists the temp directory, reads every entry's modification
//! time and removes regular files older than the configured age. Failures
//! are logged and recorded in the [`TickReport`]; they never escape the
//! tick, so the task keeps running until it is stopped.

use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use tokio::fs::{self, DirEntry};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use crate::config::default_temp_dir;
use crate::error::ReaperError;

/// Shortest period the scheduler accepts.
const MIN_INTERVAL: Duration = Duration::from_millis(10);

/// Longest period the scheduler accepts; larger intervals are clamped.
const MAX_INTERVAL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

type RemoveFile = fn(PathBuf) -> Pin<Box<dyn Future<Output = io::Result<()>> + Send>>;

fn remove_file(path: PathBuf) -> Pin<Box<dyn Future<Output = io::Result<()>> + Send>> {
    Box::pin(async move { fs::remove_file(path).await })
}

// == Reaper Configuration ==
/// Settings for the temp file reaper.
#[derive(Debug, Clone)]
pub struct ReaperConfig {
    /// Directory scanned on every tick
    pub dir: PathBuf,
    /// Files whose age exceeds this are deleted
    pub max_age: Duration,
    /// Time between ticks
    pub interval: Duration,
    /// Fire the first tick at start instead of one interval later
    pub run_on_start: bool,
}

impl Default for ReaperConfig {
    fn default() -> Self {
        Self {
            dir: default_temp_dir(),
            max_age: Duration::from_secs(60 * 60),
            interval: Duration::from_secs(60 * 60),
            run_on_start: false,
        }
    }
}

// == Tick Report ==
/// Outcome of one cleanup pass.
#[derive(Debug, Default)]
pub struct TickReport {
    /// Directory entries looked at
    pub scanned: usize,
    /// Names of the files removed
    pub deleted: Vec<String>,
    /// Files young enough to keep
    pub kept: usize,
    /// Entries that are not regular files
    pub skipped: usize,
    /// Entries that disappeared before they could be stat-ed or removed
    pub vanished: usize,
    /// Failures caught during the pass
    pub errors: Vec<ReaperError>,
}

impl TickReport {
    fn record_error(&mut self, err: ReaperError) {
        error!(error = %err, "Temp cleanup error");
        self.errors.push(err);
    }

    /// True when nothing failed during the pass.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

// == Reaper ==
/// Deletes stale files from the temp upload directory.
///
/// At most one tick runs at a time per reaper; a tick requested while
/// another is in flight is skipped.
#[derive(Debug)]
pub struct TempFileReaper {
    config: ReaperConfig,
    running: AtomicBool,
    remove: RemoveFile,
}

impl TempFileReaper {
    pub fn new(config: ReaperConfig) -> Self {
        Self {
            config,
            running: AtomicBool::new(false),
            remove: remove_file,
        }
    }

    pub fn config(&self) -> &ReaperConfig {
        &self.config
    }

    /// Runs one cleanup pass against the current time.
    ///
    /// Returns `None` if another tick is still in progress.
    pub async fn tick(&self) -> Option<TickReport> {
        self.tick_at(SystemTime::now()).await
    }

    /// Runs one cleanup pass, measuring file age against `now`.
    pub async fn tick_at(&self, now: SystemTime) -> Option<TickReport> {
        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("Temp cleanup: previous tick still running, skipping");
            return None;
        }
        let _running = RunningGuard(&self.running);

        let report = self.sweep(now).await;

        if !report.deleted.is_empty() {
            info!(
                "Temp cleanup: removed {} stale files ({} scanned)",
                report.deleted.len(),
                report.scanned
            );
        } else {
            debug!("Temp cleanup: no stale files found ({} scanned)", report.scanned);
        }

        Some(report)
    }

    async fn sweep(&self, now: SystemTime) -> TickReport {
        let mut report = TickReport::default();

        let dir = match resolve_dir(&self.config.dir).await {
            Ok(dir) => dir,
            Err(source) => {
                report.record_error(ReaperError::DirectoryAccess {
                    path: self.config.dir.clone(),
                    source,
                });
                return report;
            }
        };

        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(source) => {
                report.record_error(ReaperError::DirectoryAccess { path: dir, source });
                return report;
            }
        };

        loop {
            match entries.next_entry().await {
                Ok(Some(entry)) => self.process_entry(entry, now, &mut report).await,
                Ok(None) => break,
                Err(source) => {
                    report.record_error(ReaperError::DirectoryAccess {
                        path: dir.clone(),
                        source,
                    });
                    break;
                }
            }
        }

        report
    }

    async fn process_entry(&self, entry: DirEntry, now: SystemTime, report: &mut TickReport) {
        report.scanned += 1;
        let name = entry.file_name().to_string_lossy().into_owned();
        let path = entry.path();

        let modified = match entry.metadata().await {
            Ok(metadata) if !metadata.is_file() => {
                report.skipped += 1;
                return;
            }
            Ok(metadata) => metadata.modified(),
            Err(source) => Err(source),
        };
        let modified = match modified {
            Ok(modified) => modified,
            // Removed between listing and stat.
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                report.vanished += 1;
                return;
            }
            Err(source) => {
                report.record_error(ReaperError::Stat { path, source });
                return;
            }
        };

        // Modification times in the future count as fresh.
        let age = now.duration_since(modified).unwrap_or(Duration::ZERO);
        if age <= self.config.max_age {
            report.kept += 1;
            return;
        }

        match (self.remove)(path.clone()).await {
            Ok(()) => {
                info!(file = %name, "Deleted stale temp file");
                report.deleted.push(name);
            }
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                debug!(file = %name, "Stale temp file already removed");
                report.vanished += 1;
            }
            Err(source) => report.record_error(ReaperError::Delete { path, source }),
        }
    }
}

struct RunningGuard<'a>(&'a AtomicBool);

impl Drop for RunningGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

async fn resolve_dir(dir: &Path) -> io::Result<PathBuf> {
    let dir = fs::canonicalize(dir).await?;
    if !fs::metadata(&dir).await?.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "temp path is not a directory",
        ));
    }
    Ok(dir)
}

// == Scheduler ==
/// Running periodic cleanup task.
///
/// Dropping the handle without calling [`ReaperHandle::stop`] also ends the
/// task at its next wake-up.
#[derive(Debug)]
pub struct ReaperHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl ReaperHandle {
    /// Spawns the periodic cleanup task on the tokio runtime.
    ///
    /// The first tick fires one full interval after start unless
    /// `run_on_start` is set.
    ///
    /// # Example
    /// ```ignore
    /// let reaper = Arc::new(TempFileReaper::new(config.reaper_config()));
    /// let handle = ReaperHandle::start(reaper);
    /// // Later, during shutdown:
    /// handle.stop().await;
    /// ```
    pub fn start(reaper: Arc<TempFileReaper>) -> Self {
        let (shutdown, mut shutdown_rx) = watch::channel(false);
        let period = reaper.config().interval.clamp(MIN_INTERVAL, MAX_INTERVAL);
        let now = Instant::now();
        let first = if reaper.config().run_on_start {
            now
        } else {
            now.checked_add(period).unwrap_or(now + MAX_INTERVAL)
        };

        let task = tokio::spawn(async move {
            info!(
                "Starting temp cleanup task for {} with interval of {:?}",
                reaper.config().dir.display(),
                period
            );

            let mut ticker = interval_at(first, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        reaper.tick().await;
                    }
                    _ = shutdown_rx.changed() => break,
                }
            }

            info!("Temp cleanup task stopped");
        });

        Self { shutdown, task }
    }

    /// Signals the task to stop and waits for it to finish.
    ///
    /// A tick already in progress runs to completion first.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        if let Err(err) = self.task.await {
            warn!("Temp cleanup task ended abnormally: {}", err);
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}
