//! Logger-tree registry: lazy hierarchical node creation and bulk
//! reconfiguration

use super::{
    error::{LoggerError, Result},
    logger::{Logger, LoggerHandle},
    severity::Severity,
    sink::SinkHandle,
};
use lock_api::{GuardNoSend, RawMutex};
use std::collections::HashMap;
use std::iter;
use std::marker::PhantomData;
use std::sync::Arc;

pub const DEFAULT_DELIMITER: char = '.';
pub const DEFAULT_ROOT_NAME: &str = "root";

/// Registry of hierarchical loggers keyed by delimited names.
///
/// Nodes are created lazily: asking for `svc.http.server` materializes
/// `svc`, `svc.http` and `svc.http.server` in root-to-leaf order, each new
/// node snapshotting the severity and sink list of its nearest existing
/// ancestor at that instant. The same name always resolves to the same
/// instance for the registry's lifetime; nodes are never removed.
///
/// The locking strategy is a type parameter so the single-threaded no-op
/// variant is picked at construction, not per call. Use the
/// [`SharedLoggerTree`] and [`LocalLoggerTree`] aliases. Ancestor resolution
/// walks the name iteratively under one lock acquisition, so the lock never
/// needs to be re-entrant.
pub struct LoggerTreeRegistry<R: RawMutex> {
    delimiter: char,
    root: LoggerHandle,
    tree: lock_api::Mutex<R, HashMap<String, LoggerHandle>>,
}

/// Registry guarded by a real mutex; safe to share across threads.
pub type SharedLoggerTree = LoggerTreeRegistry<parking_lot::RawMutex>;

/// Registry with a no-op lock. [`NoopRawMutex`] is `!Send + !Sync`, so this
/// variant cannot leave the thread that built it.
pub type LocalLoggerTree = LoggerTreeRegistry<NoopRawMutex>;

impl<R: RawMutex> LoggerTreeRegistry<R> {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DELIMITER, DEFAULT_ROOT_NAME)
    }

    pub fn with_delimiter(delimiter: char) -> Self {
        Self::with_config(delimiter, DEFAULT_ROOT_NAME)
    }

    pub fn with_config(delimiter: char, root_name: impl Into<String>) -> Self {
        Self {
            delimiter,
            root: Arc::new(Logger::new(root_name)),
            tree: lock_api::Mutex::new(HashMap::new()),
        }
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// The distinguished root logger. It is not part of [`logger_list`]
    /// and is the inheritance source for any name without a delimiter.
    ///
    /// [`logger_list`]: Self::logger_list
    pub fn root_logger(&self) -> LoggerHandle {
        Arc::clone(&self.root)
    }

    /// Return the logger registered under `name`, creating it and every
    /// missing ancestor first.
    ///
    /// Repeated calls with the same name return the same instance. Racing
    /// calls for an unseen name are linearized by the registry lock: exactly
    /// one thread creates the node, the other observes it.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_logger_tree::SharedLoggerTree;
    /// use std::sync::Arc;
    ///
    /// let registry = SharedLoggerTree::new();
    /// let logger = registry.get_or_create("svc.http.server");
    /// assert!(Arc::ptr_eq(&logger, &registry.get_or_create("svc.http.server")));
    /// assert_eq!(registry.logger_list().len(), 3);
    /// ```
    pub fn get_or_create(&self, name: &str) -> LoggerHandle {
        let mut tree = self.tree.lock();
        if let Some(existing) = tree.get(name) {
            return Arc::clone(existing);
        }

        // Walk the ancestor prefixes root-to-leaf. Boundaries are the
        // delimiter positions, so "a..b" resolves through "a" and "a.".
        let mut node = Arc::clone(&self.root);
        let boundaries = name
            .match_indices(self.delimiter)
            .map(|(at, _)| at)
            .chain(iter::once(name.len()));
        for end in boundaries {
            let prefix = &name[..end];
            node = match tree.get(prefix) {
                Some(existing) => Arc::clone(existing),
                None => {
                    let created: LoggerHandle =
                        Arc::new(Logger::with_state(prefix, node.severity(), node.sinks()));
                    tree.insert(prefix.to_owned(), Arc::clone(&created));
                    created
                }
            };
        }
        node
    }

    /// Read-only snapshot of the registered name→logger mapping.
    /// The root logger is addressed separately and excluded here.
    pub fn logger_list(&self) -> HashMap<String, LoggerHandle> {
        self.tree.lock().clone()
    }

    /// Set the severity of `branch_root` and of every registered node
    /// inside its branch.
    ///
    /// Fails with [`LoggerError::UnregisteredKey`] and mutates nothing if
    /// `branch_root` itself is not registered.
    pub fn set_branch_severity(&self, branch_root: &str, severity: Severity) -> Result<()> {
        let tree = self.tree.lock();
        if !tree.contains_key(branch_root) {
            return Err(LoggerError::unregistered_key(branch_root));
        }
        for (name, logger) in tree.iter() {
            if self.in_branch(name, branch_root) {
                logger.set_severity(severity);
            }
        }
        Ok(())
    }

    /// Set the severity of the root logger and of every registered node.
    pub fn set_tree_severity(&self, severity: Severity) {
        let tree = self.tree.lock();
        self.root.set_severity(severity);
        for logger in tree.values() {
            logger.set_severity(severity);
        }
    }

    /// Append `sink` to `branch_root` and to every registered node inside
    /// its branch. Same failure behavior as [`set_branch_severity`].
    ///
    /// [`set_branch_severity`]: Self::set_branch_severity
    pub fn add_branch_sink(&self, branch_root: &str, sink: SinkHandle) -> Result<()> {
        let tree = self.tree.lock();
        if !tree.contains_key(branch_root) {
            return Err(LoggerError::unregistered_key(branch_root));
        }
        for (name, logger) in tree.iter() {
            if self.in_branch(name, branch_root) {
                logger.add_sink(Arc::clone(&sink));
            }
        }
        Ok(())
    }

    /// Append `sink` to the root logger and to every registered node.
    pub fn add_tree_sink(&self, sink: SinkHandle) {
        let tree = self.tree.lock();
        self.root.add_sink(Arc::clone(&sink));
        for logger in tree.values() {
            logger.add_sink(Arc::clone(&sink));
        }
    }

    // Branch membership is segment-aware: the branch root matches itself and
    // names that continue with the delimiter, so "svc" never captures
    // "svc2.http".
    fn in_branch(&self, name: &str, branch_root: &str) -> bool {
        match name.strip_prefix(branch_root) {
            Some("") => true,
            Some(rest) => rest.starts_with(self.delimiter),
            None => false,
        }
    }
}

impl<R: RawMutex> Default for LoggerTreeRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Lock that does nothing, for registries confined to one thread.
///
/// The raw pointer marker keeps the type `!Send + !Sync`, which makes the
/// compiler reject any attempt to share a [`LocalLoggerTree`] across
/// threads instead of silently skipping the locking.
pub struct NoopRawMutex {
    _single_thread: PhantomData<*const ()>,
}

unsafe impl RawMutex for NoopRawMutex {
    const INIT: NoopRawMutex = NoopRawMutex {
        _single_thread: PhantomData,
    };

    type GuardMarker = GuardNoSend;

    fn lock(&self) {}

    fn try_lock(&self) -> bool {
        true
    }

    unsafe fn unlock(&self) {}
}
