//! Configuration types for tree walkers

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkerConfig {
    /// Descend into subdirectories. Symlinks are never followed.
    pub recursive: bool,
}
