use std::sync::OnceLock;

use tracing::Level;

static INIT_GUARD: OnceLock<Result<(), String>> = OnceLock::new();

/// Installs the global fmt subscriber once per process.
///
/// Later calls are no-ops, whatever level they ask for. A subscriber installed
/// by someone else first is left in place.
pub fn init_tracing(level: Level) {
    let result = INIT_GUARD.get_or_init(|| {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(true)
            .try_init()
            .map_err(|err| err.to_string())
    });

    if let Err(err) = result {
        tracing::warn!("failed to initialise tracing subscriber: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_tracing(Level::DEBUG);
        init_tracing(Level::INFO);
        assert!(INIT_GUARD.get().is_some());
    }
}
