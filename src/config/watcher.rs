//! Configuration file watcher for hot reload of the route table.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::config::loader::{load_config, ConfigError};
use crate::routing::RouteTable;

/// Route table shared between dispatchers and the watcher.
pub type SharedRouteTable = Arc<ArcSwap<RouteTable>>;

/// Monitors the configuration file and swaps in a new route table whenever
/// it changes and still validates.
pub struct ConfigWatcher {
    path: PathBuf,
    table: SharedRouteTable,
}

impl ConfigWatcher {
    pub fn new(path: &Path, table: SharedRouteTable) -> Self {
        Self {
            path: path.to_path_buf(),
            table,
        }
    }

    /// Start watching. The returned watcher must be kept alive for as long
    /// as reloads are wanted.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let table = self.table.clone();
        let path = self.path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!("Config file change detected, reloading routes...");
                        if let Err(e) = reload(&path, &table) {
                            tracing::error!(
                                "Failed to reload config: {}. Keeping current routes.",
                                e
                            );
                        }
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Config watcher started");
        Ok(watcher)
    }
}

/// Load `path` and replace the shared table. On error the current table is
/// kept. Returns the number of routes now active.
pub fn reload(path: &Path, table: &ArcSwap<RouteTable>) -> Result<usize, ConfigError> {
    let config = load_config(path)?;
    let next = config.route_table()?;
    let count = next.len();

    table.store(Arc::new(next));
    tracing::info!(routes = count, "Route table reloaded");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_reload_swaps_table() {
        let path = std::env::temp_dir().join(format!(
            "glue-dispatch-watcher-{}.toml",
            std::process::id()
        ));
        let shared: SharedRouteTable = Arc::new(ArcSwap::from_pointee(
            RouteTable::from_pairs([("/old", "old")]).unwrap(),
        ));

        fs::write(&path, "[routes]\n'/new' = \"new\"\n'/other' = \"other\"\n").unwrap();
        assert_eq!(reload(&path, &shared).unwrap(), 2);
        assert!(shared.load().find("/old").is_none());
        assert_eq!(shared.load().find("/new").unwrap().0.handler(), "new");

        // An invalid file leaves the previous table in place.
        fs::write(&path, "[routes]\n'/broken(' = \"x\"\n").unwrap();
        assert!(reload(&path, &shared).is_err());
        assert_eq!(shared.load().len(), 2);

        fs::remove_file(path).unwrap();
    }
}
