use super::*;
use serde_json::Value;
use std::path::PathBuf;

/// One pretty-printed JSON file per key under a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl Default for FileStore {
    /// `$CHIPSETTLE_HOME`, else `.chipsettle` under the working directory.
    fn default() -> Self {
        match std::env::var(crate::HOME_ENV) {
            Ok(home) if !home.trim().is_empty() => Self::from(PathBuf::from(home)),
            _ => Self::from(std::env::current_dir().unwrap_or_default().join(".chipsettle")),
        }
    }
}

impl From<PathBuf> for FileStore {
    fn from(root: PathBuf) -> Self {
        Self { root }
    }
}

impl FileStore {
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
    /// File backing a key. Anything outside `[A-Za-z0-9._-]` becomes `_`.
    pub fn path(&self, key: &str) -> PathBuf {
        let name = key
            .chars()
            .map(|c| match c {
                'a'..='z' | 'A'..='Z' | '0'..='9' | '.' | '_' | '-' => c,
                _ => '_',
            })
            .collect::<String>();
        self.root.join(format!("{}.json", name))
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Option<Value> {
        let ref path = self.path(key);
        let text = std::fs::read_to_string(path).ok()?;
        serde_json::from_str(&text)
            .inspect_err(|e| log::warn!("ignoring malformed {}: {}", path.display(), e))
            .ok()
    }
    fn set(&mut self, key: &str, value: &Value) -> anyhow::Result<()> {
        let ref path = self.path(key);
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(path, serde_json::to_string_pretty(value)?)
            .inspect_err(|e| log::error!("failed to write {}: {}", path.display(), e))?;
        log::debug!("saved {}", path.display());
        Ok(())
    }
    fn remove(&mut self, key: &str) -> anyhow::Result<()> {
        match std::fs::remove_file(self.path(key)) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn scratch() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::from(dir.path().join("chipsettle"));
        (dir, store)
    }

    #[test]
    fn keys_become_safe_file_names() {
        let store = FileStore::from(PathBuf::from("/tmp/x"));
        assert!(store.path("poker-payout:v1") == PathBuf::from("/tmp/x/poker-payout_v1.json"));
        assert!(store.path("../up") == PathBuf::from("/tmp/x/.._up.json"));
    }
    #[test]
    fn set_get_remove() {
        let (_dir, mut store) = scratch();
        assert!(store.get("poker-payout:v1").is_none());
        store.set("poker-payout:v1", &serde_json::json!({ "rows": [] })).unwrap();
        assert!(store.get("poker-payout:v1") == Some(serde_json::json!({ "rows": [] })));
        store.remove("poker-payout:v1").unwrap();
        assert!(store.get("poker-payout:v1").is_none());
        store.remove("poker-payout:v1").unwrap();
    }
    #[test]
    fn malformed_files_are_absent() {
        let (_dir, store) = scratch();
        std::fs::create_dir_all(store.root()).unwrap();
        std::fs::write(store.path("k"), "{ nope").unwrap();
        assert!(store.get("k").is_none());
    }
    #[test]
    fn files_are_pretty() {
        let (_dir, mut store) = scratch();
        store.set("k", &serde_json::json!({ "a": 1 })).unwrap();
        let text = std::fs::read_to_string(store.path("k")).unwrap();
        assert!(text.contains('\n'));
    }
    #[test]
    fn set_creates_missing_directories() {
        let (dir, mut store) = scratch();
        assert!(!store.root().exists());
        store.set("k", &serde_json::json!(1)).unwrap();
        assert!(store.root().starts_with(dir.path()));
        assert!(store.get("k") == Some(serde_json::json!(1)));
    }
}
