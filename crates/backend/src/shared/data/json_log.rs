use anyhow::Context;
use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Append-only журнал в виде JSON-массива в одном файле
///
/// Каждая запись: полное чтение, добавление и перезапись файла. Внутри
/// процесса записи в один файл идут строго по очереди через `lock`.
/// Новое содержимое пишется во временный файл рядом и переименовывается
/// поверх старого, так что файл журнала всегда целый.
#[derive(Debug)]
pub struct JsonLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Создать файл с пустым массивом, если его нет
    pub async fn ensure_exists(&self) -> anyhow::Result<()> {
        if tokio::fs::try_exists(&self.path).await? {
            return Ok(());
        }
        tokio::fs::write(&self.path, "[]")
            .await
            .with_context(|| format!("create {}", self.path.display()))?;
        tracing::info!("Created empty log {}", self.path.display());
        Ok(())
    }

    /// Дописать запись в конец журнала
    pub async fn append<T: Serialize>(&self, record: &T) -> anyhow::Result<()> {
        let value = serde_json::to_value(record)?;
        let _guard = self.lock.lock().await;
        let mut all = self.read_values().await?;
        all.push(value);
        let raw = serde_json::to_string_pretty(&all)?;
        let tmp = self.tmp_path();
        tokio::fs::write(&tmp, raw)
            .await
            .with_context(|| format!("write {}", tmp.display()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .with_context(|| format!("replace {}", self.path.display()))?;
        Ok(())
    }

    /// Последняя запись журнала, если она есть
    pub async fn last<T: DeserializeOwned>(&self) -> anyhow::Result<Option<T>> {
        let mut all = self.read_values().await?;
        match all.pop() {
            Some(v) => Ok(Some(serde_json::from_value(v)?)),
            None => Ok(None),
        }
    }

    pub async fn len(&self) -> anyhow::Result<usize> {
        Ok(self.read_values().await?.len())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn read_values(&self) -> anyhow::Result<Vec<serde_json::Value>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("read {}", self.path.display()))?;
        let all = serde_json::from_str(&raw)
            .with_context(|| format!("parse {}", self.path.display()))?;
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_ensure_exists_creates_empty_array_once() {
        let dir = tempfile::tempdir().unwrap();
        let log = JsonLog::new(dir.path().join("gifts.json"));
        log.ensure_exists().await.unwrap();
        assert_eq!(std::fs::read_to_string(log.path()).unwrap(), "[]");

        log.append(&json!({"to": "a"})).await.unwrap();
        log.ensure_exists().await.unwrap();
        assert_eq!(log.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_last_returns_most_recent() {
        let dir = tempfile::tempdir().unwrap();
        let log = JsonLog::new(dir.path().join("carts.json"));
        log.ensure_exists().await.unwrap();
        assert_eq!(log.last::<serde_json::Value>().await.unwrap(), None);

        log.append(&json!({"n": 1})).await.unwrap();
        log.append(&json!({"n": 2})).await.unwrap();
        let last: serde_json::Value = log.last().await.unwrap().unwrap();
        assert_eq!(last["n"], 2);
    }

    #[tokio::test]
    async fn test_concurrent_appends_are_not_lost() {
        let dir = tempfile::tempdir().unwrap();
        let log = Arc::new(JsonLog::new(dir.path().join("contacts.json")));
        log.ensure_exists().await.unwrap();

        let mut tasks = Vec::new();
        for i in 0..20 {
            let log = log.clone();
            tasks.push(tokio::spawn(async move {
                log.append(&json!({ "i": i })).await.unwrap();
            }));
        }
        for t in tasks {
            t.await.unwrap();
        }
        assert_eq!(log.len().await.unwrap(), 20);
    }

    #[tokio::test]
    async fn test_append_replaces_file_via_temp_copy() {
        let dir = tempfile::tempdir().unwrap();
        let log = JsonLog::new(dir.path().join("carts.json"));
        log.ensure_exists().await.unwrap();

        // leftover of an interrupted write
        let tmp = dir.path().join("carts.json.tmp");
        std::fs::write(&tmp, "[{\"half").unwrap();

        log.append(&json!({"n": 1})).await.unwrap();
        assert!(!tmp.exists());
        assert_eq!(log.len().await.unwrap(), 1);
        let raw = std::fs::read_to_string(log.path()).unwrap();
        assert!(serde_json::from_str::<serde_json::Value>(&raw).is_ok());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        std::fs::write(&path, "{ not an array").unwrap();
        let log = JsonLog::new(path);
        assert!(log.append(&json!({})).await.is_err());
        assert!(log.last::<serde_json::Value>().await.is_err());
    }
}
