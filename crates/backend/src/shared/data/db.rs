use anyhow::Context;
use std::path::{Path, PathBuf};

use super::json_log::JsonLog;

pub const PRODUCTS_FILE: &str = "products.json";
pub const CONTACTS_FILE: &str = "contacts.json";
pub const USERS_FILE: &str = "users.json";
pub const CARTS_FILE: &str = "carts.json";
pub const GIFTS_FILE: &str = "gifts.json";

/// Файловая "база": каталог товаров и журналы форм/корзин в одном каталоге
#[derive(Debug)]
pub struct Database {
    dir: PathBuf,
    pub contacts: JsonLog,
    pub users: JsonLog,
    pub carts: JsonLog,
    pub gifts: JsonLog,
}

impl Database {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            contacts: JsonLog::new(dir.join(CONTACTS_FILE)),
            users: JsonLog::new(dir.join(USERS_FILE)),
            carts: JsonLog::new(dir.join(CARTS_FILE)),
            gifts: JsonLog::new(dir.join(GIFTS_FILE)),
            dir,
        }
    }

    pub fn products_path(&self) -> PathBuf {
        self.dir.join(PRODUCTS_FILE)
    }

    fn logs(&self) -> [&JsonLog; 4] {
        [&self.contacts, &self.users, &self.carts, &self.gifts]
    }
}

/// Создать каталог данных и пустые журналы.
///
/// Файл товаров здесь не трогается: его генерирует
/// [`crate::domain::a001_product::repository::ensure_products`].
pub async fn initialize_database(dir: &Path) -> anyhow::Result<Database> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("create data dir {}", dir.display()))?;

    let db = Database::new(dir);
    for log in db.logs() {
        log.ensure_exists().await?;
    }
    tracing::info!("Data directory ready: {}", dir.display());
    Ok(db)
}
