use std::sync::Arc;

use crate::domain::a001_product::service::Catalog;
use crate::shared::data::db::Database;

/// Состояние, общее для всех обработчиков
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub db: Arc<Database>,
}

impl AppState {
    pub fn new(catalog: Catalog, db: Database) -> Self {
        Self {
            catalog: Arc::new(catalog),
            db: Arc::new(db),
        }
    }
}
