use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a001_product::query::{ProductListParams, ProductListResponse};

pub const PAGE_SIZE_OPTIONS: [usize; 4] = [50, 100, 200, 500];
const DEFAULT_PAGE_SIZE: usize = 50;

/// Активные фильтры витрины
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub q: String,
    pub category: String,
    pub deal: bool,
}

impl CatalogFilter {
    /// Only today's deals, all categories
    pub fn deals() -> Self {
        Self {
            deal: true,
            ..Default::default()
        }
    }

    /// Deals within one category
    pub fn category_deals(category: &str) -> Self {
        Self {
            category: category.to_string(),
            deal: true,
            ..Default::default()
        }
    }

    /// Поиск по автору: текст по названию, только книги
    pub fn author(author: &str) -> Self {
        Self {
            q: author.trim().to_string(),
            category: "Books".to_string(),
            deal: false,
        }
    }
}

/// A page request issued by the list; `seq` identifies the generation of
/// the list it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub seq: u64,
    pub params: ProductListParams,
}

/// Состояние списка товаров на витрине
#[derive(Clone, Debug)]
pub struct CatalogListState {
    pub filter: CatalogFilter,
    pub page_size: usize,
    pub products: Vec<Product>,
    pub offset: usize,
    /// `None` until the first page of the current list arrives
    pub total: Option<usize>,
    pub loading: bool,
    seq: u64,
}

impl Default for CatalogListState {
    fn default() -> Self {
        Self {
            filter: CatalogFilter::default(),
            page_size: DEFAULT_PAGE_SIZE,
            products: Vec::new(),
            offset: 0,
            total: None,
            loading: false,
            seq: 0,
        }
    }
}

impl CatalogListState {
    /// Start a fresh list for `filter`. Always issues a request; any response
    /// still in flight for the previous list becomes stale.
    pub fn reset(&mut self, filter: CatalogFilter) -> PageRequest {
        self.filter = filter;
        self.seq += 1;
        self.products.clear();
        self.offset = 0;
        self.total = None;
        self.loading = true;
        self.request()
    }

    /// Same filter, new page size
    pub fn set_page_size(&mut self, page_size: usize) -> PageRequest {
        self.page_size = page_size.max(1);
        let filter = self.filter.clone();
        self.reset(filter)
    }

    /// Next page of the current list, unless a page is already loading or
    /// everything has been loaded.
    pub fn next_page(&mut self) -> Option<PageRequest> {
        if self.loading || !self.has_more() {
            return None;
        }
        self.loading = true;
        Some(self.request())
    }

    /// Apply a response. Returns `false` when it belongs to an older list
    /// and was dropped.
    pub fn apply(&mut self, seq: u64, result: Result<ProductListResponse, String>) -> bool {
        if seq != self.seq {
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.offset += page.results.len();
                self.products.extend(page.results);
                self.total = Some(page.total);
            }
            Err(e) => log::error!("fetch products failed: {}", e),
        }
        true
    }

    pub fn has_more(&self) -> bool {
        match self.total {
            Some(total) => self.offset < total,
            None => true,
        }
    }

    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn results_text(&self) -> String {
        match self.total {
            Some(total) if total > 0 => format!("{} results", total),
            _ => String::new(),
        }
    }

    fn request(&self) -> PageRequest {
        let f = &self.filter;
        PageRequest {
            seq: self.seq,
            params: ProductListParams {
                q: (!f.q.is_empty()).then(|| f.q.clone()),
                category: (!f.category.is_empty()).then(|| f.category.clone()),
                deal: f.deal.then(|| "true".to_string()),
                limit: Some(self.page_size.to_string()),
                offset: Some(self.offset.to_string()),
            },
        }
    }
}
