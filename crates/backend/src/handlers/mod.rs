pub mod a001_product;
pub mod a002_cart;
pub mod a003_submission;
pub mod health;
