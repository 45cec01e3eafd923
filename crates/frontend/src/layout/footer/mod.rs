pub mod footer;

pub use footer::BottomNav;
