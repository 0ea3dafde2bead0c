pub mod mann_whitney;

pub use mann_whitney::{compare, mann_whitney_u, RankTable, UStatistic, U_CRITICAL};
