mod category;

pub use category::{CategoryRow, TABLE_NAME};
