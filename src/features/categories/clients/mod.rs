mod fred_client;

pub use fred_client::{CategoryListing, FredClient, BASE_URL, ROOT_CATEGORY_ID};
