pub mod local_catalog;
pub mod open_food_facts;

pub use local_catalog::LocalProductCatalog;
pub use open_food_facts::OpenFoodFactsClient;
