// Catalog layer — data models, the requirement provider trait, and the
// sources the demo data can come from (built-in seed or a JSON fixture).

pub mod file;
pub mod models;
pub mod seed;
pub mod traits;
