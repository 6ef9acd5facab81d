pub mod errors;
pub mod db;
pub mod material_cost;
