pub mod memory;
pub mod repository;
pub mod service;

pub use memory::InMemoryMaterialCostRepository;
pub use repository::{MaterialCostRepository, SeaOrmMaterialCostRepository};
pub use service::{MaterialCostService, MaterialCostServiceImpl};
