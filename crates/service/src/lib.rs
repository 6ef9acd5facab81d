//! Service layer for material costs.
//! - `MaterialCostService` is the contract the HTTP layer calls.
//! - Repositories hide whether rows live in Postgres or in process memory.
//! - `ServiceError` separates domain signals from unexpected faults.

pub mod errors;
pub mod material_cost;
