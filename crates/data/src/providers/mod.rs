//! Fee-average feed implementations.

mod position_manager_api;

pub use position_manager_api::{
    FeeAverageClientConfig, POSITION_MANAGER_API_ENV, PositionManagerApiProvider,
};
