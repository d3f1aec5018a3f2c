// Domain layer - temperature series model, no I/O
pub mod error;
pub mod summary;
pub mod temperature_series;
