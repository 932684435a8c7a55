pub mod linear_model;

pub use linear_model::LinearConsumptionModel;
