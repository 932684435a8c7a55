pub mod barcode;
pub mod classifier;
pub mod llm;
