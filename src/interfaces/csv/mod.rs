pub mod batch;
pub mod reader;
pub mod writer;
