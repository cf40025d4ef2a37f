pub mod error;
pub mod geojson;
pub mod ocit;
pub mod pipeline;
pub mod publish;
