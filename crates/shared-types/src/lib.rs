pub mod consultation;
pub mod error;
pub mod lawyer;
pub mod models;

pub use consultation::*;
pub use error::*;
pub use lawyer::*;
pub use models::*;
