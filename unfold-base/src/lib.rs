mod error;
mod scalar;


pub use error::{err, Error, Result};
pub use scalar::Scalar;
