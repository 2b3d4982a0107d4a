mod income_calculator;
mod income_model;


pub use income_calculator::*;
pub use income_model::*;
