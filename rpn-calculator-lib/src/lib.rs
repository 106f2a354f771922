pub mod interpreter;

pub use interpreter::error::CalculatorError;
pub use interpreter::number::Number;
pub use interpreter::solve;
