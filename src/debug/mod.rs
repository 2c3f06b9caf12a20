pub mod gradient_check;
pub mod numerical_check;

pub use gradient_check::{finite_difference_gradient, gradient_check, gradient_norm, gradient_stats};
pub use numerical_check::{check_gradient, check_strengths, NumericalIssue};
