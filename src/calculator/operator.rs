/// Operator behaviors for the standard operator set.
///
/// Each behavior is a plain function taking the left operand, the right
/// operand (ignored by unary operators), and the operator position.
pub mod builtin;
/// Operator descriptors, the operator table, and the standard operator set.
pub mod core;
