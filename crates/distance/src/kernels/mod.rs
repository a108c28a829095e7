// This module re-exports the handler for each distance variant.

// Scalar loops
pub mod full_loop_op;
pub use full_loop_op::handle_full_loop;
pub mod triangular_loop_op;
pub use triangular_loop_op::handle_triangular_loop;

// Bulk row expressions
pub mod row_full_op;
pub use row_full_op::handle_row_full;
pub mod row_deferred_sqrt_op;
pub use row_deferred_sqrt_op::handle_row_deferred_sqrt;
pub mod row_triangular_op;
pub use row_triangular_op::handle_row_triangular;
pub mod row_triangular_powf_op;
pub use row_triangular_powf_op::handle_row_triangular_powf;
