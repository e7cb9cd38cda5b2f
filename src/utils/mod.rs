//! Matrix helpers shared by the solver and the extrapolation policies.

mod matrix;

pub use matrix::{
    append_ones_column, invert_symmetric, rows_off_minima, select_columns, select_entries,
    select_rows,
};
