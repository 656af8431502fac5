pub mod diagnostics;
pub mod series;
