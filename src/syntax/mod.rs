pub mod types;

pub use types::{Assignment, TreeDescription, TreeShape};
