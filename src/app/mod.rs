pub mod workbench;

pub use workbench::{OpenContainer, Workbench};
