pub mod catalog;
pub mod errors;

pub use catalog::{
    Category,
    Product,
    Review,
};
pub use errors::VitrineError;
