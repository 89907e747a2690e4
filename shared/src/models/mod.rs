//! Domain models shared between server and client

pub mod product;

pub use product::{ProductDetails, ProductField, ProductRecord};
