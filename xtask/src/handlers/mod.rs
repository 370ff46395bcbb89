pub mod ci;
pub mod testing;
