pub mod assignment;
pub mod class;
pub mod registry;
