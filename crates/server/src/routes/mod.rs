pub mod assignment;
pub mod classes;
pub mod health;
pub mod reference;
pub mod registry;
