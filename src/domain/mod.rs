pub mod models;
pub mod routes;
pub mod views;
pub mod dispatcher;
pub mod navigation;
pub mod errors;

pub use models::*;
pub use views::*;
pub use navigation::*;
pub use errors::*;
