pub mod navigation;
pub mod user;

pub use navigation::*;
pub use user::*;
