pub mod user_display;
pub mod user_link;
pub mod user_picture;

pub use user_display::present_user_display;
pub use user_link::present_user_link;
pub use user_picture::present_user_picture;
