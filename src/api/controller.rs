pub mod home_controller;
pub mod message_controller;
pub mod utils_controller;
