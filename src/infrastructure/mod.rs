pub mod file_message_repository;
pub mod repository;
