pub mod message_response;
