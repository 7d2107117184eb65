pub mod message;
pub mod sns;
