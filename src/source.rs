pub mod csv;
pub mod s3;
pub mod text;
