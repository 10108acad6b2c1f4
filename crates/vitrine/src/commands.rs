pub mod demo;
pub mod info;
pub mod init;
pub mod list;
pub mod probe;
