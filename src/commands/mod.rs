pub mod day;
pub mod export;
pub mod init;
pub mod month;
pub mod notes;
pub mod show;
