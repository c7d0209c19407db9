pub mod media;
pub mod storage;
pub mod time;
