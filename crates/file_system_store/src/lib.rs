mod file_system_store;

pub use self::file_system_store::*;
