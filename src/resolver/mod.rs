mod offline;

pub use offline::OfflineResolver;
