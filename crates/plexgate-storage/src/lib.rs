//! Object-storage signing for plexgate.
//!
//! The gateway never reads or writes media bytes itself; all it asks of
//! storage is a time-bounded URL a client can be redirected to. The
//! [`StorageSigner`] trait captures exactly that, and [`S3Storage`] is the
//! S3-compatible implementation over `object_store`.

pub mod keys;
pub mod s3;
pub mod traits;

pub use s3::S3Storage;
pub use traits::{StorageError, StorageResult, StorageSigner};
