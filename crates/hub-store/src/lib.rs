//! Store adapters for the content hub.
//!
//! - [`RedisContentStore`] / [`MemoryContentStore`] implement `ContentStore`
//! - [`FsContentProvider`] implements `ContentProvider`
//! - [`FsSyncSource`] implements `SyncSource`
//!
//! Client library types never leave this crate.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod codec;
pub mod factory;
mod fs_content;
mod fs_sync_source;
mod memory_store;
mod redis_store;

pub use factory::StoreFactory;
pub use fs_content::FsContentProvider;
pub use fs_sync_source::FsSyncSource;
pub use memory_store::MemoryContentStore;
pub use redis_store::RedisContentStore;
