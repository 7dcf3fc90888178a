pub mod comment_store;
pub mod errors;

pub use comment_store::CommentStore;
pub use errors::{StorageError, StorageResult};

#[cfg(test)]
pub use comment_store::test_helpers;
