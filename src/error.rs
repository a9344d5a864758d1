use thiserror::Error;

/// Failures reported by the tree engines.
///
/// Most "misses" are not errors: inserting a key the AVL tree already holds or deleting one it
/// doesn't hold simply leaves the tree alone. Only removal from the level-filled tree reports a
/// missing key, because that removal has to locate the key before it can restructure anything.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// No node holds the requested key.
    #[error("key not found")]
    KeyNotFound,
    /// The given name isn't one of the known traversal orders.
    #[error("unknown traversal order `{0}`")]
    UnknownOrder(String),
}

/// Shorthand for results whose error is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
