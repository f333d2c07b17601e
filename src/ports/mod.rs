//! Collaborator seams consumed by the API adapter.

pub mod transport;

pub use transport::Transport;
