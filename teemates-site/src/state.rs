//! Service state

use teemates_core::Backend;

/// Shared application state, generic over the backend implementation so
/// tests can swap in the in-memory one.
pub struct AppState<B: Backend> {
    pub backend: B,
}

impl<B: Backend> AppState<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }
}
