//! Shared in-memory store of open import sessions.
//!
//! One [`BatchBuilder`] per session id, behind an `Arc<RwLock<HashMap>>` so
//! read-mostly handlers (view, submit) do not block each other. Sessions are
//! transient: a restart drops every open preview, which matches the
//! client-side lifetime the preview list had before.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;

use crate::pipeline::BatchBuilder;

#[derive(Clone, Default)]
pub struct SessionsState {
    pub sessions: Arc<RwLock<HashMap<String, BatchBuilder>>>,
}

impl SessionsState {
    pub fn new() -> Self {
        SessionsState::default()
    }
}
