//! Handler types and dependencies

use std::sync::Arc;

use crate::registration::{Gateway, RegistrationFlow};

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub flow: Arc<RegistrationFlow>,
    pub gateway: Arc<dyn Gateway>,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(flow: Arc<RegistrationFlow>, gateway: Arc<dyn Gateway>) -> Self {
        Self { flow, gateway }
    }
}
