use std::sync::Arc;

use nutrisense_core::application::NutrisenseService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: NutrisenseService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: NutrisenseService) -> Self {
        Self { args, service }
    }
}
