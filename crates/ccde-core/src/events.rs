use std::fmt::Display;

use tracing::{error, info};

use crate::errors::CcdeError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_error<E: Display + ?Sized>(error: &E) {
    error!(event = "core.app.error_occurred", error = %error);
}

/// Like [`log_app_error`], with the error code and user/system split.
pub fn log_ccde_error(error: &dyn CcdeError) {
    error!(
        event = "core.app.error_occurred",
        error = %error,
        error_code = error.error_code(),
        user_error = error.is_user_error()
    );
}
