use shared_types::AppError;

/// Convert a reqwest transport error into an [`AppError`].
///
/// The reqwest detail is logged rather than surfaced: when no response
/// arrived there is no server message to show the user.
pub fn reqwest_to_app_error(err: reqwest::Error) -> AppError {
    tracing::warn!(error = %err, "request failed before a response arrived");
    AppError::network()
}

/// Extension trait providing `.into_app_error()` on reqwest::Error.
pub trait ReqwestErrorExt {
    fn into_app_error(self) -> AppError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_app_error(self) -> AppError {
        reqwest_to_app_error(self)
    }
}
