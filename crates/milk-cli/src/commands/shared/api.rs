use milk_client::ClientError;

/// Turn a client error into the message a farm user would see, keeping the
/// transport error as the cause.
pub fn api<T>(result: Result<T, ClientError>, fallback: &str) -> anyhow::Result<T> {
    result.map_err(|error| {
        let message = error.user_message(fallback);
        anyhow::Error::new(error).context(message)
    })
}
