/// Health check.
pub async fn ping() -> &'static str {
    "Ping successful"
}
