//! Toast notification port.

/// User-visible toast delivery.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);

    fn info(&self, message: &str);

    fn error(&self, message: &str);
}
