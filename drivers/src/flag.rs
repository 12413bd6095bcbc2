#[derive(Debug, Clone)]
pub struct Inner<IntoWarning>
where
    IntoWarning: Clone + Send,
{
    pub cancelled: bool,
    pub warning: Option<IntoWarning>,
}

/// Shared cancellation flag, observed by the scan loop between transfers.
///
/// The flag also keeps the first warning produced by best-effort operations (parking the
/// head after a cancellation, for instance), which would otherwise be lost.
#[derive(Debug, Clone)]
pub struct Flag<IntoWarning>(std::sync::Arc<std::sync::Mutex<Inner<IntoWarning>>>)
where
    IntoWarning: Clone + Send;

impl<IntoWarning> Flag<IntoWarning>
where
    IntoWarning: Clone + Send,
{
    pub fn new() -> Self {
        Self(std::sync::Arc::new(std::sync::Mutex::new(Inner {
            cancelled: false,
            warning: None,
        })))
    }

    pub fn cancel(&self) {
        self.0.lock().expect("mutex is not poisoned").cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.lock().expect("mutex is not poisoned").cancelled
    }

    /// Lowers the flag and returns its previous state.
    pub fn clear(&self) -> bool {
        std::mem::replace(
            &mut self.0.lock().expect("mutex is not poisoned").cancelled,
            false,
        )
    }

    pub fn store_warning_if_not_set<Warning>(&self, warning: Warning)
    where
        Warning: Into<IntoWarning>,
    {
        self.0
            .lock()
            .expect("mutex is not poisoned")
            .warning
            .get_or_insert(warning.into());
    }

    pub fn load_warning(&self) -> Option<IntoWarning> {
        self.0.lock().expect("mutex is not poisoned").warning.take()
    }
}

impl<IntoWarning> Default for Flag<IntoWarning>
where
    IntoWarning: Clone + Send,
{
    fn default() -> Self {
        Self::new()
    }
}
