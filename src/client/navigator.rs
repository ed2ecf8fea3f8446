/// Hook the client uses to send the user somewhere else, e.g. the login page
pub trait Navigator: Send + Sync {
    fn redirect(&self, path: &str);
}

/// Navigator for the CLI: there is no page to change, so it only logs
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn redirect(&self, path: &str) {
        log::warn!("session expired, log in again at {path}");
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct RecordingNavigator {
    pub visited: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.visited.lock().unwrap().push(path.to_string());
    }
}
