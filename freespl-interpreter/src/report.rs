use tracing::error;

/// Bridge for runtime diagnostics: reports `message` when `condition` holds
/// and does nothing otherwise.
pub trait ErrorReport {
    fn check_error(&mut self, condition: bool, message: &str);
}

/// Prints reports to stdout, next to the program's own output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl ErrorReport for ConsoleReporter {
    fn check_error(&mut self, condition: bool, message: &str) {
        if condition {
            error!("runtime error: {message}");
            println!("Runtime Error: {message}");
        }
    }
}

impl ErrorReport for Vec<String> {
    fn check_error(&mut self, condition: bool, message: &str) {
        if condition {
            self.push(message.to_owned());
        }
    }
}

/// Receives every completed assignment.
pub trait Observer {
    fn assigned(&mut self, name: &str, value: i64);
}

/// Prints the `name = value` trace.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleObserver;

impl Observer for ConsoleObserver {
    fn assigned(&mut self, name: &str, value: i64) {
        println!("{name} = {value}");
    }
}

impl Observer for Vec<(String, i64)> {
    fn assigned(&mut self, name: &str, value: i64) {
        self.push((name.to_owned(), value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collecting_reporter() {
        let mut reports = Vec::new();
        reports.check_error(false, "ignored");
        reports.check_error(true, "Division by zero");
        assert_eq!(reports, vec!["Division by zero".to_owned()]);
    }
}
