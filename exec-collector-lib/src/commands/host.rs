use std::io::Write;

/// Where commands send reports and diagnostics, and how they report a failing status.
///
/// The binary binds this to stdout, stderr and `process::exit`; tests capture everything in memory.
pub trait Host: Send + Sync {
    /// Sink for reports, type listings and the policy table.
    fn output(&mut self) -> impl Write;

    /// Sink for diagnostics such as validation failures and incomplete-collection notes.
    fn error(&mut self) -> impl Write;

    /// Set the exit status, used when `validate` finds unsupported or broken descriptors.
    fn exit(&mut self, code: i32);
}

/// In-memory host that keeps both streams and the last exit status it was given.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct TestHost {
    pub output_buf: Vec<u8>,
    pub error_buf: Vec<u8>,
    pub exit_code: Option<i32>,
}

#[cfg(test)]
impl TestHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }

    pub fn error_str(&self) -> String {
        String::from_utf8_lossy(&self.error_buf).into_owned()
    }
}

#[cfg(test)]
impl Host for TestHost {
    fn output(&mut self) -> impl Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl Write {
        &mut self.error_buf
    }

    fn exit(&mut self, code: i32) {
        self.exit_code = Some(code);
    }
}
