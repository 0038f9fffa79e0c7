/// Receiver for the human-readable diagnostic lines a gauge emits.
///
/// A gauge calls [`LineSink::println`] once per accepted change and never
/// looks at what happens to the line afterwards.
pub trait LineSink {
    fn println(&mut self, line: &str);
}

/// Forwards every line to the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl LineSink for LogSink {
    fn println(&mut self, line: &str) {
        log::info!(target: "gauge", "{}", line);
    }
}

/// Collects lines in memory, handy for inspecting what a gauge printed.
impl LineSink for Vec<String> {
    fn println(&mut self, line: &str) {
        self.push(line.to_owned());
    }
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn println(&mut self, line: &str) {
        (**self).println(line);
    }
}
