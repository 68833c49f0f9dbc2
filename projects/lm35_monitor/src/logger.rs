use crate::format::format_celsius;

#[derive(defmt::Format, Clone, Copy, Debug, PartialEq)]
pub enum LogError {
    /// The sink has no room left for another line.
    Full,
    /// A single line does not fit the sink's write unit.
    LineTooLong,
}

/// Append-only text sink.
///
/// Implementations must make every `append_line` a complete, self-contained
/// write: nothing stays open between calls, so a reset mid-run leaves the sink
/// consistent up to the last finished line.
pub trait LogSink {
    /// Truncates the sink to empty. Called once, before any append.
    fn initialize(&mut self) -> Result<(), LogError>;

    /// Appends `line` plus a trailing newline.
    fn append_line(&mut self, line: &str) -> Result<(), LogError>;
}

/// Records temperature readings to a [`LogSink`].
pub struct DataLogger<S: LogSink> {
    sink: S,
}

impl<S: LogSink> DataLogger<S> {
    /// Takes ownership of the sink and truncates it.
    pub fn new(mut sink: S) -> Result<Self, LogError> {
        sink.initialize()?;
        Ok(DataLogger { sink })
    }

    pub fn record(&mut self, celsius: f32) -> Result<(), LogError> {
        let mut line: heapless::String<48> = heapless::String::new();
        ufmt::uwrite!(
            line,
            "Temperature registered - {}",
            format_celsius(celsius).as_str()
        )
        .unwrap();
        self.sink.append_line(&line)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

/// In-memory sink, for tests and bench setups without a flash region to spare.
pub struct MemorySink<const N: usize> {
    buf: heapless::String<N>,
}

impl<const N: usize> MemorySink<N> {
    pub fn new() -> Self {
        MemorySink {
            buf: heapless::String::new(),
        }
    }

    pub fn contents(&self) -> &str {
        &self.buf
    }
}

impl<const N: usize> Default for MemorySink<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> LogSink for MemorySink<N> {
    fn initialize(&mut self) -> Result<(), LogError> {
        self.buf.clear();
        Ok(())
    }

    fn append_line(&mut self, line: &str) -> Result<(), LogError> {
        if self.buf.len() + line.len() + 1 > N {
            return Err(LogError::Full);
        }
        self.buf.push_str(line).map_err(|_| LogError::Full)?;
        self.buf.push('\n').map_err(|_| LogError::Full)?;
        Ok(())
    }
}
