/// Error that hands the inspected buffer back to the caller
///
/// Constructors like `DetectedImage::new()` take ownership of the bytes. If
/// detection fails, the bytes travel back inside the error so they can be
/// reused, for example to try a different reader.
pub struct ErrorWithData<E: std::error::Error> {
    err: E,
    data: Vec<u8>,
}

impl<E: std::error::Error> ErrorWithData<E> {
    pub fn new(err: E, data: Vec<u8>) -> Self {
        Self { err, data }
    }

    pub fn err(&self) -> &E {
        &self.err
    }

    /// Bytes that were passed in
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}

impl<E: std::error::Error> std::fmt::Debug for ErrorWithData<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorWithData")
            .field("err", &self.err)
            .field("data", &format!("{} bytes", self.data.len()))
            .finish()
    }
}

impl<E: std::error::Error> std::fmt::Display for ErrorWithData<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl<E: std::error::Error + 'static> std::error::Error for ErrorWithData<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.err)
    }
}
