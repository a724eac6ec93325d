//! Handles for binary cell values.
//!
//! A [`Binary`] is an immutable, cheaply clonable block of bytes. A
//! [`ByteStream`] is a shared reader: clones read from the same underlying
//! cursor, so bytes consumed through one clone are gone for the others.

// used to share bytes and readers between rows and values
use std::sync::{Arc, Mutex};
// used to expose binaries as readers
use std::io::{self, Cursor, Read};
use std::fmt;

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Binary {
    data: Arc<[u8]>,
}

impl Binary {
    pub fn new(data: impl Into<Arc<[u8]>>) -> Self {
        Self { data: data.into() }
    }
    pub fn size(&self) -> usize {
        self.data.len()
    }
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }
    /// A fresh stream positioned at the first byte.
    pub fn stream(&self) -> ByteStream {
        ByteStream::new(Cursor::new(Arc::clone(&self.data)))
    }
    /// Copies bytes starting at `position` into `buf`, returning how many were copied.
    pub fn read_at(&self, buf: &mut [u8], position: usize) -> io::Result<usize> {
        if position > self.data.len() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("position {} beyond binary of {} bytes", position, self.data.len()),
            ));
        }
        let available = &self.data[position..];
        let n = available.len().min(buf.len());
        buf[..n].copy_from_slice(&available[..n]);
        Ok(n)
    }
}
impl From<Vec<u8>> for Binary {
    fn from(v: Vec<u8>) -> Self {
        Self::new(v)
    }
}
impl From<&[u8]> for Binary {
    fn from(v: &[u8]) -> Self {
        Self::new(v)
    }
}
impl fmt::Debug for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Binary({} bytes)", self.data.len())
    }
}
impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.data))
    }
}

#[derive(Clone)]
pub struct ByteStream {
    inner: Arc<Mutex<Box<dyn Read + Send>>>,
}

impl ByteStream {
    pub fn new<R: Read + Send + 'static>(reader: R) -> Self {
        Self { inner: Arc::new(Mutex::new(Box::new(reader))) }
    }
    /// Reads whatever is left in the stream.
    pub fn read_all(&mut self) -> io::Result<Vec<u8>> {
        let mut out = Vec::new();
        self.read_to_end(&mut out)?;
        Ok(out)
    }
    pub fn same_stream(&self, other: &ByteStream) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
impl Read for ByteStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut reader = self
            .inner
            .lock()
            .map_err(|_| io::Error::other("stream lock poisoned"))?;
        reader.read(buf)
    }
}
impl fmt::Debug for ByteStream {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("ByteStream")
    }
}
