use std::io::{self, Read};

use indicatif::{ProgressBar, ProgressStyle};

/// Receives upload progress. Implementations are display-only and never
/// influence what goes on the wire.
pub trait ProgressObserver: Send {
    fn notify(&self, bytes_sent: u64, total_bytes: u64);
}

/// `Read` adapter that counts the bytes flowing through it and reports the
/// running total to an observer, once per chunk.
pub struct ProgressReader<R> {
    inner: R,
    observer: Box<dyn ProgressObserver>,
    bytes_sent: u64,
    total_bytes: u64,
}

impl<R: Read> ProgressReader<R> {
    pub fn new(inner: R, total_bytes: u64, observer: Box<dyn ProgressObserver>) -> Self {
        observer.notify(0, total_bytes);
        Self {
            inner,
            observer,
            bytes_sent: 0,
            total_bytes,
        }
    }
}

impl<R: Read> Read for ProgressReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.bytes_sent += n as u64;
        self.observer.notify(self.bytes_sent, self.total_bytes);
        Ok(n)
    }
}

/// Terminal progress bar scaled to the total upload size.
pub struct BarObserver {
    bar: ProgressBar,
}

impl BarObserver {
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::with_template("[{bar:40}] {bytes}/{total_bytes}")
                .unwrap()
                .progress_chars("=> "),
        );
        Self { bar }
    }
}

impl ProgressObserver for BarObserver {
    fn notify(&self, bytes_sent: u64, total_bytes: u64) {
        self.bar.set_length(total_bytes);
        self.bar.set_position(bytes_sent);
        if total_bytes > 0 && bytes_sent >= total_bytes {
            self.bar.finish();
        }
    }
}
