use std::fs::File;
use std::io::{Cursor, Read, Stdin};

pub struct Reader {
    inner: ReadBuffer,
}

impl Default for Reader {
    fn default() -> Self {
        Reader::new(ReadBuffer::Stdin(std::io::stdin()))
    }
}

impl Read for Reader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match &mut self.inner {
            ReadBuffer::Stdin(stdin) => stdin.read(buf),
            ReadBuffer::Cursor(cursor) => cursor.read(buf),
            ReadBuffer::File(file) => file.read(buf),
        }
    }
}

impl Reader {
    pub fn new(inner: ReadBuffer) -> Self {
        Self { inner }
    }

    /// Reads a single line, without the trailing newline.
    pub fn read_line(&mut self) -> std::io::Result<String> {
        let mut line = Vec::new();
        let mut byte = [0u8; 1];

        while self.read(&mut byte)? != 0 {
            if byte[0] == b'\n' {
                break;
            }
            line.push(byte[0]);
        }

        let mut line = String::from_utf8_lossy(&line).to_string();
        if line.ends_with('\r') {
            line.pop();
        }

        Ok(line)
    }
}

pub enum ReadBuffer {
    Stdin(Stdin),
    Cursor(Cursor<Vec<u8>>),
    File(File),
}
