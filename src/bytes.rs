use std::io::{self, Cursor, Seek, SeekFrom};

use byteorder::{LittleEndian, ReadBytesExt};

/// Little-endian reads at fixed offsets into a borrowed buffer. Reads past the end of the
/// window fail with `UnexpectedEof` instead of panicking.
#[derive(Clone, Copy, Debug)]
pub struct ByteWindow<'a> {
    data: &'a [u8],
}

impl<'a> ByteWindow<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &'a [u8] {
        self.data
    }

    fn cursor_at(&self, offset: usize) -> io::Result<Cursor<&'a [u8]>> {
        let mut cursor = Cursor::new(self.data);
        cursor.seek(SeekFrom::Start(offset as u64))?;
        Ok(cursor)
    }

    pub fn u8(&self, offset: usize) -> io::Result<u8> {
        self.cursor_at(offset)?.read_u8()
    }

    pub fn u16(&self, offset: usize) -> io::Result<u16> {
        self.cursor_at(offset)?.read_u16::<LittleEndian>()
    }

    pub fn u32(&self, offset: usize) -> io::Result<u32> {
        self.cursor_at(offset)?.read_u32::<LittleEndian>()
    }

    pub fn bytes(&self, offset: usize, len: usize) -> io::Result<&'a [u8]> {
        offset
            .checked_add(len)
            .and_then(|end| self.data.get(offset..end))
            .ok_or_else(|| io::ErrorKind::UnexpectedEof.into())
    }

    pub fn window(&self, offset: usize, len: usize) -> io::Result<ByteWindow<'a>> {
        self.bytes(offset, len).map(ByteWindow::new)
    }

    /// Reads `N` consecutive bytes as an array (EVs, IVs and friends).
    pub fn array<const N: usize>(&self, offset: usize) -> io::Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.bytes(offset, N)?);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian() {
        let data = [0x25, 0x20, 0x01, 0x08, 0xff];
        let window = ByteWindow::new(&data);
        assert_eq!(window.u32(0).unwrap(), 0x0801_2025);
        assert_eq!(window.u16(1).unwrap(), 0x0120);
        assert_eq!(window.u8(4).unwrap(), 0xff);
    }

    #[test]
    fn out_of_range_is_an_error() {
        let data = [0u8; 3];
        let window = ByteWindow::new(&data);
        assert_eq!(
            window.u32(0).unwrap_err().kind(),
            io::ErrorKind::UnexpectedEof
        );
        assert!(window.bytes(2, 2).is_err());
        assert!(window.bytes(usize::MAX, 2).is_err());
        assert_eq!(window.window(1, 2).unwrap().len(), 2);
    }
}
