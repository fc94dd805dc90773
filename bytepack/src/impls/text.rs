//! Text codec: 8-byte byte length, then the raw UTF-8 bytes.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;

use super::{LEN_PREFIX, read_len, write_len};
use crate::error::InvalidUtf8Snafu;
use crate::{ByteBuffer, Category, FromBytes, Result, ToBytes};

impl ToBytes for str {
    const CATEGORY: Category = Category::Text;

    #[inline]
    fn to_bytes(&self, buf: &mut ByteBuffer) {
        write_len(self.len(), buf);
        buf.append(self.as_bytes());
    }

    #[inline]
    fn byte_len(&self) -> Option<usize> {
        Some(LEN_PREFIX + self.len())
    }
}

impl ToBytes for String {
    const CATEGORY: Category = Category::Text;

    #[inline]
    fn to_bytes(&self, buf: &mut ByteBuffer) {
        self.as_str().to_bytes(buf);
    }

    #[inline]
    fn byte_len(&self) -> Option<usize> {
        self.as_str().byte_len()
    }
}

impl FromBytes for String {
    fn from_bytes(buf: &mut ByteBuffer) -> Result<Self> {
        let len = read_len(buf)?;
        let bytes = buf.consume(len)?;
        let text = core::str::from_utf8(bytes).map_err(|e| {
            InvalidUtf8Snafu {
                valid_up_to: e.valid_up_to(),
            }
            .build()
        })?;
        Ok(text.into())
    }
}

impl FromBytes for Box<str> {
    #[inline]
    fn from_bytes(buf: &mut ByteBuffer) -> Result<Self> {
        String::from_bytes(buf).map(String::into_boxed_str)
    }
}

// Cow<'_, str> - same wire format as String
impl ToBytes for Cow<'_, str> {
    const CATEGORY: Category = Category::Text;

    #[inline]
    fn to_bytes(&self, buf: &mut ByteBuffer) {
        (**self).to_bytes(buf);
    }

    #[inline]
    fn byte_len(&self) -> Option<usize> {
        Some(LEN_PREFIX + self.len())
    }
}

impl FromBytes for Cow<'_, str> {
    #[inline]
    fn from_bytes(buf: &mut ByteBuffer) -> Result<Self> {
        String::from_bytes(buf).map(Cow::Owned)
    }
}
