//! Wire-level interop for header values.
//!
//! Header values render to strings on their own; this module adds the two
//! forms other HTTP stacks actually consume: a raw `name: value\r\n` line
//! appended to a [`BytesMut`] buffer, and conversions into the [`http`]
//! crate's `HeaderName`/`HeaderValue` types.

use bytes::{BufMut, BytesMut};
use http::header::{HeaderName, HeaderValue, InvalidHeaderValue};

use crate::header::Header;

impl Header {
    /// The header name as an `http` crate [`HeaderName`].
    ///
    /// # Panics
    ///
    /// Panics if the definition name is not a valid header name; catalog
    /// definitions are all lowercase token names, for which this cannot
    /// happen.
    pub fn header_name(&self) -> HeaderName {
        HeaderName::from_static(self.definition().name())
    }

    /// The canonical value as an `http` crate [`HeaderValue`].
    pub fn header_value(&self) -> Result<HeaderValue, InvalidHeaderValue> {
        HeaderValue::from_str(self.to_value_string())
    }

    /// Appends the full `name: value\r\n` line to an output buffer.
    pub fn encode(&self, dst: &mut BytesMut) {
        let value = self.to_value_string();
        dst.reserve(self.name().len() + value.len() + 4);
        dst.put_slice(self.name().as_bytes());
        dst.put_slice(b": ");
        dst.put_slice(value.as_bytes());
        dst.put_slice(b"\r\n");
    }
}

impl TryFrom<&Header> for HeaderValue {
    type Error = InvalidHeaderValue;

    fn try_from(header: &Header) -> Result<Self, Self::Error> {
        header.header_value()
    }
}
