//! Request bodies and their digest.

use crate::hash::{base64_md5, Md5Hasher};
use crate::{Error, Result};
use bytes::Bytes;
use std::fmt::{self, Debug};
use std::io::{Read, Seek, SeekFrom};

/// Largest body the remote side accepts, in bytes.
pub const MAX_BODY_SIZE: u64 = (1 << 31) - 1;

const CHUNK_SIZE: usize = 64 * 1024;

/// Readers that can also seek.
pub trait SeekRead: Read + Seek + Send {}

impl<T: Read + Seek + Send> SeekRead for T {}

/// Body of a request.
pub enum Body {
    /// Body already in memory.
    Bytes(Bytes),
    /// A stream that can be rewound after digesting.
    Seekable(Box<dyn SeekRead>),
    /// A one-shot reader. It is buffered in memory on first digest.
    Reader(Box<dyn Read + Send>),
}

impl Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Body::Bytes(b) => f.debug_tuple("Bytes").field(&b.len()).finish(),
            Body::Seekable(_) => f.write_str("Seekable"),
            Body::Reader(_) => f.write_str("Reader"),
        }
    }
}

impl From<Bytes> for Body {
    fn from(v: Bytes) -> Self {
        Body::Bytes(v)
    }
}

impl From<Vec<u8>> for Body {
    fn from(v: Vec<u8>) -> Self {
        Body::Bytes(Bytes::from(v))
    }
}

impl From<&'static [u8]> for Body {
    fn from(v: &'static [u8]) -> Self {
        Body::Bytes(Bytes::from_static(v))
    }
}

impl From<String> for Body {
    fn from(v: String) -> Self {
        Body::Bytes(Bytes::from(v))
    }
}

impl From<&'static str> for Body {
    fn from(v: &'static str) -> Self {
        Body::Bytes(Bytes::from_static(v.as_bytes()))
    }
}

/// Length and `Content-MD5` of a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyDigest {
    /// Number of bytes that will be sent.
    pub length: u64,
    /// Base64 of the MD5 digest.
    pub content_md5: String,
}

impl Body {
    /// Create a body from a seekable stream such as a [`std::fs::File`].
    pub fn seekable(r: impl Read + Seek + Send + 'static) -> Self {
        Body::Seekable(Box::new(r))
    }

    /// Create a body from a plain reader.
    pub fn reader(r: impl Read + Send + 'static) -> Self {
        Body::Reader(Box::new(r))
    }

    /// Compute length and MD5 of the body.
    ///
    /// Seekable streams are read from their current position and rewound
    /// to it afterwards. Plain readers are drained into memory and the body
    /// becomes [`Body::Bytes`].
    pub fn digest(&mut self) -> Result<BodyDigest> {
        self.digest_with_limit(MAX_BODY_SIZE)
    }

    pub(crate) fn digest_with_limit(&mut self, limit: u64) -> Result<BodyDigest> {
        let digest = match self {
            Body::Bytes(bs) => digest_bytes(bs),
            Body::Seekable(s) => digest_seekable(s.as_mut(), limit)?,
            Body::Reader(r) => {
                let mut buf = Vec::new();
                r.take(limit + 1).read_to_end(&mut buf)?;
                let bs = Bytes::from(buf);
                let digest = digest_bytes(&bs);
                *self = Body::Bytes(bs);
                digest
            }
        };

        if digest.length > limit {
            return Err(Error::size(format!(
                "body length {} is greater than {limit}",
                digest.length
            )));
        }
        Ok(digest)
    }

    /// Read the remaining body into memory for sending.
    pub fn into_bytes(self) -> Result<Bytes> {
        match self {
            Body::Bytes(bs) => Ok(bs),
            Body::Seekable(mut r) => {
                let mut buf = Vec::new();
                r.read_to_end(&mut buf)?;
                Ok(Bytes::from(buf))
            }
            Body::Reader(mut r) => {
                let mut buf = Vec::new();
                r.read_to_end(&mut buf)?;
                Ok(Bytes::from(buf))
            }
        }
    }
}

fn digest_bytes(bs: &[u8]) -> BodyDigest {
    BodyDigest {
        length: bs.len() as u64,
        content_md5: base64_md5(bs),
    }
}

fn digest_seekable(s: &mut dyn SeekRead, limit: u64) -> Result<BodyDigest> {
    let pos = s.stream_position()?;

    let mut hasher = Md5Hasher::new();
    let mut chunk = vec![0; CHUNK_SIZE];
    loop {
        let n = s.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        hasher.update(&chunk[..n]);
        if hasher.length() > limit {
            break;
        }
    }

    s.seek(SeekFrom::Start(pos))?;

    Ok(BodyDigest {
        length: hasher.length(),
        content_md5: hasher.finish_base64(),
    })
}
