use crate::engine::bitstream::{BitReader, BitWriter};
use crate::engine::codes::CodeTable;
use crate::error::CodecError;
use std::collections::BTreeMap;
use tracing::error;

/// HUFFPRESS artifact magic bytes: "HPRS"
pub const ARTIFACT_MAGIC: [u8; 4] = *b"HPRS";

/// Current artifact format version
pub const FORMAT_VERSION: u16 = 1;

/// A self-contained compressed artifact: the code table plus the bit-packed
/// payload and its exact meaningful bit count.
///
/// Wire layout, all integers big-endian:
/// magic (4) | version (u16) | symbol count (u16) | per symbol: symbol (u8),
/// code bit-length (u8), packed code bytes | payload bit count (u64) |
/// payload bytes. Every field is length-prefixed or fixed-width, so any byte
/// value can appear as a symbol and any bit pattern as a code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedArtifact {
    pub table: CodeTable,
    pub bit_len: u64,
    pub payload: Vec<u8>,
}

impl CompressedArtifact {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(8 + self.table.len() * 3 + self.payload.len());

        out.extend_from_slice(&ARTIFACT_MAGIC);
        out.extend_from_slice(&FORMAT_VERSION.to_be_bytes());
        out.extend_from_slice(&(self.table.len() as u16).to_be_bytes());

        for (symbol, code) in self.table.iter() {
            out.push(symbol);
            out.push(code.len() as u8);

            let mut packer = BitWriter::new();
            packer.push_code(code);
            let (code_bytes, _) = packer.finish();
            out.extend_from_slice(&code_bytes);
        }

        out.extend_from_slice(&self.bit_len.to_be_bytes());
        out.extend_from_slice(&self.payload);

        out
    }

    pub fn parse(data: &[u8]) -> Result<Self, CodecError> {
        if data.len() < 8 {
            error!("artifact too short for header: {} bytes", data.len());
            return Err(CodecError::MalformedStream("truncated header"));
        }

        if data[0..4] != ARTIFACT_MAGIC {
            return Err(CodecError::MalformedStream("bad magic"));
        }

        let version = u16::from_be_bytes([data[4], data[5]]);
        if version != FORMAT_VERSION {
            error!("unsupported artifact version {}", version);
            return Err(CodecError::MalformedStream("unsupported format version"));
        }

        let symbol_count = u16::from_be_bytes([data[6], data[7]]) as usize;
        if symbol_count == 0 || symbol_count > 256 {
            return Err(CodecError::MalformedStream("symbol count out of range"));
        }

        let mut offset = 8;
        let mut entries = BTreeMap::new();

        for _ in 0..symbol_count {
            if offset + 2 > data.len() {
                return Err(CodecError::MalformedStream("truncated code table"));
            }

            let symbol = data[offset];
            let code_len = data[offset + 1] as usize;
            offset += 2;

            if code_len == 0 {
                return Err(CodecError::MalformedStream("zero-length code"));
            }

            let code_bytes_len = code_len.div_ceil(8);
            if offset + code_bytes_len > data.len() {
                return Err(CodecError::MalformedStream("truncated code table"));
            }

            let mut unpacker = BitReader::new(&data[offset..offset + code_bytes_len], code_len as u64);
            let mut code = Vec::with_capacity(code_len);
            while let Some(bit) = unpacker.next_bit() {
                code.push(bit);
            }
            offset += code_bytes_len;

            if entries.insert(symbol, code).is_some() {
                return Err(CodecError::MalformedStream("duplicate symbol in code table"));
            }
        }

        if offset + 8 > data.len() {
            return Err(CodecError::MalformedStream("truncated bit count"));
        }

        let bit_len = u64::from_be_bytes([
            data[offset], data[offset + 1], data[offset + 2], data[offset + 3],
            data[offset + 4], data[offset + 5], data[offset + 6], data[offset + 7],
        ]);
        offset += 8;

        let payload_len = (bit_len.div_ceil(8)) as usize;
        if data.len() - offset < payload_len {
            error!(
                "payload shorter than bit count implies: {} bytes for {} bits",
                data.len() - offset,
                bit_len
            );
            return Err(CodecError::MalformedStream("truncated payload"));
        }
        if data.len() - offset > payload_len {
            return Err(CodecError::MalformedStream("trailing bytes after payload"));
        }

        let payload = data[offset..].to_vec();

        Ok(Self {
            table: CodeTable::from_entries(entries),
            bit_len,
            payload,
        })
    }
}
