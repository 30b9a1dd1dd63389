use crate::artifact::CompressedArtifact;
use crate::engine::bitstream::BitReader;
use crate::engine::codes::CodeTable;
use crate::engine::tree::HuffmanNode;
use crate::error::CodecError;
use tracing::debug;

/// Rebuild a decode tree from a parsed code table by threading each code's
/// bit path from an empty root. Codes are never empty, so the rebuilt root is
/// always internal, even for a single-symbol table. A leaf met mid-path or a
/// symbol landing on an internal node means the table is not prefix-free.
fn rebuild_tree(table: &CodeTable) -> Result<HuffmanNode, CodecError> {
    let mut root = HuffmanNode { weight: 0, symbol: None, left: None, right: None };

    for (symbol, code) in table.iter() {
        let mut current = &mut root;

        for &bit in code {
            if current.symbol.is_some() {
                return Err(CodecError::MalformedStream("code table is not prefix-free"));
            }
            let child = if bit { &mut current.right } else { &mut current.left };
            current = child.get_or_insert_with(|| {
                Box::new(HuffmanNode { weight: 0, symbol: None, left: None, right: None })
            });
        }

        if current.symbol.is_some() || current.left.is_some() || current.right.is_some() {
            return Err(CodecError::MalformedStream("code table is not prefix-free"));
        }
        current.symbol = Some(symbol);
    }

    Ok(root)
}

/// Reconstruct the original byte sequence from an artifact. Walks the packed
/// payload one bit at a time, descending from the root and emitting a symbol
/// at each leaf, until exactly the recorded bit count is consumed.
pub fn decompress(artifact: &CompressedArtifact) -> Result<Vec<u8>, CodecError> {
    if artifact.table.is_empty() {
        return Err(CodecError::MalformedStream("empty code table"));
    }
    // Artifact fields are public, so the bit count may disagree with the
    // payload even though parse() enforces consistency.
    if artifact.bit_len > artifact.payload.len() as u64 * 8 {
        return Err(CodecError::MalformedStream("bit count exceeds payload"));
    }

    let root = rebuild_tree(&artifact.table)?;
    let mut reader = BitReader::new(&artifact.payload, artifact.bit_len);
    let mut output = Vec::new();
    let mut current = &root;

    while let Some(bit) = reader.next_bit() {
        let next = if bit { &current.right } else { &current.left };
        current = match next {
            Some(node) => node.as_ref(),
            None => return Err(CodecError::MalformedStream("bit path leaves the code tree")),
        };

        if let Some(symbol) = current.symbol {
            output.push(symbol);
            current = &root;
        }
    }

    // A descent left hanging means the payload was cut mid-code.
    if !std::ptr::eq(current, &root) {
        return Err(CodecError::MalformedStream("payload ends mid-code"));
    }

    debug!("decoded {} bytes from {} payload bits", output.len(), artifact.bit_len);
    Ok(output)
}
