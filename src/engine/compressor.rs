use crate::artifact::CompressedArtifact;
use crate::engine::bitstream::BitWriter;
use crate::engine::codes::CodeTable;
use crate::engine::frequency::FrequencyTable;
use crate::engine::tree::build_tree;
use crate::error::CodecError;
use tracing::debug;

/// Compress a byte sequence into a self-contained artifact: frequency scan,
/// tree build, code extraction, bit packing.
pub fn compress(input: &[u8]) -> Result<CompressedArtifact, CodecError> {
    let freqs = FrequencyTable::scan(input)?;
    debug!("frequency table: {} distinct symbols over {} bytes", freqs.len(), input.len());

    let root = build_tree(&freqs);
    let table = CodeTable::from_tree(&root);

    let mut writer = BitWriter::new();
    for &byte in input {
        // Every input byte is in the table: the tree was built from this
        // exact input.
        if let Some(code) = table.get(byte) {
            writer.push_code(code);
        }
    }
    let (payload, bit_len) = writer.finish();

    debug!(
        "packed {} bits into {} payload bytes ({} input bytes)",
        bit_len,
        payload.len(),
        input.len()
    );

    Ok(CompressedArtifact { table, bit_len, payload })
}
