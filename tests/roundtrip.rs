use huffpress::{compress, decompress, CodecError, CompressedArtifact};

fn roundtrip(input: &[u8]) -> Vec<u8> {
    let artifact = compress(input).unwrap();
    let bytes = artifact.to_bytes();
    let parsed = CompressedArtifact::parse(&bytes).unwrap();
    decompress(&parsed).unwrap()
}

#[test]
fn roundtrips_plain_text() {
    let input = b"it was the best of times, it was the worst of times";
    assert_eq!(roundtrip(input), input);
}

#[test]
fn roundtrips_binary_and_repetitive_inputs() {
    let cases: Vec<Vec<u8>> = vec![
        vec![0u8],
        vec![255u8; 17],
        b"ab".to_vec(),
        b"aaabbc".to_vec(),
        (0u8..=255).cycle().take(10_000).collect(),
        b"\0\n\r\t\0".to_vec(),
    ];
    for input in cases {
        assert_eq!(roundtrip(&input), input, "failed for input of len {}", input.len());
    }
}

#[test]
fn roundtrips_pseudo_random_bytes() {
    // Fixed-seed xorshift so the case is reproducible
    let mut state = 0x2545_f491_4f6c_dd1du64;
    let input: Vec<u8> = (0..4096)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state & 0xff) as u8
        })
        .collect();
    assert_eq!(roundtrip(&input), input);
}

#[test]
fn roundtrips_every_byte_value() {
    // Newline, NUL, and all other byte values as symbols; the header format
    // must not care what the symbol byte is.
    let mut input: Vec<u8> = (0u8..=255).collect();
    input.extend(b"\n\0\n\0 mixed in with text");
    assert_eq!(roundtrip(&input), input);
}

#[test]
fn generated_codes_are_prefix_free() {
    let inputs: [&[u8]; 3] = [
        b"banana bandana",
        b"abcdefghijklmnopqrstuvwxyz",
        &[1, 1, 1, 2, 2, 3],
    ];
    for input in inputs {
        let artifact = compress(input).unwrap();
        let codes: Vec<&[bool]> = artifact.table.iter().map(|(_, c)| c).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a), "prefix violation in table for {:?}", input);
                }
            }
        }
    }
}

/// Minimal total cost over every possible merge order, i.e. over every full
/// binary tree shape. Feasible only for small alphabets.
fn brute_force_cost(weights: &[u64]) -> u64 {
    if weights.len() == 1 {
        return 0;
    }
    let mut best = u64::MAX;
    for i in 0..weights.len() {
        for j in (i + 1)..weights.len() {
            let merged = weights[i] + weights[j];
            let mut rest: Vec<u64> = weights
                .iter()
                .enumerate()
                .filter(|&(k, _)| k != i && k != j)
                .map(|(_, &w)| w)
                .collect();
            rest.push(merged);
            best = best.min(merged + brute_force_cost(&rest));
        }
    }
    best
}

#[test]
fn tree_is_optimal_on_small_alphabets() {
    let inputs: [&[u8]; 4] = [
        b"aaaaabbbcc",
        b"aabbccdd",
        b"abcde",
        b"aaaaaaaabbbbccde",
    ];
    for input in inputs {
        let artifact = compress(input).unwrap();
        assert_eq!(
            artifact.bit_len, // sum of freq * code length over the input
            brute_force_cost(&weights_of(input)),
            "suboptimal table for {:?}",
            input
        );
    }
}

fn weights_of(input: &[u8]) -> Vec<u64> {
    let mut counts = std::collections::BTreeMap::new();
    for &b in input {
        *counts.entry(b).or_insert(0u64) += 1;
    }
    counts.into_values().collect()
}

#[test]
fn single_symbol_input_uses_one_bit_per_symbol() {
    let input = vec![b'a'; 1000];
    let artifact = compress(&input).unwrap();

    assert_eq!(artifact.table.len(), 1);
    assert_eq!(artifact.table.get(b'a').unwrap().len(), 1);
    assert_eq!(artifact.bit_len, 1000);
    assert_eq!(artifact.payload.len(), 125);

    assert_eq!(roundtrip(&input), input);
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(compress(&[]), Err(CodecError::EmptyInput));
}

#[test]
fn truncated_artifact_fails_loudly() {
    let artifact = compress(b"truncate me and watch the decoder complain").unwrap();
    let mut bytes = artifact.to_bytes();
    bytes.pop();

    match CompressedArtifact::parse(&bytes) {
        Err(CodecError::MalformedStream(_)) => {}
        other => panic!("expected MalformedStream, got {:?}", other),
    }
}

#[test]
fn shortened_bit_count_fails_mid_code() {
    // Rebuild the artifact with one fewer meaningful bit than a full code
    // boundary, stranding the final descent inside the tree.
    let input = b"aaaaaaaabbbbc"; // 'c' gets the longest code
    let artifact = compress(input).unwrap();

    let longest = artifact.table.iter().map(|(_, c)| c.len()).max().unwrap();
    assert!(longest > 1);

    let cut = CompressedArtifact {
        table: artifact.table.clone(),
        bit_len: artifact.bit_len - 1,
        payload: artifact.payload[..((artifact.bit_len - 1).div_ceil(8)) as usize].to_vec(),
    };
    assert_eq!(
        decompress(&cut),
        Err(CodecError::MalformedStream("payload ends mid-code"))
    );
}

#[test]
fn identical_inputs_produce_identical_artifacts() {
    let input = b"equal weights everywhere: abab cdcd efef";
    let first = compress(input).unwrap().to_bytes();
    let second = compress(input).unwrap().to_bytes();
    assert_eq!(first, second);
}
