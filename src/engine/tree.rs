use crate::engine::frequency::FrequencyTable;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// One node of an owned, strict binary Huffman tree. Leaves carry a symbol,
/// internal nodes carry two children whose weights sum to `weight`.
#[derive(Debug, Clone)]
pub struct HuffmanNode {
    pub weight: u64,
    pub symbol: Option<u8>,
    pub left: Option<Box<HuffmanNode>>,
    pub right: Option<Box<HuffmanNode>>,
}

impl HuffmanNode {
    pub fn leaf(symbol: u8, weight: u64) -> Self {
        Self { weight, symbol: Some(symbol), left: None, right: None }
    }

    pub fn internal(left: HuffmanNode, right: HuffmanNode) -> Self {
        Self {
            weight: left.weight + right.weight,
            symbol: None,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.symbol.is_some()
    }

    fn empty() -> Self {
        Self { weight: 0, symbol: None, left: None, right: None }
    }
}

/// Heap entry carrying an insertion sequence number so equal-weight pops are
/// deterministic: earlier-inserted compares as smaller. Leaves enter in
/// ascending symbol order, merged nodes in creation order.
struct HeapEntry {
    node: HuffmanNode,
    seq: u64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.node.weight == other.node.weight && self.seq == other.seq
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behaviour on BinaryHeap
        (other.node.weight, other.seq).cmp(&(self.node.weight, self.seq))
    }
}

/// Build the optimal prefix-code tree for a frequency table by repeatedly
/// merging the two lightest nodes. The first-popped node becomes the left
/// child. A single-symbol table yields that lone leaf as the root.
pub fn build_tree(freqs: &FrequencyTable) -> HuffmanNode {
    let mut heap = BinaryHeap::new();
    let mut seq = 0u64;

    for (symbol, weight) in freqs.iter() {
        heap.push(HeapEntry { node: HuffmanNode::leaf(symbol, weight), seq });
        seq += 1;
    }

    while heap.len() > 1 {
        let left = match heap.pop() {
            Some(entry) => entry.node,
            None => break,
        };
        let right = match heap.pop() {
            Some(entry) => entry.node,
            None => break,
        };

        heap.push(HeapEntry { node: HuffmanNode::internal(left, right), seq });
        seq += 1;
    }

    match heap.pop() {
        Some(entry) => entry.node,
        // Unreachable for a table produced by FrequencyTable::scan, which
        // rejects empty input.
        None => HuffmanNode::empty(),
    }
}
