use crate::engine::tree::HuffmanNode;
use std::collections::BTreeMap;

/// Symbol-to-code mapping, prefix-free by construction: codes are assigned
/// only at leaves, left edge appends 0, right edge appends 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<u8, Vec<bool>>,
}

impl CodeTable {
    /// Extract the code table from a tree by depth-first traversal. A lone
    /// root leaf still gets a one-bit code, since an empty code could not be
    /// distinguished on decode.
    pub fn from_tree(root: &HuffmanNode) -> Self {
        let mut codes = BTreeMap::new();
        collect_codes(root, Vec::new(), &mut codes);
        Self { codes }
    }

    pub fn from_entries(entries: BTreeMap<u8, Vec<bool>>) -> Self {
        Self { codes: entries }
    }

    pub fn get(&self, symbol: u8) -> Option<&[bool]> {
        self.codes.get(&symbol).map(|code| code.as_slice())
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[bool])> + '_ {
        self.codes.iter().map(|(&sym, code)| (sym, code.as_slice()))
    }
}

fn collect_codes(node: &HuffmanNode, path: Vec<bool>, codes: &mut BTreeMap<u8, Vec<bool>>) {
    if let Some(symbol) = node.symbol {
        codes.insert(symbol, if path.is_empty() { vec![false] } else { path });
        return;
    }

    if let Some(ref left) = node.left {
        let mut left_path = path.clone();
        left_path.push(false);
        collect_codes(left, left_path, codes);
    }
    if let Some(ref right) = node.right {
        let mut right_path = path;
        right_path.push(true);
        collect_codes(right, right_path, codes);
    }
}
