/// The symbols a fragment may contain, in the order they are usually listed.
pub const SYMBOLS: [u8; 4] = [b'G', b'C', b'A', b'T'];

/// A lookup table marking the uppercase nucleotide bases G, C, A and T as valid.
/// Every other byte, lowercase bases included, is rejected.
const NUCLEOTIDE_LOOKUP: [bool; 256] = {
    let mut arr = [false; 256];
    arr[b'G' as usize] = true;
    arr[b'C' as usize] = true;
    arr[b'A' as usize] = true;
    arr[b'T' as usize] = true;
    arr
};

/// Returns true if `byte` is one of the four uppercase nucleotide symbols.
#[inline]
pub fn is_valid_symbol(byte: u8) -> bool {
    NUCLEOTIDE_LOOKUP[byte as usize]
}

///
/// Find the first symbol in `sequence` that is not part of the alphabet.
///
/// # Arguments
/// - sequence: the raw text to check
///
/// # Returns
/// The offending character and its position (counted in characters, not bytes),
/// or `None` when every symbol is valid.
pub fn find_invalid_symbol(sequence: &str) -> Option<(usize, char)> {
    sequence
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii() || !is_valid_symbol(*c as u8))
}
