/*
    Amino acid alphabet used to encode alignments
        20 canonical one letter codes, indexed 0-19
        gap '-' is code 20
        any other character is read as a gap
*/

pub const AMINO_ACIDS: &str = "ACDEFGHIKLMNPQRSTVWY-";
pub const GAP: u8 = b'-';
pub const GAP_CODE: u8 = 20;

const AMINO_ACID_BYTES: &[u8; 21] = b"ACDEFGHIKLMNPQRSTVWY-";

// byte -> code lookup, built at compile time
const ENCODE_TABLE: [u8; 256] = build_encode_table();

const fn build_encode_table() -> [u8; 256] {
    let mut table = [GAP_CODE; 256];
    let mut code = 0;
    while code < AMINO_ACID_BYTES.len() {
        table[AMINO_ACID_BYTES[code] as usize] = code as u8;
        code += 1;
    }
    table
}

#[inline]
pub fn encode(letter: u8) -> u8 {
    ENCODE_TABLE[letter as usize]
}

#[inline]
pub fn decode(code: u8) -> Option<char> {
    AMINO_ACID_BYTES.get(code as usize).map(|&b| b as char)
}

/// True if the byte is one of the 20 residues or the gap symbol.
#[inline]
pub fn is_alphabet(letter: u8) -> bool {
    letter == GAP || ENCODE_TABLE[letter as usize] != GAP_CODE
}

/// Like `encode` for a full `char`; anything outside ascii is a gap.
#[inline]
pub fn encode_char(letter: char) -> u8 {
    if letter.is_ascii() {
        encode(letter as u8)
    } else {
        GAP_CODE
    }
}

#[inline]
pub fn is_alphabet_char(letter: char) -> bool {
    letter.is_ascii() && is_alphabet(letter as u8)
}
