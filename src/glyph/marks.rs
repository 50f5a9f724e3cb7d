//! Vowel points (niqqud) and punctuation/cantillation marks.
//!
//! These are bare literals with no names attached. Alternate spellings are
//! extra constants bound to the same code point.

// -- Niqqud --

pub const SIN_DOT: char = '\u{05C2}';
pub const SHIN_DOT: char = '\u{05C1}';
pub const DAGESH: char = '\u{05BC}';
pub const QUBUTS: char = '\u{05BB}';
pub const KUBUTZ: char = QUBUTS;
pub const HOLAM: char = '\u{05B9}';
pub const QAMATS: char = '\u{05B8}';
pub const KUMATZ: char = QAMATS;
pub const PATAH: char = '\u{05B7}';
pub const PATACH: char = PATAH;
pub const SEGOL: char = '\u{05B6}';
pub const TSERE: char = '\u{05B5}';
pub const HIRIQ: char = '\u{05B4}';
pub const CHIRIK: char = HIRIQ;
pub const HATAF_QAMATS: char = '\u{05B3}';
pub const HATAF_PATAH: char = '\u{05B2}';
pub const HATAF_SEGOL: char = '\u{05B1}';
pub const SHEVA: char = '\u{05B0}';
pub const SHIVAH: char = SHEVA;
pub const UPPER_DOT: char = '\u{05C4}';

/// Vav with dagesh. A letter sequence, so it is not part of [`NIQQUD`].
pub const SHURUK: &str = "\u{05D5}\u{05BC}";

/// Every vowel point.
pub const NIQQUD: [char; 15] = [
    SIN_DOT,
    SHIN_DOT,
    DAGESH,
    QUBUTS,
    HOLAM,
    QAMATS,
    PATAH,
    SEGOL,
    TSERE,
    HIRIQ,
    HATAF_QAMATS,
    HATAF_PATAH,
    HATAF_SEGOL,
    SHEVA,
    UPPER_DOT,
];

// -- Punctuation and cantillation --

pub const MAQAF: char = '\u{05BE}';
pub const PASEQ: char = '\u{05C0}';
pub const SOF_PASSUK: char = '\u{05C3}';
pub const ETNAHTA: char = '\u{0591}';
pub const SEGOL_TOP: char = '\u{0592}';
pub const SHALSHELET: char = '\u{0593}';
pub const ZAQEF_QATAN: char = '\u{0594}';
pub const ZAQEF_GADOL: char = '\u{0595}';
pub const TIFCHA: char = '\u{0596}';
pub const REVIA: char = '\u{0597}';
pub const ZINOR: char = '\u{05AE}';
pub const PASHTA: char = '\u{0599}';
pub const PASHTA_2: char = '\u{05A8}';
pub const QADMA: char = PASHTA_2;
pub const YETIV: char = '\u{059A}';
pub const TEVIR: char = '\u{059B}';
pub const PAZER: char = '\u{05A1}';
pub const TELISHA_GEDOLA: char = '\u{05A0}';
pub const TELISHA_KETANNAH: char = '\u{05A9}';
pub const PAZER_GADOL: char = '\u{059F}';
pub const QARNEY_PARA: char = PAZER_GADOL;
pub const GERESH: char = '\u{05F3}';
pub const AZLA_GERESH: char = '\u{059C}';
pub const GERSHAYIM: char = '\u{05F4}';
pub const GERSHAYIM_2: char = '\u{059E}';
pub const MERCHA: char = '\u{05A5}';
pub const MUNACH: char = '\u{05A3}';
pub const MAHPACH: char = '\u{05A4}';
pub const DARGA: char = '\u{05A7}';
pub const MERCHA_KEFULA: char = '\u{05A6}';
pub const YERACH_BEN_YOMO: char = '\u{05AA}';
pub const MASORA: char = '\u{05AF}';
pub const DEHI: char = '\u{05AD}';
pub const ZARQA: char = '\u{0598}';
pub const GERESH_MUQDAM: char = '\u{059D}';
pub const OLA: char = '\u{05AB}';
pub const ILUY: char = '\u{05AC}';
pub const RAFE: char = '\u{05BF}';
pub const METEG: char = '\u{05BD}';

/// Every punctuation and cantillation mark, each code point once.
pub const PUNCTUATION: [char; 37] = [
    MAQAF,
    PASEQ,
    SOF_PASSUK,
    GERESH,
    GERSHAYIM,
    GERSHAYIM_2,
    RAFE,
    METEG,
    ETNAHTA,
    SEGOL_TOP,
    SHALSHELET,
    ZAQEF_QATAN,
    ZAQEF_GADOL,
    TIFCHA,
    REVIA,
    ZINOR,
    PASHTA,
    PASHTA_2,
    YETIV,
    TEVIR,
    PAZER,
    PAZER_GADOL,
    TELISHA_GEDOLA,
    TELISHA_KETANNAH,
    AZLA_GERESH,
    MERCHA,
    MUNACH,
    MAHPACH,
    DARGA,
    MERCHA_KEFULA,
    YERACH_BEN_YOMO,
    MASORA,
    DEHI,
    ZARQA,
    GERESH_MUQDAM,
    OLA,
    ILUY,
];

pub fn is_niqqud(c: char) -> bool {
    NIQQUD.contains(&c)
}

pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(&c)
}
