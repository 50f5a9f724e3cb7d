//! The alphabet table: every Hebrew letter and Yiddish ligature record.
//!
//! Each record is a private `static`. The public bindings are references to
//! it, so spelling variants such as [`DALET`] and [`DALED`] point at the
//! same record rather than at copies.

use super::record::HebrewChar;

mod records {
    use crate::glyph::record::{HebrewChar, HebrewCharKind};

    pub(super) static ALEPH: HebrewChar =
        HebrewChar::new("א", "Aleph", "אָלֶף").with_name_aliases(&["Alef"]);
    pub(super) static BET: HebrewChar = HebrewChar::new("בּ", "Bet", "בֵּית");
    pub(super) static VET: HebrewChar = HebrewChar::new("ב", "Vet", "בֵית");
    pub(super) static GIMEL: HebrewChar = HebrewChar::new("ג", "Gimel", "גִימֵל");
    pub(super) static DALET: HebrewChar =
        HebrewChar::new("ד", "Dalet", "דָלֶת").with_name_aliases(&["Daled"]);
    pub(super) static HE: HebrewChar =
        HebrewChar::new("ה", "He", "הֵא").with_name_aliases(&["Hei", "Hey"]);
    pub(super) static VAV: HebrewChar =
        HebrewChar::new("ו", "Vav", "וָו").with_name_aliases(&["Vuv"]);
    pub(super) static ZAYIN: HebrewChar = HebrewChar::new("ז", "Zayin", "זַיִן");
    pub(super) static CHET: HebrewChar =
        HebrewChar::new("ח", "Chet", "חֵית").with_name_aliases(&["Het", "Ches"]);
    pub(super) static TET: HebrewChar =
        HebrewChar::new("ט", "Tet", "טֵית").with_name_aliases(&["Tes"]);
    pub(super) static YOD: HebrewChar =
        HebrewChar::new("י", "Yod", "יוֹד").with_name_aliases(&["Yud"]);
    pub(super) static CAF: HebrewChar = HebrewChar::new("כּ", "Kaf", "כַּף");
    pub(super) static KAF_SOFIT: HebrewChar = HebrewChar::new("ךּ", "Kaf Sofit", "כַּף סוֹפִית")
        .with_name_aliases(&["Final Kaf"])
        .final_form();
    pub(super) static CHAF: HebrewChar = HebrewChar::new("כ", "Chaf", "כַף");
    pub(super) static CHAF_SOFIT: HebrewChar = HebrewChar::new("ך", "Chaf Sofit", "כַף סוֹפִית")
        .with_name_aliases(&["Final Chaf"])
        .final_form();
    pub(super) static LAMED: HebrewChar =
        HebrewChar::new("ל", "Lamed", "לָמֶד").with_name_aliases(&["Lamid"]);
    pub(super) static MEM: HebrewChar = HebrewChar::new("מ", "Mem", "מֵם");
    pub(super) static MEM_SOFIT: HebrewChar = HebrewChar::new("ם", "Mem Sofit", "מֵם סוֹפִית")
        .with_name_aliases(&["Final Mem"])
        .final_form();
    pub(super) static NUN: HebrewChar = HebrewChar::new("נ", "Nun", "נוּן");
    pub(super) static NUN_SOFIT: HebrewChar = HebrewChar::new("ן", "Nun Sofit", "נוּן סוֹפִית")
        .with_name_aliases(&["Final Nun"])
        .final_form();
    pub(super) static SAMEKH: HebrewChar =
        HebrewChar::new("ס", "Samekh", "סָמֶך").with_name_aliases(&["Samach"]);
    pub(super) static AYIN: HebrewChar = HebrewChar::new("ע", "Ayin", "עַיִן");
    pub(super) static PE: HebrewChar = HebrewChar::new("פּ", "Pe", "");
    pub(super) static FE: HebrewChar = HebrewChar::new("פ", "Fe", "פֵא");
    pub(super) static PE_SOFIT: HebrewChar = HebrewChar::new("ףּ", "Pe Sofit", "פֵּא סוֹפִית")
        .with_name_aliases(&["Final Pe"])
        .final_form();
    pub(super) static FE_SOFIT: HebrewChar = HebrewChar::new("ף", "Fe Sofit", "פֵא סוֹפִית")
        .with_name_aliases(&["Final Fe"])
        .final_form();
    pub(super) static TSADI: HebrewChar = HebrewChar::new("צ", "Tsadi", "צַדִי")
        .with_name_aliases(&["Tzadik"])
        .with_hebrew_name_aliases(&["צדיק"]);
    pub(super) static TSADI_SOFIT: HebrewChar =
        HebrewChar::new("ץ", "Tsadi Sofit", "צַדִי סוֹפִית")
            .with_hebrew_name_aliases(&["צדיק סופית"])
            .final_form();
    pub(super) static QOF: HebrewChar =
        HebrewChar::new("ק", "Qof", "קוֹף").with_name_aliases(&["Kuf"]);
    pub(super) static RESH: HebrewChar = HebrewChar::new("ר", "Resh", "רֵישׁ");
    // Shin and sin carry their dot; the undotted letter is its own record.
    pub(super) static SHIN: HebrewChar = HebrewChar::new("שׁ", "Shin", "שִׁין");
    pub(super) static SIN: HebrewChar = HebrewChar::new("שׂ", "Sin", "שִׂין");
    pub(super) static PLAIN_SIN: HebrewChar =
        HebrewChar::new("ש", "Plain Sin", "שִׁין").with_hebrew_name_aliases(&["שִׂין"]);
    pub(super) static TAV: HebrewChar =
        HebrewChar::new("תּ", "Tav", "תּו").with_name_aliases(&["Taf"]);
    pub(super) static SAV: HebrewChar =
        HebrewChar::new("ת", "Sav", "תָו").with_name_aliases(&["Saf"]);
    pub(super) static DOUBLE_YOD: HebrewChar = HebrewChar::new("ײ", "Double Yod", "")
        .with_name_aliases(&["Double Yud"])
        .with_classification(HebrewCharKind::YiddishLetter);
    pub(super) static DOUBLE_VAV: HebrewChar = HebrewChar::new("װ", "Double Vav", "")
        .with_name_aliases(&["Double Vuv"])
        .with_classification(HebrewCharKind::YiddishLetter);
    pub(super) static VAV_YOD: HebrewChar = HebrewChar::new("ױ", "Vav Yod", "")
        .with_classification(HebrewCharKind::YiddishLetter);
}

pub static ALEPH: &HebrewChar = &records::ALEPH;
pub static BET: &HebrewChar = &records::BET;
pub static VET: &HebrewChar = &records::VET;
pub static GIMEL: &HebrewChar = &records::GIMEL;
pub static DALET: &HebrewChar = &records::DALET;
pub static DALED: &HebrewChar = &records::DALET;
pub static HE: &HebrewChar = &records::HE;
pub static HEI: &HebrewChar = &records::HE;
pub static HEY: &HebrewChar = &records::HE;
pub static VAV: &HebrewChar = &records::VAV;
pub static VUV: &HebrewChar = &records::VAV;
pub static ZAYIN: &HebrewChar = &records::ZAYIN;
pub static CHET: &HebrewChar = &records::CHET;
pub static HET: &HebrewChar = &records::CHET;
pub static CHES: &HebrewChar = &records::CHET;
pub static TET: &HebrewChar = &records::TET;
pub static TES: &HebrewChar = &records::TET;
pub static YOD: &HebrewChar = &records::YOD;
pub static YUD: &HebrewChar = &records::YOD;
pub static CAF: &HebrewChar = &records::CAF;
pub static KAF_SOFIT: &HebrewChar = &records::KAF_SOFIT;
pub static FINAL_KAF: &HebrewChar = &records::KAF_SOFIT;
pub static CHAF: &HebrewChar = &records::CHAF;
pub static CHAF_SOFIT: &HebrewChar = &records::CHAF_SOFIT;
pub static FINAL_CHAF: &HebrewChar = &records::CHAF_SOFIT;
pub static LAMED: &HebrewChar = &records::LAMED;
pub static LAMID: &HebrewChar = &records::LAMED;
pub static MEM: &HebrewChar = &records::MEM;
pub static MEM_SOFIT: &HebrewChar = &records::MEM_SOFIT;
pub static FINAL_MEM: &HebrewChar = &records::MEM_SOFIT;
pub static NUN: &HebrewChar = &records::NUN;
pub static NUN_SOFIT: &HebrewChar = &records::NUN_SOFIT;
pub static FINAL_NUN: &HebrewChar = &records::NUN_SOFIT;
pub static SAMEKH: &HebrewChar = &records::SAMEKH;
pub static SAMACH: &HebrewChar = &records::SAMEKH;
pub static AYIN: &HebrewChar = &records::AYIN;
pub static PE: &HebrewChar = &records::PE;
pub static FE: &HebrewChar = &records::FE;
pub static PE_SOFIT: &HebrewChar = &records::PE_SOFIT;
pub static FINAL_PE: &HebrewChar = &records::PE_SOFIT;
pub static FE_SOFIT: &HebrewChar = &records::FE_SOFIT;
pub static FINAL_FE: &HebrewChar = &records::FE_SOFIT;
pub static TSADI: &HebrewChar = &records::TSADI;
pub static TZADIK: &HebrewChar = &records::TSADI;
pub static TSADI_SOFIT: &HebrewChar = &records::TSADI_SOFIT;
pub static FINAL_TSADI: &HebrewChar = &records::TSADI_SOFIT;
pub static TZADIK_SOFIT: &HebrewChar = &records::TSADI_SOFIT;
pub static FINAL_TZADIK: &HebrewChar = &records::TSADI_SOFIT;
pub static QOF: &HebrewChar = &records::QOF;
pub static KUF: &HebrewChar = &records::QOF;
pub static RESH: &HebrewChar = &records::RESH;
pub static SHIN: &HebrewChar = &records::SHIN;
pub static SIN: &HebrewChar = &records::SIN;
pub static PLAIN_SIN: &HebrewChar = &records::PLAIN_SIN;
pub static TAV: &HebrewChar = &records::TAV;
pub static TAF: &HebrewChar = &records::TAV;
pub static SAV: &HebrewChar = &records::SAV;
pub static SAF: &HebrewChar = &records::SAV;
pub static DOUBLE_YOD: &HebrewChar = &records::DOUBLE_YOD;
pub static DOUBLE_YUD: &HebrewChar = &records::DOUBLE_YOD;
pub static DOUBLE_VAV: &HebrewChar = &records::DOUBLE_VAV;
pub static DOUBLE_VUV: &HebrewChar = &records::DOUBLE_VAV;
pub static VAV_YOD: &HebrewChar = &records::VAV_YOD;
pub static VAV_YUD: &HebrewChar = &records::VAV_YOD;
pub static VUV_YOD: &HebrewChar = &records::VAV_YOD;
pub static VUV_YUD: &HebrewChar = &records::VAV_YOD;

/// Every record, in alphabet order, Yiddish ligatures last.
pub static ALL_CHARS: &[&HebrewChar] = &[
    &records::ALEPH,
    &records::BET,
    &records::VET,
    &records::GIMEL,
    &records::DALET,
    &records::HE,
    &records::VAV,
    &records::ZAYIN,
    &records::CHET,
    &records::TET,
    &records::YOD,
    &records::CAF,
    &records::KAF_SOFIT,
    &records::CHAF,
    &records::CHAF_SOFIT,
    &records::LAMED,
    &records::MEM,
    &records::MEM_SOFIT,
    &records::NUN,
    &records::NUN_SOFIT,
    &records::SAMEKH,
    &records::AYIN,
    &records::PE,
    &records::FE,
    &records::PE_SOFIT,
    &records::FE_SOFIT,
    &records::TSADI,
    &records::TSADI_SOFIT,
    &records::QOF,
    &records::RESH,
    &records::SHIN,
    &records::SIN,
    &records::PLAIN_SIN,
    &records::TAV,
    &records::SAV,
    &records::DOUBLE_YOD,
    &records::DOUBLE_VAV,
    &records::VAV_YOD,
];
