//! Marathi lexical tables used by the number speller and the recognizers
//!
//! Every cardinal from 0 to 100 is its own compound word in Marathi, so the
//! whole range is stored literally. Nothing here is derived at runtime.

/// Cardinal words for 0..=100, indexed by value
pub const CARDINALS: [&str; 101] = [
    "शून्य",
    "एक", "दोन", "तीन", "चार", "पाच",
    "सहा", "सात", "आठ", "नऊ", "दहा",
    "अकरा", "बारा", "तेरा", "चौदा", "पंधरा",
    "सोळा", "सतरा", "अठरा", "एकोणीस", "वीस",
    "एकवीस", "बावीस", "तेवीस", "चोवीस", "पंचवीस",
    "सव्वीस", "सत्तावीस", "अठ्ठावीस", "एकोणतीस", "तीस",
    "एकतीस", "बत्तीस", "तेहेतीस", "चौतीस", "पस्तीस",
    "छत्तीस", "सदतीस", "अडतीस", "एकोणचाळीस", "चाळीस",
    "एक्केचाळीस", "बेचाळीस", "त्रेचाळीस", "चव्वेचाळीस", "पंचेचाळीस",
    "सेहेचाळीस", "सत्तेचाळीस", "अठ्ठेचाळीस", "एकोणपन्नास", "पन्नास",
    "एक्कावन्न", "बावन्न", "त्रेपन्न", "चौपन्न", "पंचावन्न",
    "छप्पन्न", "सत्तावन्न", "अठ्ठावन्न", "एकोणसाठ", "साठ",
    "एकसष्ट", "बासष्ट", "त्रेसष्ट", "चौसष्ट", "पासष्ट",
    "सहासष्ट", "सदुसष्ट", "अडुसष्ट", "एकोणसत्तर", "सत्तर",
    "एकाहत्तर", "बाहत्तर", "त्र्याहत्तर", "चौऱ्याहत्तर", "पंच्याहत्तर",
    "शहात्तर", "सत्याहत्तर", "अठ्ठ्याहत्तर", "एकोणऐंशी", "ऐंशी",
    "एक्क्याऐंशी", "ब्याऐंशी", "त्र्याऐंशी", "चौऱ्याऐंशी", "पंच्याऐंशी",
    "शहाऐंशी", "सत्त्याऐंशी", "अठ्ठ्याऐंशी", "एकोणनव्वद", "नव्वद",
    "एक्क्याण्णव", "ब्याण्णव", "त्र्याण्णव", "चौऱ्याण्णव", "पंच्याण्णव",
    "शहाण्णव", "सत्त्याण्णव", "अठ्ठ्याण्णव", "नव्व्याण्णव", "शंभर",
];

/// Words for 100..=900, indexed by `hundreds - 1`
///
/// One hundred is `शंभर`, not `एकशे`.
pub const HUNDREDS: [&str; 9] = [
    "शंभर", "दोनशे", "तीनशे", "चारशे", "पाचशे", "सहाशे", "सातशे", "आठशे", "नऊशे",
];

/// Masculine ordinals for 1..=20, indexed by `n - 1`
pub const ORDINALS: [&str; 20] = [
    "पहिला", "दुसरा", "तिसरा", "चौथा", "पाचवा",
    "सहावा", "सातवा", "आठवा", "नववा", "दहावा",
    "अकरावा", "बारावा", "तेरावा", "चौदावा", "पंधरावा",
    "सोळावा", "सतरावा", "अठरावा", "एकोणिसावा", "विसावा",
];

/// Month names in calendar order, indexed by `month - 1`
pub const MONTHS: [&str; 12] = [
    "जानेवारी", "फेब्रुवारी", "मार्च", "एप्रिल", "मे", "जून",
    "जुलै", "ऑगस्ट", "सप्टेंबर", "ऑक्टोबर", "नोव्हेंबर", "डिसेंबर",
];

/// Abbreviations and their expansions, in table order
///
/// `म.` is contained in `श्रीम.`, so expansion must go longest key first.
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    ("अ.भा.", "अखिल भारतीय"),
    ("इ.स.", "ईसवी सन"),
    ("डॉ.", "डॉक्टर"),
    ("श्री.", "श्रीमान"),
    ("श्रीम.", "श्रीमती"),
    ("सौ.", "सौभाग्यवती"),
    ("कु.", "कुमारी"),
    ("प्रा.", "प्राध्यापक"),
    ("म.", "महाराष्ट्र"),
    ("वि.", "विद्यापीठ"),
];

/// Word beginnings that look like an ordinal suffix glued to digits but
/// continue into another word: लाख, रात्र(ी), वाजता/वाजून, वेळा
pub const ORDINAL_LOOKALIKE_STEMS: &[&str] = &["ख", "त्र", "ज", "ळ"];

pub const NEGATIVE: &str = "उणे";
pub const THOUSAND: &str = "हजार";
pub const LAKH: &str = "लाख";
pub const CRORE: &str = "कोटी";

/// Generic ordinal suffix appended to cardinals above the ordinal table
pub const ORDINAL_SUFFIX: &str = "वा";

/// "o'clock", used when the minute is zero
pub const HOUR_EXACT: &str = "वाजता";
/// "past the hour", joins hour and minutes
pub const HOUR_PAST: &str = "वाजून";
pub const MINUTES: &str = "मिनिटे";

pub const PERCENT: &str = "टक्के";
pub const DECIMAL_POINT: &str = "पूर्णांक";

pub const RUPEES: &str = "रुपये";
pub const DOLLARS: &str = "डॉलर";

/// Word for a single ASCII digit, `None` for anything else
pub fn digit_word(ch: char) -> Option<&'static str> {
    ch.to_digit(10).map(|d| CARDINALS[d as usize])
}

/// Month name for 1..=12
pub fn month_name(month: u64) -> Option<&'static str> {
    match month {
        1..=12 => Some(MONTHS[(month - 1) as usize]),
        _ => None,
    }
}
