//! Unicode general categories and scripts usable with `\p`/`\P`.

macro_rules! unicode_table {
    ($($(#[$meta:meta])* $variant:ident => $name:literal,)*) => {
        /// A Unicode property accepted by [`Regex::unicode`](crate::Regex::unicode).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Unicode {
            $($(#[$meta])* $variant,)*
        }

        impl Unicode {
            /// Every property, in table order.
            pub const ALL: &'static [Unicode] = &[$(Unicode::$variant,)*];

            /// The property name as written inside `\p{…}`.
            pub fn name(self) -> &'static str {
                match self {
                    $(Unicode::$variant => $name,)*
                }
            }
        }
    };
}

unicode_table! {
    Other => "C",
    Control => "Cc",
    Format => "Cf",
    Unassigned => "Cn",
    PrivateUse => "Co",
    Surrogate => "Cs",
    Letter => "L",
    /// `Ll`, `Lu` or `Lt`.
    LetterCased => "L&",
    LetterLower => "Ll",
    LetterModifier => "Lm",
    LetterOther => "Lo",
    LetterTitle => "Lt",
    LetterUpper => "Lu",
    Mark => "M",
    MarkSpacing => "Mc",
    MarkEnclosing => "Me",
    MarkNonSpacing => "Mn",
    Number => "N",
    NumberDecimal => "Nd",
    NumberLetter => "Nl",
    NumberOther => "No",
    Punctuation => "P",
    PunctuationConnector => "Pc",
    PunctuationDash => "Pd",
    PunctuationClose => "Pe",
    PunctuationFinal => "Pf",
    PunctuationInitial => "Pi",
    PunctuationOther => "Po",
    PunctuationOpen => "Ps",
    Symbol => "S",
    SymbolCurrency => "Sc",
    SymbolModifier => "Sk",
    SymbolMath => "Sm",
    SymbolOther => "So",
    Separator => "Z",
    SeparatorLine => "Zl",
    SeparatorParagraph => "Zp",
    SeparatorSpace => "Zs",
    ScriptArabic => "Arabic",
    ScriptArmenian => "Armenian",
    ScriptAvestan => "Avestan",
    ScriptBalinese => "Balinese",
    ScriptBamum => "Bamum",
    ScriptBatak => "Batak",
    ScriptBengali => "Bengali",
    ScriptBopomofo => "Bopomofo",
    ScriptBrahmi => "Brahmi",
    ScriptBraille => "Braille",
    ScriptBuginese => "Buginese",
    ScriptBuhid => "Buhid",
    ScriptCanadianAboriginal => "Canadian_Aboriginal",
    ScriptCarian => "Carian",
    ScriptChakma => "Chakma",
    ScriptCham => "Cham",
    ScriptCherokee => "Cherokee",
    ScriptCommon => "Common",
    ScriptCoptic => "Coptic",
    ScriptCuneiform => "Cuneiform",
    ScriptCypriot => "Cypriot",
    ScriptCyrillic => "Cyrillic",
    ScriptDeseret => "Deseret",
    ScriptDevanagari => "Devanagari",
    ScriptEgyptianHieroglyphs => "Egyptian_Hieroglyphs",
    ScriptEthiopic => "Ethiopic",
    ScriptGeorgian => "Georgian",
    ScriptGlagolitic => "Glagolitic",
    ScriptGothic => "Gothic",
    ScriptGreek => "Greek",
    ScriptGujarati => "Gujarati",
    ScriptGurmukhi => "Gurmukhi",
    ScriptHan => "Han",
    ScriptHangul => "Hangul",
    ScriptHanunoo => "Hanunoo",
    ScriptHebrew => "Hebrew",
    ScriptHiragana => "Hiragana",
    ScriptImperialAramaic => "Imperial_Aramaic",
    ScriptInherited => "Inherited",
    ScriptInscriptionalPahlavi => "Inscriptional_Pahlavi",
    ScriptInscriptionalParthian => "Inscriptional_Parthian",
    ScriptJavanese => "Javanese",
    ScriptKaithi => "Kaithi",
    ScriptKannada => "Kannada",
    ScriptKatakana => "Katakana",
    ScriptKayahLi => "Kayah_Li",
    ScriptKharoshthi => "Kharoshthi",
    ScriptKhmer => "Khmer",
    ScriptLao => "Lao",
    ScriptLatin => "Latin",
    ScriptLepcha => "Lepcha",
    ScriptLimbu => "Limbu",
    ScriptLinearB => "Linear_B",
    ScriptLisu => "Lisu",
    ScriptLycian => "Lycian",
    ScriptLydian => "Lydian",
    ScriptMalayalam => "Malayalam",
    ScriptMandaic => "Mandaic",
    ScriptMeeteiMayek => "Meetei_Mayek",
    ScriptMeroiticCursive => "Meroitic_Cursive",
    ScriptMeroiticHieroglyphs => "Meroitic_Hieroglyphs",
    ScriptMiao => "Miao",
    ScriptMongolian => "Mongolian",
    ScriptMyanmar => "Myanmar",
    ScriptNewTaiLue => "New_Tai_Lue",
    ScriptNko => "Nko",
    ScriptOgham => "Ogham",
    ScriptOlChiki => "Ol_Chiki",
    ScriptOldItalic => "Old_Italic",
    ScriptOldPersian => "Old_Persian",
    ScriptOldSouthArabian => "Old_South_Arabian",
    ScriptOldTurkic => "Old_Turkic",
    ScriptOriya => "Oriya",
    ScriptOsmanya => "Osmanya",
    ScriptPhagsPa => "Phags_Pa",
    ScriptPhoenician => "Phoenician",
    ScriptRejang => "Rejang",
    ScriptRunic => "Runic",
    ScriptSamaritan => "Samaritan",
    ScriptSaurashtra => "Saurashtra",
    ScriptSharada => "Sharada",
    ScriptShavian => "Shavian",
    ScriptSinhala => "Sinhala",
    ScriptSoraSompeng => "Sora_Sompeng",
    ScriptSundanese => "Sundanese",
    ScriptSylotiNagri => "Syloti_Nagri",
    ScriptSyriac => "Syriac",
    ScriptTagalog => "Tagalog",
    ScriptTagbanwa => "Tagbanwa",
    ScriptTaiLe => "Tai_Le",
    ScriptTaiTham => "Tai_Tham",
    ScriptTaiViet => "Tai_Viet",
    ScriptTakri => "Takri",
    ScriptTamil => "Tamil",
    ScriptTelugu => "Telugu",
    ScriptThaana => "Thaana",
    ScriptThai => "Thai",
    ScriptTibetan => "Tibetan",
    ScriptTifinagh => "Tifinagh",
    ScriptUgaritic => "Ugaritic",
    ScriptVai => "Vai",
    ScriptYi => "Yi",
}

impl Unicode {
    /// Look a property up by the name used inside `\p{…}`.
    pub fn from_name(name: &str) -> Option<Unicode> {
        Self::ALL.iter().copied().find(|property| property.name() == name)
    }

    /// `\pL` for one-letter categories, `\p{Ll}` otherwise; `\P` when negated.
    pub fn escape(self, negated: bool) -> String {
        let sigil = if negated { 'P' } else { 'p' };
        let name = self.name();
        if name.len() == 1 {
            format!("\\{sigil}{name}")
        } else {
            format!("\\{sigil}{{{name}}}")
        }
    }
}
