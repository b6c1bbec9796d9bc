//! Statute alias table used to widen keyword queries.
//!
//! Practitioners search by many names for the same statute: English short
//! titles, abbreviations, Bengali names, and well-known section numbers.
//! Each catalogue entry maps one display name to the needles searched for
//! it.

/// One statute: display name plus alias needles.
#[derive(Debug, Clone, Copy)]
pub struct StatuteAliases {
    /// Display name shown in the statute picker.
    pub name: &'static str,

    /// Substrings searched in headnote and title fields.
    pub aliases: &'static [&'static str],
}

/// The catalogue of statutes known to the search layer.
pub const STATUTES: &[StatuteAliases] = &[
    StatuteAliases {
        name: "Constitution of Bangladesh (সংবিধান)",
        aliases: &["Constitution", "Konstitution", "Art.", "Article", "সংবিধান"],
    },
    StatuteAliases {
        name: "Code of Civil Procedure (CPC/দেওয়ানী)",
        aliases: &[
            "CPC",
            "Code of Civil Procedure",
            "Civil Procedure",
            "C.P.C",
            "দেওয়ানী",
            "Order",
            "Rule",
        ],
    },
    StatuteAliases {
        name: "Code of Criminal Procedure (CrPC/ফৌজদারী)",
        aliases: &[
            "CrPC",
            "Code of Criminal Procedure",
            "Criminal Procedure",
            "Cr.P.C",
            "ফৌজদারী",
            "561A",
            "498",
            "s. 144",
        ],
    },
    StatuteAliases {
        name: "Penal Code (দণ্ডবিধি)",
        aliases: &[
            "Penal",
            "PC",
            "P.C",
            "dondobidhi",
            "দণ্ডবিধি",
            "302",
            "304",
            "1860",
            "Penal Code",
        ],
    },
    StatuteAliases {
        name: "Evidence Act (সাক্ষ্য আইন)",
        aliases: &["Evidence", "sakkho", "sakhho", "সাক্ষ্য"],
    },
    StatuteAliases {
        name: "Limitation Act (তামাদি আইন)",
        aliases: &["Limitation", "Section 5", "condonation", "তামাদি"],
    },
    StatuteAliases {
        name: "Specific Relief Act (সুনির্দিষ্ট প্রতিকার)",
        aliases: &["Specific Relief", "SR Act", "S.R. Act", "সুনির্দিষ্ট প্রতিকার"],
    },
    StatuteAliases {
        name: "Nari O Shishu Nirjatan Daman Ain (নারী ও শিশু)",
        aliases: &[
            "Nari O Shishu",
            "Women and Children",
            "Nari-O-Shishu",
            "নারী ও শিশু",
            "নারী শিশু",
            "Shishu",
        ],
    },
    StatuteAliases {
        name: "Artha Rin Adalat Ain (অর্থ ঋণ আদালত)",
        aliases: &["Artha Rin", "Money Loan", "Adalat", "অর্থ ঋণ"],
    },
    StatuteAliases {
        name: "Digital Security Act (ডিজিটাল নিরাপত্তা)",
        aliases: &["Digital Security", "Cyber", "ICT Act", "ডিজিটাল নিরাপত্তা"],
    },
    StatuteAliases {
        name: "Narcotics Control Act (মাদক দ্রব্য নিয়ন্ত্রণ)",
        aliases: &[
            "Narcotics",
            "Madok",
            "Drug",
            "Table",
            "Yaba",
            "Heroin",
            "Phensedyl",
            "মাদক",
        ],
    },
    StatuteAliases {
        name: "Special Powers Act (বিশেষ ক্ষমতা)",
        aliases: &["Special Powers", "SPA", "Special Power", "বিশেষ ক্ষমতা"],
    },
    StatuteAliases {
        name: "Anti-Terrorism Act (সন্ত্রাস বিরোধী)",
        aliases: &["Anti-Terrorism", "Terrorism", "সন্ত্রাস"],
    },
    StatuteAliases {
        name: "Arms Act (অস্ত্র আইন)",
        aliases: &["Arms Act", "অস্ত্র"],
    },
    StatuteAliases {
        name: "Ain Srinkhola Bighnokari (দ্রুত বিচার)",
        aliases: &["Druto Bichar", "Speedy Trial", "দ্রুত বিচার"],
    },
    StatuteAliases {
        name: "Mobile Court Act (মোবাইল কোর্ট)",
        aliases: &["Mobile Court", "মোবাইল কোর্ট"],
    },
    StatuteAliases {
        name: "Transfer of Property Act (সম্পত্তি হস্তান্তর)",
        aliases: &["Transfer of Property", "TP Act", "T.P. Act", "সম্পত্তি হস্তান্তর"],
    },
    StatuteAliases {
        name: "Contract Act (চুক্তি আইন)",
        aliases: &["Contract Act", "Agreement", "চুক্তি"],
    },
    StatuteAliases {
        name: "Registration Act (রেজিস্ট্রেশন)",
        aliases: &["Registration", "Section 17", "রেজিস্ট্রেশন"],
    },
    StatuteAliases {
        name: "State Acquisition & Tenancy Act (প্রজাস্বত্ব)",
        aliases: &["State Acquisition", "SAT Act", "Tenancy", "প্রজাস্বত্ব"],
    },
    StatuteAliases {
        name: "Vested Property Return Act (অর্পিত সম্পত্তি)",
        aliases: &["Vested Property", "Enemy Property", "অর্পিত", "Vested"],
    },
    StatuteAliases {
        name: "Trust Act (ট্রাস্ট আইন)",
        aliases: &["Trust Act", "Trustee"],
    },
    StatuteAliases {
        name: "Muslim Family Laws (মুসলিম পারিবারিক আইন)",
        aliases: &["Muslim Family", "MFLO", "Denmohar", "Dower", "Talaq"],
    },
    StatuteAliases {
        name: "Family Courts Ordinance (পারিবারিক আদালত)",
        aliases: &["Family Courts", "Family Court", "পারিবারিক"],
    },
    StatuteAliases {
        name: "Guardians and Wards Act (অভিভাবক ও প্রতিপাল্য)",
        aliases: &["Guardians and Wards", "Guardian", "Custody", "অভিভাবক"],
    },
    StatuteAliases {
        name: "Negotiable Instruments Act (NI Act/চেক ডিজঅনার)",
        aliases: &[
            "Negotiable Instruments",
            "NI Act",
            "N.I. Act",
            "138",
            "Cheque",
            "Dishonour",
            "চেক",
        ],
    },
    StatuteAliases {
        name: "Bangladesh Labor Act (শ্রম আইন)",
        aliases: &["Labor Act", "Labour", "Employment", "Worker", "শ্রম"],
    },
    StatuteAliases {
        name: "Companies Act (কোম্পানি আইন)",
        aliases: &["Companies Act", "Company Law", "Winding up", "কোম্পানি"],
    },
    StatuteAliases {
        name: "VAT Act (ভ্যাট আইন)",
        aliases: &["Value Added Tax", "VAT", "ভ্যাট", "Musok"],
    },
    StatuteAliases {
        name: "Income Tax Ordinance (আয়কর)",
        aliases: &["Income Tax", "Tax", "Taxes", "আয়কর"],
    },
    StatuteAliases {
        name: "Customs Act (কাস্টমস)",
        aliases: &["Customs", "Custom"],
    },
    StatuteAliases {
        name: "Right to Information Act (তথ্য অধিকার)",
        aliases: &["Right to Information", "RTI", "তথ্য অধিকার"],
    },
];

/// Aliases for a statute display name, when the catalogue knows it.
pub fn aliases_for(name: &str) -> Option<&'static [&'static str]> {
    STATUTES
        .iter()
        .find(|statute| statute.name == name)
        .map(|statute| statute.aliases)
}
