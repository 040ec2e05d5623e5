/// 界面语言，仅影响展示，不影响计算
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lang {
    #[default]
    En,
    He,
}

impl Lang {
    /// 未知或缺失的语言代码回退到英文
    pub fn from_code(code: Option<&str>) -> Self {
        match code.map(str::trim) {
            Some("he") => Lang::He,
            _ => Lang::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::He => "he",
        }
    }

    pub fn dir(self) -> &'static str {
        match self {
            Lang::En => "ltr",
            Lang::He => "rtl",
        }
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Lang::En => &EN,
            Lang::He => &HE,
        }
    }
}

pub struct Strings {
    pub title: &'static str,
    pub language: &'static str,
    pub scan_type: &'static str,
    pub select: &'static str,
    pub all: &'static str,
    pub each: &'static str,
    pub reading: &'static str,
    pub retail: &'static str,
    pub man: &'static str,
    pub woman: &'static str,
    pub kids: &'static str,
    pub clothing: &'static str,
    pub shoes: &'static str,
    pub perfumes: &'static str,
    pub calculate: &'static str,
    pub result: &'static str,
    pub err_empty: &'static str,
    /// `{field}` 会被替换为字段名
    pub err_missing: &'static str,
    pub err_retail: &'static str,
    pub err_invalid: &'static str,
    pub err_zero_retail: &'static str,
    pub notice_method: &'static str,
    pub notice_unexpected: &'static str,
}

impl Strings {
    pub fn missing_field(&self, field: &str) -> String {
        self.err_missing.replace("{field}", field)
    }
}

static EN: Strings = Strings {
    title: "Reading % Calculator (ZARA)",
    language: "Language:",
    scan_type: "Scan Type:",
    select: "-- Select --",
    all: "All Sections Together",
    each: "Each Section Separately",
    reading: "Reading (scanned items):",
    retail: "Retail (expected items):",
    man: "MAN",
    woman: "WOMAN",
    kids: "KIDS",
    clothing: "Clothing",
    shoes: "Shoes",
    perfumes: "Perfumes",
    calculate: "Calculate",
    result: "Result:",
    err_empty: "All fields are required. Please make sure none are left empty.",
    err_missing: "Missing value for: {field}. Please enter a number.",
    err_retail: "Retail value is required. Please enter a number.",
    err_invalid: "Invalid input. Please enter only numeric values.",
    err_zero_retail: "Retail value must not be zero.",
    notice_method: "Method Not Allowed (405). Please select scan type again.",
    notice_unexpected: "Unexpected Error (500). Please try again or select scan type again.",
};

static HE: Strings = Strings {
    title: "מחשבון אחוז סריקות (ZARA)",
    language: "שפה:",
    scan_type: "סוג סריקה:",
    select: "-- בחר --",
    all: "כל המחלקות יחד",
    each: "כל מחלקה בנפרד",
    reading: "כמות שנסרקה:",
    retail: "כמות צפויה:",
    man: "גברים",
    woman: "נשים",
    kids: "ילדים",
    clothing: "ביגוד",
    shoes: "נעליים",
    perfumes: "בשמים",
    calculate: "חשב",
    result: "תוצאה:",
    err_empty: "יש למלא את כל השדות.",
    err_missing: "חסר ערך עבור: {field}. יש להכניס מספר.",
    err_retail: "יש להכניס ערך לריטייל.",
    err_invalid: "קלט לא תקין. נא להזין מספרים בלבד.",
    err_zero_retail: "ערך הריטייל אינו יכול להיות אפס.",
    notice_method: "הפעולה אינה מותרת (405). נא לבחור סוג סריקה מחדש.",
    notice_unexpected: "שגיאה לא צפויה (500). נא לנסות שוב או לבחור סוג סריקה מחדש.",
};
