use serde::Deserialize;

/// 扫描模式：整体 / 分区
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    All,
    Each,
}

impl ScanMode {
    /// 只接受 "all" / "each"，其他值视为未选择
    pub fn from_code(code: Option<&str>) -> Option<Self> {
        match code {
            Some("all") => Some(ScanMode::All),
            Some("each") => Some(ScanMode::Each),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            ScanMode::All => "all",
            ScanMode::Each => "each",
        }
    }
}

/// 分区模式下的九个分类字段，顺序即校验顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryField {
    ManClothing,
    ManShoes,
    ManPerfume,
    WomanClothing,
    WomanShoes,
    WomanPerfume,
    KidsClothing,
    KidsShoes,
    KidsPerfume,
}

impl CategoryField {
    pub const ALL: [CategoryField; 9] = [
        CategoryField::ManClothing,
        CategoryField::ManShoes,
        CategoryField::ManPerfume,
        CategoryField::WomanClothing,
        CategoryField::WomanShoes,
        CategoryField::WomanPerfume,
        CategoryField::KidsClothing,
        CategoryField::KidsShoes,
        CategoryField::KidsPerfume,
    ];

    /// 表单字段名
    pub fn name(self) -> &'static str {
        match self {
            CategoryField::ManClothing => "man_clothing",
            CategoryField::ManShoes => "man_shoes",
            CategoryField::ManPerfume => "man_perfume",
            CategoryField::WomanClothing => "woman_clothing",
            CategoryField::WomanShoes => "woman_shoes",
            CategoryField::WomanPerfume => "woman_perfume",
            CategoryField::KidsClothing => "kids_clothing",
            CategoryField::KidsShoes => "kids_shoes",
            CategoryField::KidsPerfume => "kids_perfume",
        }
    }

    /// 错误提示中使用的字段名，如 "Man Clothing"
    pub fn label(self) -> String {
        self.name()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// GET / 查询参数
#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    pub lang: Option<String>,
    pub mode: Option<String>,
    pub notice: Option<String>,
}

/// 只携带语言代码的查询参数
#[derive(Debug, Default, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

/// POST /calculate 表单体，所有字段均按原样保留字符串
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculateForm {
    pub mode: Option<String>,
    pub reading: Option<String>,
    pub retail: Option<String>,
    pub man_clothing: Option<String>,
    pub man_shoes: Option<String>,
    pub man_perfume: Option<String>,
    pub woman_clothing: Option<String>,
    pub woman_shoes: Option<String>,
    pub woman_perfume: Option<String>,
    pub kids_clothing: Option<String>,
    pub kids_shoes: Option<String>,
    pub kids_perfume: Option<String>,
}

impl CalculateForm {
    pub fn scan_mode(&self) -> Option<ScanMode> {
        ScanMode::from_code(self.mode.as_deref())
    }

    pub fn category(&self, field: CategoryField) -> Option<&str> {
        let value = match field {
            CategoryField::ManClothing => &self.man_clothing,
            CategoryField::ManShoes => &self.man_shoes,
            CategoryField::ManPerfume => &self.man_perfume,
            CategoryField::WomanClothing => &self.woman_clothing,
            CategoryField::WomanShoes => &self.woman_shoes,
            CategoryField::WomanPerfume => &self.woman_perfume,
            CategoryField::KidsClothing => &self.kids_clothing,
            CategoryField::KidsShoes => &self.kids_shoes,
            CategoryField::KidsPerfume => &self.kids_perfume,
        };
        value.as_deref()
    }
}

/// 重定向时携带的提示代码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    MethodNotAllowed,
    Unexpected,
}

impl Notice {
    pub fn from_code(code: Option<&str>) -> Option<Self> {
        match code {
            Some("method_not_allowed") => Some(Notice::MethodNotAllowed),
            Some("unexpected") => Some(Notice::Unexpected),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Notice::MethodNotAllowed => "method_not_allowed",
            Notice::Unexpected => "unexpected",
        }
    }
}
