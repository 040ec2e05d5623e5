use crate::api_models::{CalculateForm, CategoryField, ScanMode};
use crate::i18n::{Lang, Strings};

/// 页面渲染所需的全部状态，不依赖任何请求上下文
#[derive(Debug, Default)]
pub struct FormView {
    pub lang: Lang,
    pub mode: Option<ScanMode>,
    /// 上次提交的原始值，重新渲染时回填
    pub values: CalculateForm,
    pub messages: Vec<String>,
    pub result: Option<String>,
}

impl FormView {
    pub fn new(lang: Lang, mode: Option<ScanMode>) -> Self {
        Self {
            lang,
            mode,
            ..Default::default()
        }
    }
}

const STYLE: &str = r#"<style>
body{font-family:'Helvetica Neue',sans-serif;padding:20px;background-color:#f8f8f8;color:#111;margin:0;}
.navbar{display:flex;justify-content:center;align-items:center;padding:15px;background-color:transparent;}
.navbar img{height:102px;max-width:100%;}
h1{font-size:22px;font-weight:500;margin-bottom:20px;text-align:start;}
form{display:flex;flex-direction:column;align-items:flex-start;}
input,select,button{padding:12px;margin:10px 0;width:90%;max-width:320px;border:1px solid #ccc;border-radius:4px;font-size:16px;}
select{background-color:white;}
button{background-color:#111;color:white;cursor:pointer;border:none;}
button:hover{background-color:#333;}
.section{margin-bottom:25px;width:100%;max-width:360px;}
.error{color:red;list-style:none;padding-left:0;padding-right:0;}
.result{text-align:start;}
@media (max-width:480px){h1{font-size:18px;}.navbar img{height:auto;max-height:90px;}}
</style>"#;

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn selected(on: bool) -> &'static str {
    if on {
        " selected"
    } else {
        ""
    }
}

fn text_input(name: &str, value: Option<&str>, placeholder: Option<&str>) -> String {
    let mut out = format!("<input type=\"text\" name=\"{}\"", name);
    if let Some(placeholder) = placeholder {
        out.push_str(&format!(" placeholder=\"{}\"", escape_html(placeholder)));
    }
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        out.push_str(&format!(" value=\"{}\"", escape_html(value)));
    }
    out.push_str(" required inputmode=\"numeric\">\n");
    out
}

fn category_placeholder(field: CategoryField, t: &Strings) -> &'static str {
    match field {
        CategoryField::ManClothing | CategoryField::WomanClothing | CategoryField::KidsClothing => {
            t.clothing
        }
        CategoryField::ManShoes | CategoryField::WomanShoes | CategoryField::KidsShoes => t.shoes,
        CategoryField::ManPerfume | CategoryField::WomanPerfume | CategoryField::KidsPerfume => {
            t.perfumes
        }
    }
}

fn render_all_fields(out: &mut String, view: &FormView, t: &Strings) {
    out.push_str("<div class=\"section\">\n");
    out.push_str(&format!("<label>{}</label>\n", escape_html(t.reading)));
    out.push_str(&text_input("reading", view.values.reading.as_deref(), None));
    out.push_str(&format!("<label>{}</label>\n", escape_html(t.retail)));
    out.push_str(&text_input("retail", view.values.retail.as_deref(), None));
    out.push_str("</div>\n");
}

fn render_each_fields(out: &mut String, view: &FormView, t: &Strings) {
    out.push_str("<div class=\"section\">\n");
    for (heading, fields) in [t.man, t.woman, t.kids]
        .into_iter()
        .zip(CategoryField::ALL.chunks(3))
    {
        out.push_str(&format!("<h3>{}</h3>\n", escape_html(heading)));
        for field in fields {
            out.push_str(&text_input(
                field.name(),
                view.values.category(*field),
                Some(category_placeholder(*field, t)),
            ));
        }
    }
    out.push_str(&format!("<h3>{}</h3>\n", escape_html(t.retail)));
    out.push_str(&text_input("retail", view.values.retail.as_deref(), None));
    out.push_str("</div>\n");
}

/// 渲染完整页面
pub fn render_page(view: &FormView) -> String {
    let t = view.lang.strings();
    let lang = view.lang.code();
    let mode = view.mode.map(ScanMode::code).unwrap_or("");

    let mut out = String::new();
    out.push_str(&format!(
        "<!doctype html>\n<html lang=\"{}\" dir=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n{}\n</head>\n<body>\n",
        lang,
        view.lang.dir(),
        escape_html(t.title),
        STYLE
    ));
    out.push_str("<div class=\"navbar\"><img src=\"/static/logo.svg\" alt=\"ZARA Logo\"></div>\n");
    out.push_str(&format!("<h1>{}</h1>\n", escape_html(t.title)));

    // 语言切换：隐藏字段保留当前模式
    out.push_str("<form method=\"get\" action=\"/\">\n");
    out.push_str(&format!("<input type=\"hidden\" name=\"mode\" value=\"{}\">\n", mode));
    out.push_str(&format!("<label>{}</label>\n", escape_html(t.language)));
    out.push_str("<select name=\"lang\" onchange=\"this.form.submit()\">\n");
    out.push_str(&format!(
        "<option value=\"en\"{}>English</option>\n<option value=\"he\"{}>עברית</option>\n",
        selected(view.lang == Lang::En),
        selected(view.lang == Lang::He)
    ));
    out.push_str("</select>\n</form>\n");

    if !view.messages.is_empty() {
        out.push_str("<ul class=\"error\">\n");
        for message in &view.messages {
            out.push_str(&format!("<li>{}</li>\n", escape_html(message)));
        }
        out.push_str("</ul>\n");
    }

    out.push_str(&format!(
        "<form method=\"post\" action=\"/calculate?lang={}\">\n<div class=\"section\">\n",
        lang
    ));
    out.push_str(&format!("<label>{}</label>\n", escape_html(t.scan_type)));
    out.push_str(&format!(
        "<select name=\"mode\" required onchange=\"window.location.href='/?lang={}&amp;mode='+encodeURIComponent(this.value)\">\n",
        lang
    ));
    out.push_str(&format!("<option value=\"\">{}</option>\n", escape_html(t.select)));
    out.push_str(&format!(
        "<option value=\"all\"{}>{}</option>\n",
        selected(view.mode == Some(ScanMode::All)),
        escape_html(t.all)
    ));
    out.push_str(&format!(
        "<option value=\"each\"{}>{}</option>\n",
        selected(view.mode == Some(ScanMode::Each)),
        escape_html(t.each)
    ));
    out.push_str("</select>\n</div>\n");

    match view.mode {
        Some(ScanMode::All) => render_all_fields(&mut out, view, t),
        Some(ScanMode::Each) => render_each_fields(&mut out, view, t),
        None => {}
    }
    if view.mode.is_some() {
        out.push_str(&format!(
            "<button type=\"submit\">{}</button>\n",
            escape_html(t.calculate)
        ));
    }
    out.push_str("</form>\n");

    if let Some(result) = &view.result {
        out.push_str(&format!(
            "<h2 class=\"result\">{} {}</h2>\n",
            escape_html(t.result),
            escape_html(result)
        ));
    }
    out.push_str("</body>\n</html>\n");
    out
}
