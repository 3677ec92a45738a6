//! View data and rendering for the list view.
//!
//! The handler populates [`ListViewData`], an explicit, strongly typed
//! record of everything the list template needs; no stringly-keyed
//! attribute bag is involved. Rendering proper is the concern of an
//! external collaborator; [`render_list`] is the built-in stand-in that
//! turns the view data into a self-contained HTML document.

use std::fmt::Write;

use serde::Serialize;
use url::form_urlencoded;
use ward_store::Patient;

use crate::flash::Flash;

/// View data for the list view.
#[derive(Debug, Clone, Serialize)]
pub struct ListViewData {
    /// The records of the current page.
    pub patients: Vec<Patient>,

    /// Total page count.
    pub pages: u32,

    /// The echoed current page number.
    pub current_page: u32,

    /// The echoed page size (carried into row actions and forms).
    pub page_size: u32,

    /// The echoed search keyword.
    pub keyword: String,

    /// Empty template record backing the "new patient" form.
    pub new_patient: Patient,

    /// One-shot notice from the previous action, if any.
    pub notice: Option<Flash>,
}

/// Builds a `page=..&size=..&keyword=..` query string.
pub(crate) fn list_query(page: u32, size: u32, keyword: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("page", &page.to_string())
        .append_pair("size", &size.to_string())
        .append_pair("keyword", keyword)
        .finish()
}

/// Escapes text for safe interpolation into HTML.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders the list view as a self-contained HTML document.
pub fn render_list(data: &ListViewData) -> String {
    let mut html = String::with_capacity(2048);
    let context = list_query(data.current_page, data.page_size, &data.keyword);

    html.push_str("<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Patients</title>\n</head>\n<body>\n<h1>Patients</h1>\n");

    if let Some(notice) = &data.notice {
        let _ = writeln!(
            html,
            "<p class=\"notice\">{}</p>",
            escape_html(&notice.message)
        );
    }

    // Search form round-trips the keyword; page resets to the first window.
    let _ = writeln!(
        html,
        "<form class=\"search\" method=\"get\" action=\"/index\">\n\
         <input type=\"text\" name=\"keyword\" value=\"{}\">\n\
         <input type=\"hidden\" name=\"size\" value=\"{}\">\n\
         <button type=\"submit\">Search</button>\n</form>",
        escape_html(&data.keyword),
        data.page_size,
    );

    html.push_str(
        "<table>\n<thead>\n<tr><th>Id</th><th>Name</th><th>Birth date</th>\
         <th>Sick</th><th>Score</th><th></th></tr>\n</thead>\n<tbody>\n",
    );

    for patient in &data.patients {
        let id = patient.id.unwrap_or_default();
        let birth_date = patient
            .birth_date
            .map(|d| d.to_string())
            .unwrap_or_default();

        let _ = writeln!(
            html,
            "<tr class=\"patient-row\">\
             <td>{id}</td><td>{name}</td><td>{birth_date}</td>\
             <td>{sick}</td><td>{score}</td>\
             <td><a class=\"delete\" href=\"/delete?id={id}&amp;{context}\">Delete</a>\n\
             <form class=\"edit\" method=\"post\" action=\"/patients/{id}?{context}\">\n\
             <input type=\"text\" name=\"name\" value=\"{name}\">\n\
             <input type=\"date\" name=\"birth_date\" value=\"{birth_date}\">\n\
             <input type=\"checkbox\" name=\"sick\"{checked}>\n\
             <input type=\"number\" name=\"score\" value=\"{score}\">\n\
             <button type=\"submit\">Update</button>\n</form></td></tr>",
            name = escape_html(&patient.name),
            sick = patient.sick,
            score = patient.score,
            checked = if patient.sick { " checked" } else { "" },
            context = escape_html(&context),
        );
    }

    html.push_str("</tbody>\n</table>\n<nav class=\"pager\">\n");
    for page in 0..data.pages {
        let query = list_query(page, data.page_size, &data.keyword);
        let class = if page == data.current_page {
            "page current"
        } else {
            "page"
        };
        let _ = writeln!(
            html,
            "<a class=\"{class}\" href=\"/index?{}\">{}</a>",
            escape_html(&query),
            page + 1,
        );
    }
    html.push_str("</nav>\n");

    // New-patient form, backed by the empty template record.
    let new = &data.new_patient;
    let _ = writeln!(
        html,
        "<h2>New patient</h2>\n\
         <form class=\"new\" method=\"post\" action=\"/patients/save?{context}\">\n\
         <input type=\"text\" name=\"name\" value=\"{name}\">\n\
         <input type=\"date\" name=\"birth_date\" value=\"{birth_date}\">\n\
         <input type=\"checkbox\" name=\"sick\"{checked}>\n\
         <input type=\"number\" name=\"score\" value=\"{score}\">\n\
         <button type=\"submit\">Save</button>\n</form>",
        context = escape_html(&context),
        name = escape_html(&new.name),
        birth_date = new.birth_date.map(|d| d.to_string()).unwrap_or_default(),
        checked = if new.sick { " checked" } else { "" },
        score = new.score,
    );

    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn view_data(patients: Vec<Patient>) -> ListViewData {
        ListViewData {
            patients,
            pages: 1,
            current_page: 0,
            page_size: 5,
            keyword: String::new(),
            new_patient: Patient::default(),
            notice: None,
        }
    }

    #[test]
    fn test_renders_patient_rows() {
        let patient = Patient::new(
            "Dupont",
            NaiveDate::from_ymd_opt(1990, 5, 21),
            true,
            85,
        )
        .with_id(1);
        let html = render_list(&view_data(vec![patient]));

        assert!(html.contains("Dupont"));
        assert!(html.contains("1990-05-21"));
        assert_eq!(html.matches("patient-row").count(), 1);
    }

    #[test]
    fn test_renders_notice_when_present() {
        let mut data = view_data(vec![]);
        data.notice = Some(Flash::new("Patient saved."));
        let html = render_list(&data);
        assert!(html.contains("Patient saved."));

        data.notice = None;
        let html = render_list(&data);
        assert!(!html.contains("class=\"notice\""));
    }

    #[test]
    fn test_pager_has_one_link_per_page() {
        let mut data = view_data(vec![]);
        data.pages = 3;
        data.current_page = 1;
        let html = render_list(&data);

        assert_eq!(html.matches("class=\"page\"").count(), 2);
        assert_eq!(html.matches("class=\"page current\"").count(), 1);
    }

    #[test]
    fn test_escapes_untrusted_text() {
        let patient = Patient::new("<script>alert(1)</script>", None, false, 0).with_id(1);
        let html = render_list(&view_data(vec![patient]));

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_row_actions_carry_list_context() {
        let patient = Patient::new("Dupont", None, false, 0).with_id(4);
        let mut data = view_data(vec![patient]);
        data.keyword = "dup".to_string();
        data.page_size = 7;
        let html = render_list(&data);

        assert!(html.contains("/delete?id=4"));
        assert!(html.contains("size=7"));
        assert!(html.contains("keyword=dup"));
        assert!(html.contains("/patients/4?"));
    }

    #[test]
    fn test_list_query_encodes_keyword() {
        let query = list_query(0, 5, "a b&c");
        assert_eq!(query, "page=0&size=5&keyword=a+b%26c");
    }
}
