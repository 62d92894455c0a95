//! Askama templates for the web frontend.

use askama::Template;
use chrono::NaiveDate;

use crate::domain::{SearchMode, format_iso_date, format_picker_date};
use crate::form::{Field, SearchForm};
use crate::locations::Locations;
use crate::query::DisplayableSearchSummary;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Landing page with the search tabs.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub tabs: Vec<TabView>,
    /// The bus form; `None` when another tab is selected
    pub form: Option<FormView>,
    /// Transient notice shown above the form
    pub notice: Option<String>,
}

/// Results page.
#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsTemplate {
    pub summary: SummaryView,
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// One search tab.
#[derive(Debug, Clone)]
pub struct TabView {
    pub href: String,
    pub label: &'static str,
    pub is_active: bool,
}

impl TabView {
    /// All tabs, with `active` highlighted.
    pub fn all(active: SearchMode) -> Vec<TabView> {
        SearchMode::ALL
            .iter()
            .map(|mode| TabView {
                href: format!("/?tab={}", mode.as_str()),
                label: mode.label(),
                is_active: *mode == active,
            })
            .collect()
    }
}

/// A location option in a select box.
#[derive(Debug, Clone)]
pub struct OptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Bus search form view model.
///
/// Rendered forms are always editable. The in-flight "SEARCHING..." state is
/// driven by `static/app.js` while the browser posts.
#[derive(Debug, Clone)]
pub struct FormView {
    pub from_options: Vec<OptionView>,
    pub to_options: Vec<OptionView>,
    /// Departure date as a date input value (`YYYY-MM-DD`, or empty)
    pub departure_date: String,
    /// Departure date as the picker shows it
    pub departure_display: Option<String>,
    pub return_date: String,
    pub return_display: Option<String>,
    pub is_round_trip: bool,
    pub passengers: String,
    /// Earliest selectable departure (`YYYY-MM-DD`)
    pub min_departure: String,
    /// Earliest selectable return (`YYYY-MM-DD`)
    pub min_return: String,
    pub from_error: Option<String>,
    pub to_error: Option<String>,
    pub departure_error: Option<String>,
    pub return_error: Option<String>,
    pub passengers_error: Option<String>,
}

impl FormView {
    /// Build the view of a form.
    pub fn from_form(form: &SearchForm, locations: &Locations, today: NaiveDate) -> Self {
        let state = form.state();
        let errors = form.errors();
        let error = |field: Field| errors.get(field).map(str::to_string);

        let options = |selected: &str| -> Vec<OptionView> {
            locations
                .iter()
                .map(|loc| OptionView {
                    value: loc.short_code.clone(),
                    label: loc.english_name.clone(),
                    selected: loc.short_code == selected,
                })
                .collect()
        };

        Self {
            from_options: options(&state.from),
            to_options: options(&state.to),
            departure_date: format_iso_date(state.departure_date),
            departure_display: format_picker_date(state.departure_date),
            return_date: format_iso_date(state.return_date),
            return_display: format_picker_date(state.return_date),
            is_round_trip: state.is_round_trip,
            passengers: state
                .passengers
                .map(|n| n.to_string())
                .unwrap_or_default(),
            min_departure: format_iso_date(Some(form.min_departure_date(today))),
            min_return: format_iso_date(Some(form.min_return_date(today))),
            from_error: error(Field::From),
            to_error: error(Field::To),
            departure_error: error(Field::DepartureDate),
            return_error: error(Field::ReturnDate),
            passengers_error: error(Field::Passengers),
        }
    }
}

/// A labelled row on the results page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
}

/// Results page view model.
#[derive(Debug, Clone)]
pub struct SummaryView {
    pub rows: Vec<SummaryRow>,
}

impl SummaryView {
    /// Lay out a decoded summary.
    ///
    /// The return date row only appears when a return date was given.
    pub fn from_summary(summary: &DisplayableSearchSummary) -> Self {
        let row = |label: &'static str, value: &str| SummaryRow {
            label,
            value: value.to_string(),
        };

        let mut rows = vec![
            row("From:", &summary.from_name),
            row("To:", &summary.to_name),
            row("Departure date:", &summary.departure_date),
        ];
        if let Some(ret) = &summary.return_date {
            rows.push(row("Return date:", ret));
        }
        rows.push(row("No of passenger:", &summary.passengers));

        Self { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FieldEdit, RedirectNavigator, ValidationContext, ValidationPolicy};
    use crate::locations::Location;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn locations() -> Locations {
        Locations::from_records(vec![
            Location::new("HCM", "Ho Chi Minh City", "VN-SG"),
            Location::new("HAN", "Ha Noi", "VN-HN"),
        ])
    }

    fn summary(ret: Option<&str>) -> DisplayableSearchSummary {
        DisplayableSearchSummary {
            mode: "bus".into(),
            from_code: "HCM".into(),
            from_name: "Ho Chi Minh City".into(),
            to_code: "HAN".into(),
            to_name: "Ha Noi".into(),
            departure_date: "2025-07-01".into(),
            return_date: ret.map(str::to_string),
            passengers: "3".into(),
        }
    }

    #[test]
    fn tabs_highlight_active() {
        let tabs = TabView::all(SearchMode::Hotel);
        assert_eq!(tabs.len(), 3);
        assert_eq!(tabs[0].label, "Bus & Shuttle");
        assert_eq!(tabs[1].href, "/?tab=hotel");
        assert!(!tabs[0].is_active);
        assert!(tabs[1].is_active);
    }

    #[test]
    fn summary_rows_with_return() {
        let view = SummaryView::from_summary(&summary(Some("2025-07-10")));
        let labels: Vec<_> = view.rows.iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            ["From:", "To:", "Departure date:", "Return date:", "No of passenger:"]
        );
        assert_eq!(view.rows[3].value, "2025-07-10");
    }

    #[test]
    fn summary_rows_without_return() {
        let view = SummaryView::from_summary(&summary(None));
        assert_eq!(view.rows.len(), 4);
        assert!(view.rows.iter().all(|r| r.label != "Return date:"));
    }

    #[test]
    fn form_view_of_fresh_form() {
        let today = date(2025, 6, 1);
        let view = FormView::from_form(&SearchForm::new(), &locations(), today);

        assert_eq!(view.from_options.len(), 2);
        assert!(view.from_options.iter().all(|o| !o.selected));
        assert_eq!(view.departure_date, "");
        assert_eq!(view.departure_display, None);
        assert_eq!(view.passengers, "1");
        assert_eq!(view.min_departure, "2025-06-01");
        assert_eq!(view.min_return, "2025-06-01");
        assert!(!view.is_round_trip);
    }

    #[test]
    fn form_view_carries_selection_and_errors() {
        let today = date(2025, 6, 1);
        let mut form = SearchForm::new();
        form.apply(FieldEdit::From("HAN".into()));
        form.apply(FieldEdit::DepartureDate(Some(date(2025, 6, 20))));
        let ctx = ValidationContext::new(ValidationPolicy::default(), today);
        form.submit(&ctx, &mut RedirectNavigator::new("/search"));

        let view = FormView::from_form(&form, &locations(), today);
        assert!(view.from_options[1].selected);
        assert!(!view.to_options[1].selected);
        assert_eq!(view.min_return, "2025-06-20");
        assert_eq!(
            view.departure_display.as_deref(),
            Some("20 / 06 / 2025   00:00")
        );
        assert_eq!(view.from_error, None);
        assert_eq!(view.to_error.as_deref(), Some("Please select arrival location"));
    }

    #[test]
    fn results_page_renders_rows() {
        let html = ResultsTemplate {
            summary: SummaryView::from_summary(&summary(None)),
        }
        .render()
        .unwrap();

        assert!(html.contains("Ho Chi Minh City"));
        assert!(html.contains("2025-07-01"));
        assert!(!html.contains("Return date:"));
    }

    #[test]
    fn results_page_escapes_values() {
        let mut s = summary(None);
        s.from_name = "<script>".into();
        let html = ResultsTemplate {
            summary: SummaryView::from_summary(&s),
        }
        .render()
        .unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn index_page_renders_form_and_notice() {
        let html = IndexTemplate {
            tabs: TabView::all(SearchMode::Bus),
            form: Some(FormView::from_form(
                &SearchForm::new(),
                &locations(),
                date(2025, 6, 1),
            )),
            notice: Some("An error occurred. Please try again.".into()),
        }
        .render()
        .unwrap();

        assert!(html.contains("Travel Smarter, Not Harder"));
        assert!(html.contains("An error occurred. Please try again."));
        assert!(html.contains(r#"name="departure_date""#));
        assert!(html.contains(r#"min="2025-06-01""#));
        assert!(html.contains(r#"<button type="submit">SEARCH</button>"#));
    }

    #[test]
    fn index_page_other_tab_shows_no_data() {
        let html = IndexTemplate {
            tabs: TabView::all(SearchMode::Flight),
            form: None,
            notice: None,
        }
        .render()
        .unwrap();

        assert!(html.contains("No data"));
        assert!(!html.contains(r#"name="departure_date""#));
    }
}
