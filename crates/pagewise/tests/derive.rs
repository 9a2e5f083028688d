//! Tests for `#[derive(Listable)]` against the real engine.

use pagewise::{
    FilterLabel, ListQueryEngine, ListView, ListViewConfig, Listable, Number, Value, ALL,
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Stage {
    Applied,
    Offer,
    Enrolled,
}

impl FilterLabel for Stage {
    fn filter_label(&self) -> &'static str {
        match self {
            Stage::Applied => "applied",
            Stage::Offer => "offer",
            Stage::Enrolled => "enrolled",
        }
    }
}

#[derive(Debug, Clone, pagewise_macros::Listable)]
struct Student {
    #[list(text)]
    name: String,
    #[list(optional)]
    agent: Option<String>,
    #[list(text, rename = "destination")]
    country: &'static str,
    #[list(number)]
    intake: u16,
    #[list(bool)]
    scholarship: bool,
    #[list(label)]
    stage: Stage,
    #[list(skip)]
    #[allow(dead_code)]
    passport_no: String,
    #[allow(dead_code)]
    notes: String,
}

fn student(
    name: &str,
    agent: Option<&str>,
    country: &'static str,
    intake: u16,
    stage: Stage,
) -> Student {
    Student {
        name: name.to_string(),
        agent: agent.map(str::to_string),
        country,
        intake,
        scholarship: intake == 2025,
        stage,
        passport_no: "X0000000".to_string(),
        notes: String::new(),
    }
}

fn roster() -> Vec<Student> {
    vec![
        student(
            "Aisha Bello",
            Some("Global Pathways"),
            "Canada",
            2025,
            Stage::Offer,
        ),
        student("Diego Ramos", None, "Spain", 2024, Stage::Applied),
        student(
            "Mei Tanaka",
            Some("Bright Futures"),
            "Canada",
            2024,
            Stage::Enrolled,
        ),
        student(
            "Tom Becker",
            Some("Global Pathways"),
            "Germany",
            2025,
            Stage::Applied,
        ),
    ]
}

#[test]
fn generated_constants() {
    assert_eq!(Student::NAME, "name");
    assert_eq!(Student::AGENT, "agent");
    assert_eq!(Student::DESTINATION, "destination");
    assert_eq!(Student::INTAKE, "intake");
    assert_eq!(Student::SCHOLARSHIP, "scholarship");
    assert_eq!(Student::STAGE, "stage");
}

#[test]
fn generated_field_values() {
    let students = roster();
    let s = &students[0];
    assert_eq!(s.field_value("name"), Value::String("Aisha Bello"));
    assert_eq!(s.field_value("agent"), Value::String("Global Pathways"));
    assert_eq!(s.field_value("destination"), Value::String("Canada"));
    assert_eq!(s.field_value("intake"), Value::Number(Number::U64(2025)));
    assert_eq!(s.field_value("scholarship"), Value::Bool(true));
    assert_eq!(s.field_value("stage"), Value::String("offer"));
}

#[test]
fn skipped_and_unannotated_fields_are_hidden() {
    let students = roster();
    let s = &students[0];
    assert_eq!(s.field_value("passport_no"), Value::None);
    assert_eq!(s.field_value("notes"), Value::None);
    assert_eq!(s.field_value("country"), Value::None);
}

#[test]
fn missing_optional_is_none() {
    let students = roster();
    let s = &students[1];
    assert_eq!(s.field_value(Student::AGENT), Value::None);
}

#[test]
fn engine_with_derived_accessor() {
    let students = roster();
    let mut engine = ListQueryEngine::configure(
        [Student::NAME, Student::AGENT],
        [
            (Student::STAGE, ALL),
            (Student::DESTINATION, ALL),
            (Student::INTAKE, ALL),
        ],
    );

    engine.set_query("pathways");
    let names: Vec<&str> = engine
        .apply(&students, Student::accessor)
        .into_iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(names, vec!["Aisha Bello", "Tom Becker"]);

    engine.clear_query();
    engine.set_filter(Student::STAGE, "applied");
    engine.set_filter(Student::INTAKE, "2024");
    let names: Vec<&str> = engine
        .apply(&students, Student::accessor)
        .into_iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(names, vec!["Diego Ramos"]);
}

#[test]
fn list_view_with_derived_accessor() {
    let students = roster();
    let engine = ListQueryEngine::configure([Student::NAME], [Student::DESTINATION]);
    let mut view = ListView::new(engine, ListViewConfig::with_page_size(1));

    view.set_filter(Student::DESTINATION, "Canada");
    let page = view.render(&students, Student::accessor);
    assert_eq!(page.filtered_count, 2);
    assert_eq!(page.state.total_pages, 2);
    assert_eq!(page.items[0].name, "Aisha Bello");

    view.next();
    let page = view.render(&students, Student::accessor);
    assert_eq!(page.items[0].name, "Mei Tanaka");
}

#[cfg(feature = "derive")]
mod reexported {
    use pagewise::{ListQueryEngine, Listable, Value};

    #[derive(pagewise::Listable)]
    struct Agency {
        #[list(text)]
        name: String,
        #[list(text)]
        region: String,
    }

    #[test]
    fn derive_through_pagewise() {
        let agencies = vec![
            Agency {
                name: "Global Pathways".to_string(),
                region: "EMEA".to_string(),
            },
            Agency {
                name: "Bright Futures".to_string(),
                region: "APAC".to_string(),
            },
        ];
        assert_eq!(Agency::REGION, "region");
        assert_eq!(
            agencies[1].field_value("name"),
            Value::String("Bright Futures")
        );

        let mut engine = ListQueryEngine::configure([Agency::NAME], [Agency::REGION]);
        engine.set_filter(Agency::REGION, "EMEA");
        let names: Vec<&str> = engine
            .apply(&agencies, Agency::accessor)
            .into_iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, vec!["Global Pathways"]);
    }
}
