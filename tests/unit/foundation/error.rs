use super::*;

#[test]
fn constructors_map_to_variants() {
    assert!(matches!(
        VizardError::validation("x"),
        VizardError::Validation(_)
    ));
    assert!(matches!(VizardError::render("x"), VizardError::Render(_)));
    assert!(matches!(VizardError::serde("x"), VizardError::Serde(_)));
}

#[test]
fn display_includes_category_and_message() {
    let e = VizardError::validation("bad openness");
    assert_eq!(e.to_string(), "validation error: bad openness");
    let e = VizardError::render("flush failed");
    assert_eq!(e.to_string(), "render error: flush failed");
}

#[test]
fn anyhow_errors_convert_via_question_mark() {
    fn fails() -> VizardResult<()> {
        Err(anyhow::anyhow!("boom"))?;
        Ok(())
    }
    assert!(matches!(fails(), Err(VizardError::Other(_))));
}
