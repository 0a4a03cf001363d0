use methodo_core::model::{FicheId, MethodologyId};

use crate::vm::FicheIntent;

use super::test_harness::{
    SectionHarness, ViewHarness, ViewKind, card_html, fiche, methodology,
};

const DETAIL_PANEL: &str = "class=\"fiche-detail\"";
const MARK_SEEN: &str = "fiche-mark-seen";
const COMPLETED_CARD: &str = "fiche-card--completed";

#[test]
fn seen_fiches_render_completed_on_first_render() {
    let fiches = (1..=6).map(fiche).collect();
    let harness = SectionHarness::new(methodology(&[2, 5], 6), fiches);
    let html = harness.render();

    for id in 1..=6 {
        let card = card_html(&html, id);
        let expected = id == 2 || id == 5;
        assert_eq!(card.contains(COMPLETED_CARD), expected, "card {id}: {card}");
        assert_eq!(card.contains(MARK_SEEN), !expected, "card {id}: {card}");
    }
    assert!(!html.contains(DETAIL_PANEL), "nothing expanded yet in {html}");
    assert!(html.contains("2 / 6 fiches vues"), "missing progress in {html}");
    assert!(harness.reported().is_empty());
}

#[test]
fn expand_then_mark_first_fiche() {
    let fiches = (1..=3).map(fiche).collect();
    let mut harness = SectionHarness::new(methodology(&[], 3), fiches);

    harness.dispatch(FicheIntent::ToggleExpansion(FicheId::new(1)));
    let html = harness.render();
    assert_eq!(html.matches(DETAIL_PANEL).count(), 1, "one panel in {html}");
    assert!(card_html(&html, 1).contains(DETAIL_PANEL));
    assert!(card_html(&html, 1).contains("Question 1"));
    assert!(!card_html(&html, 2).contains(DETAIL_PANEL));

    harness.dispatch(FicheIntent::MarkComplete(FicheId::new(1)));
    let html = harness.render();
    let first = card_html(&html, 1);
    assert!(first.contains("fiche-completed-badge"), "badge missing in {first}");
    assert!(first.contains(COMPLETED_CARD));
    assert!(!first.contains(MARK_SEEN));
    assert!(card_html(&html, 2).contains(MARK_SEEN));
    assert!(card_html(&html, 3).contains(MARK_SEEN));
    assert_eq!(
        harness.reported(),
        vec![(MethodologyId::new(1), FicheId::new(1))]
    );
}

#[test]
fn marking_twice_reports_once() {
    let fiches = (1..=3).map(fiche).collect();
    let mut harness = SectionHarness::new(methodology(&[], 3), fiches);

    harness.dispatch(FicheIntent::MarkComplete(FicheId::new(2)));
    harness.dispatch(FicheIntent::MarkComplete(FicheId::new(2)));

    assert_eq!(
        harness.reported(),
        vec![(MethodologyId::new(1), FicheId::new(2))]
    );
    assert!(harness.vm().is_completed(FicheId::new(2)));
}

#[test]
fn only_one_panel_is_open_at_a_time() {
    let fiches = (1..=3).map(fiche).collect();
    let mut harness = SectionHarness::new(methodology(&[], 3), fiches);

    harness.dispatch(FicheIntent::ToggleExpansion(FicheId::new(1)));
    harness.dispatch(FicheIntent::ToggleExpansion(FicheId::new(2)));
    assert_eq!(harness.vm().expanded(), Some(FicheId::new(2)));
    let html = harness.render();
    assert_eq!(html.matches(DETAIL_PANEL).count(), 1);
    assert!(card_html(&html, 2).contains(DETAIL_PANEL));

    harness.dispatch(FicheIntent::ToggleExpansion(FicheId::new(2)));
    assert_eq!(harness.vm().expanded(), None);
    assert!(!harness.render().contains(DETAIL_PANEL));
}

#[test]
fn home_lists_methodologies_with_progress() {
    let harness = ViewHarness::new(ViewKind::Home);
    let html = harness.render();

    assert!(html.contains("Fiches test"), "missing app name in {html}");
    assert!(html.contains("href=\"/methodology/1\""), "missing link in {html}");
    assert!(html.contains("0 / 3 fiches vues"), "missing progress in {html}");
    assert!(html.contains("1 / 1 fiches vues"), "missing seeded progress in {html}");
    assert!(html.contains("methodology-row--finished"));
}

#[test]
fn methodology_view_records_progress_and_refreshes_header() {
    let mut harness = ViewHarness::new(ViewKind::Methodology(1));
    let html = harness.render();
    assert!(html.contains("Analyse dimensionnelle"), "missing fiche in {html}");
    assert!(html.contains("0 / 3 fiches vues"), "missing progress in {html}");

    harness.dispatch(FicheIntent::MarkComplete(FicheId::new(3)));

    let seen = harness
        .services
        .progress()
        .seen(MethodologyId::new(1))
        .expect("ledger readable");
    assert_eq!(seen, vec![FicheId::new(3)]);

    let html = harness.render();
    assert!(html.contains("1 / 3 fiches vues"), "stale progress in {html}");
    assert!(card_html(&html, 3).contains(COMPLETED_CARD));
}

#[test]
fn unknown_methodology_renders_not_found() {
    let harness = ViewHarness::new(ViewKind::Methodology(42));
    let html = harness.render();
    assert!(html.contains("existe pas"), "missing message in {html}");
    assert!(html.contains("Retour"), "missing back link in {html}");
}

#[test]
fn back_runs_once_without_reporting_progress() {
    let fiches = (1..=3).map(fiche).collect();
    let mut harness = SectionHarness::new(methodology(&[], 3), fiches);

    harness.press_back();

    assert_eq!(harness.backs.get(), 1);
    assert!(harness.reported().is_empty());
    assert!(harness.vm().completed().is_empty());
}

#[test]
fn back_from_methodology_returns_home() {
    let mut harness = ViewHarness::new(ViewKind::Home);
    harness.open_methodology(1);
    let html = harness.render();
    assert!(html.contains("Analyse dimensionnelle"), "not on the sheet list: {html}");

    harness.press_back();

    let html = harness.render();
    assert!(html.contains("Choisis une méthodologie"), "not home: {html}");
    assert!(!html.contains("data-fiche"), "sheet list still mounted: {html}");
}
