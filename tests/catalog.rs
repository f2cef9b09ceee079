use std::fs;

use tscat::core::{CatalogChecker, CatalogMerger, CatalogScanner, MergeOptions};
use tscat::models::config::CheckConfig;
use tscat::{Catalog, CatalogBuilder, CatalogError, Message, Status};

const LICQ_ES: &[u8] = include_bytes!("fixtures/licq_es.ts");

fn licq() -> Catalog {
    Catalog::load(LICQ_ES).expect("fixture loads")
}

#[test]
fn finished_messages_resolve_to_their_translation() {
    let catalog = licq();
    assert_eq!(catalog.language(), Some("es_ES"));
    assert_eq!(catalog.version(), "2.1");
    assert_eq!(
        catalog.lookup("Examples::Dlg", "Licq - About", None),
        "Licq-Acerca de"
    );
    assert_eq!(catalog.lookup("Examples::Main", "Quit", None), "Salir");
}

#[test]
fn unfinished_and_obsolete_messages_show_the_source() {
    let catalog = licq();
    assert_eq!(catalog.lookup("Examples::Dlg", "Browse...", None), "Browse...");
    assert_eq!(catalog.lookup("Examples::Dlg", "Old button", None), "Old button");
}

#[test]
fn unknown_context_or_source_is_not_an_error() {
    let catalog = licq();
    assert_eq!(catalog.lookup("Nowhere", "Licq - About", None), "Licq - About");
    assert_eq!(catalog.lookup("Examples::Dlg", "Cancel", None), "Cancel");
}

#[test]
fn disambiguated_messages_resolve_independently() {
    let catalog = licq();
    assert_eq!(catalog.lookup("Examples::Dlg", "Open", Some("verb")), "Abrir");
    assert_eq!(
        catalog.lookup("Examples::Dlg", "Open", Some("adjective")),
        "Abierto"
    );
    // unknown comments fall back to the entry without one
    assert_eq!(catalog.lookup("Examples::Dlg", "Open", Some("noun")), "Abrir");
}

#[test]
fn entities_are_decoded_on_load() {
    let catalog = licq();
    assert_eq!(
        catalog.lookup("Examples::Dlg", "Tom & Jerry <3 \"quoted\"", None),
        "Tom y Jerry <3 \"citado\""
    );
}

#[test]
fn every_location_of_a_message_is_kept() {
    let catalog = licq();
    let message = catalog
        .find("Examples::Dlg", "Licq - About", None)
        .expect("message");
    assert_eq!(message.locations.len(), 2);
    assert_eq!(message.locations[1].file.as_deref(), Some("../src/helpdlg.cpp"));
    assert_eq!(message.locations[1].line.as_deref(), Some("17"));
}

#[test]
fn plural_lookup_picks_the_spanish_form() {
    let catalog = licq();
    let source = "%n file(s) received";
    assert_eq!(
        catalog.lookup_plural("Examples::Dlg", source, None, 1),
        "%n archivo recibido"
    );
    assert_eq!(
        catalog.lookup_plural("Examples::Dlg", source, None, 5),
        "%n archivos recibidos"
    );
}

#[test]
fn stats_count_every_status() {
    let stats = licq().stats();
    assert_eq!(stats.finished, 7);
    assert_eq!(stats.unfinished, 1);
    assert_eq!(stats.obsolete, 1);
}

#[test]
fn unterminated_context_is_a_parse_error() {
    let text = std::str::from_utf8(LICQ_ES).expect("utf-8");
    let cut = text.find("</context>").expect("context end");
    let result = Catalog::load(text[..cut].as_bytes());
    assert!(matches!(
        result,
        Err(CatalogError::Unterminated { .. }) | Err(CatalogError::Xml { .. })
    ));
}

#[test]
fn saved_catalog_reloads_to_the_same_model() {
    let catalog = licq();
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("licq_es.ts");
    catalog.save(&path).expect("save");

    let reloaded = Catalog::from_path(&path).expect("reload");
    assert_eq!(reloaded, catalog);

    let written = fs::read_to_string(&path).expect("read back");
    assert_eq!(reloaded.to_ts_string(), written);
    assert!(written.contains("Tom &amp; Jerry &lt;3"));
}

#[test]
fn fixture_passes_the_default_checks() {
    let diagnostics = CatalogChecker::new(CheckConfig::default()).check(&licq());
    assert!(diagnostics.is_empty(), "{:?}", diagnostics);
}

fn extracted() -> Catalog {
    let mut builder = CatalogBuilder::new("2.1");
    builder
        .message(
            "Examples::Dlg",
            Message::new("Licq - About").with_location("../src/aboutdlg.cpp", 60),
        )
        .message(
            "Examples::Dlg",
            Message::new("Help").with_location("../src/aboutdlg.cpp", 75),
        );
    builder.build()
}

#[test]
fn merge_keeps_translations_and_retires_missing_messages() {
    let (merged, report) = CatalogMerger::new(MergeOptions::default()).merge(&licq(), &extracted());

    assert_eq!(report.kept, 1);
    assert_eq!(report.added, 1);
    assert_eq!(report.obsoleted, 8);
    assert_eq!(merged.language(), Some("es_ES"));

    assert_eq!(
        merged.lookup("Examples::Dlg", "Licq - About", None),
        "Licq-Acerca de"
    );
    let about = merged
        .find("Examples::Dlg", "Licq - About", None)
        .expect("kept message");
    assert_eq!(about.locations.len(), 1);
    assert_eq!(about.locations[0].line.as_deref(), Some("60"));

    let help = merged.find("Examples::Dlg", "Help", None).expect("new message");
    assert_eq!(help.status, Status::Unfinished);
    assert_eq!(merged.lookup("Examples::Dlg", "Help", None), "Help");

    let quit = merged.find("Examples::Main", "Quit", None).expect("retired");
    assert_eq!(quit.status, Status::Obsolete);
    assert!(quit.locations.is_empty());
}

#[test]
fn merge_can_drop_missing_messages() {
    let options = MergeOptions {
        drop_obsolete: true,
    };
    let (merged, report) = CatalogMerger::new(options).merge(&licq(), &extracted());

    assert_eq!(report.dropped, 8);
    assert_eq!(merged.message_count(), 2);
    assert!(merged.context("Examples::Main").is_none());
}

#[tokio::test]
async fn scanner_skips_typescript_sources() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("licq_es.ts"), LICQ_ES).expect("write catalog");
    fs::write(
        dir.path().join("app.ts"),
        "export const greet = (name: string) => `hi ${name}`;\n",
    )
    .expect("write typescript");

    let results = CatalogScanner::new(dir.path().to_path_buf())
        .scan()
        .await
        .expect("scan");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].language.as_deref(), Some("es_ES"));
    assert_eq!(results[0].stats.as_ref().map(|s| s.finished), Some(7));
}
