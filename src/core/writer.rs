// ============================================================================
// TsCat - Catalog Writer
// ============================================================================
//
// File: src/core/writer.rs
// Responsibility: render a Catalog as `.ts` XML
// Boundaries:
//   - ✅ Element layout and indentation as written by lupdate
//   - ✅ Entity escaping and <byte> encoding of control characters
//   - ❌ Should not contain file system access
//   - ❌ Should not reorder contexts or messages
//
// ============================================================================

use quick_xml::escape::escape;

use crate::models::catalog::{Catalog, Context, Message};

const INDENT: &str = "    ";

/// Render the whole catalog, including the XML declaration and doctype.
pub fn serialize(catalog: &Catalog) -> String {
    let mut out = String::with_capacity(catalog.message_count() * 160 + 128);
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<!DOCTYPE TS>\n");

    out.push_str("<TS version=\"");
    out.push_str(&escape(catalog.version()));
    out.push('"');
    if let Some(language) = catalog.language() {
        push_attribute(&mut out, "language", language);
    }
    if let Some(source_language) = catalog.source_language() {
        push_attribute(&mut out, "sourcelanguage", source_language);
    }
    out.push_str(">\n");

    for context in catalog.contexts() {
        write_context(&mut out, context);
    }
    out.push_str("</TS>\n");
    out
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}

/// Control characters XML 1.0 cannot carry as text.
fn is_forbidden(ch: char) -> bool {
    (ch as u32) < 0x20 && !matches!(ch, '\t' | '\n' | '\r')
}

/// Escape element text; forbidden control characters become `<byte>` elements.
fn protect(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(position) = rest.find(is_forbidden) {
        out.push_str(&escape(&rest[..position]));
        // forbidden characters are all single-byte ASCII
        let code = rest.as_bytes()[position];
        out.push_str(&format!("<byte value=\"x{:x}\"/>", code));
        rest = &rest[position + 1..];
    }
    out.push_str(&escape(rest));
    out
}

fn push_text_element(out: &mut String, depth: usize, name: &str, text: &str) {
    out.push_str(&INDENT.repeat(depth));
    out.push('<');
    out.push_str(name);
    out.push('>');
    out.push_str(&protect(text));
    out.push_str("</");
    out.push_str(name);
    out.push_str(">\n");
}

fn push_optional(out: &mut String, depth: usize, name: &str, text: Option<&str>) {
    if let Some(text) = text {
        push_text_element(out, depth, name, text);
    }
}

fn write_context(out: &mut String, context: &Context) {
    out.push_str("<context>\n");
    push_text_element(out, 1, "name", context.name());
    push_optional(out, 1, "comment", context.comment());
    for message in context.messages() {
        write_message(out, message);
    }
    out.push_str("</context>\n");
}

fn write_message(out: &mut String, message: &Message) {
    out.push_str(INDENT);
    out.push_str("<message");
    if let Some(id) = &message.id {
        push_attribute(out, "id", id);
    }
    if message.numerus {
        push_attribute(out, "numerus", "yes");
    }
    out.push_str(">\n");

    for location in &message.locations {
        out.push_str(&INDENT.repeat(2));
        out.push_str("<location");
        if let Some(file) = &location.file {
            push_attribute(out, "filename", file);
        }
        if let Some(line) = &location.line {
            push_attribute(out, "line", line);
        }
        out.push_str("/>\n");
    }

    push_text_element(out, 2, "source", &message.source);
    push_optional(out, 2, "oldsource", message.old_source.as_deref());
    push_optional(out, 2, "comment", message.comment.as_deref());
    push_optional(out, 2, "oldcomment", message.old_comment.as_deref());
    push_optional(out, 2, "extracomment", message.extra_comment.as_deref());
    push_optional(
        out,
        2,
        "translatorcomment",
        message.translator_comment.as_deref(),
    );
    write_translation(out, message);

    out.push_str(INDENT);
    out.push_str("</message>\n");
}

fn write_translation(out: &mut String, message: &Message) {
    out.push_str(&INDENT.repeat(2));
    out.push_str("<translation");
    if let Some(kind) = message.status.type_attribute() {
        push_attribute(out, "type", kind);
    }
    out.push('>');

    if message.numerus_forms.is_empty() {
        out.push_str(&protect(&message.translation));
    } else {
        out.push('\n');
        for form in &message.numerus_forms {
            push_text_element(out, 3, "numerusform", form);
        }
        out.push_str(&INDENT.repeat(2));
    }
    out.push_str("</translation>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::load;
    use crate::models::catalog::{CatalogBuilder, Status};

    #[test]
    fn writes_lupdate_layout() {
        let mut builder = CatalogBuilder::new("2.0").language(Some("es".to_string()));
        builder
            .message(
                "Examples::Dlg",
                Message::new("Licq - About")
                    .with_translation("Licq-Acerca de")
                    .with_location("../src/aboutdlg.cpp", 45),
            )
            .message("Examples::Dlg", Message::new("Browse..."));
        let xml = serialize(&builder.build());

        let expected = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.0" language="es">
<context>
    <name>Examples::Dlg</name>
    <message>
        <location filename="../src/aboutdlg.cpp" line="45"/>
        <source>Licq - About</source>
        <translation>Licq-Acerca de</translation>
    </message>
    <message>
        <source>Browse...</source>
        <translation type="unfinished"></translation>
    </message>
</context>
</TS>
"#;
        assert_eq!(xml, expected);
    }

    #[test]
    fn escapes_reserved_characters_and_control_bytes() {
        assert_eq!(
            protect("<b>\"Tom\" & 'Jerry'</b>"),
            "&lt;b&gt;&quot;Tom&quot; &amp; &apos;Jerry&apos;&lt;/b&gt;"
        );
        assert_eq!(protect("a\u{1b}b\nc"), "a<byte value=\"x1b\"/>b\nc");
    }

    #[test]
    fn numerus_and_retired_messages_survive_reload() {
        let mut builder = CatalogBuilder::new("2.1").language(Some("es_ES".to_string()));
        builder
            .message(
                "Tray",
                Message::new("%n event(s)")
                    .with_numerus_forms(["%n evento", "%n eventos"])
                    .with_comment("tooltip"),
            )
            .message(
                "Tray",
                Message::new("Gone")
                    .with_translation("Ido")
                    .with_status(Status::Vanished),
            );
        let catalog = builder.build();
        let reloaded = load(serialize(&catalog).as_bytes()).expect("reload");
        assert_eq!(reloaded, catalog);
    }

    #[test]
    fn relative_line_numbers_are_written_back_as_read() {
        let doc = r#"<TS version="2.1"><context><name>D</name><message>
            <location filename="a.cpp" line="+40"/>
            <location line="-12"/>
            <source>a</source><translation>b</translation></message></context></TS>"#;
        let xml = serialize(&load(doc.as_bytes()).expect("load"));
        assert!(xml.contains(r#"<location filename="a.cpp" line="+40"/>"#));
        assert!(xml.contains(r#"<location line="-12"/>"#));
    }
}
