// ============================================================================
// TsCat - Catalog Parser
// ============================================================================
//
// File: src/core/parser.rs
// Responsibility: turn `.ts` XML bytes into a Catalog
// Boundaries:
//   - ✅ Streaming XML reading with quick-xml
//   - ✅ Required element validation
//   - ✅ Entity, CDATA and <byte> decoding inside text elements
//   - ✅ Skipping unknown elements and attributes
//   - ❌ Should not contain lookup or merge logic
//   - ❌ Should not contain file system access
//
// Document shape:
//   <TS version language sourcelanguage>
//     <context> <name/> <comment/>? <message>* </context>
//   <message id? numerus?>
//     <location filename? line?/>* <source/> <oldsource/>? <comment/>?
//     <oldcomment/>? <extracomment/>? <translatorcomment/>?
//     <translation type?> text | <numerusform/>* </translation>
//
// ============================================================================

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{CatalogError, Result};
use crate::models::catalog::{Catalog, CatalogBuilder, Location, Message, Status};

/// Version assumed when the root element does not declare one.
pub const DEFAULT_VERSION: &str = "2.1";

/// Parse a complete `.ts` document.
///
/// Either the whole document is valid and a catalog is returned, or an error
/// is; a partially read catalog is never exposed.
pub fn load(bytes: &[u8]) -> Result<Catalog> {
    let text = std::str::from_utf8(bytes)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    CatalogParser::new(text).parse_document()
}

/// True when the first element after the prolog is `<TS>`.
///
/// `.ts` is shared with TypeScript sources, which never start with markup.
/// Declarations, comments, processing instructions and the doctype are
/// skipped whatever their length.
pub fn is_catalog_document(bytes: &[u8]) -> bool {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    let mut reader = Reader::from_reader(bytes);
    reader.trim_text(true);
    loop {
        match reader.read_event() {
            Ok(Event::Decl(_) | Event::Comment(_) | Event::DocType(_) | Event::PI(_)) => continue,
            Ok(Event::Start(start) | Event::Empty(start)) => return start.name().as_ref() == b"TS",
            _ => return false,
        }
    }
}

struct CatalogParser<'a> {
    reader: Reader<&'a [u8]>,
}

fn element_name(start: &BytesStart) -> String {
    String::from_utf8_lossy(start.name().as_ref()).into_owned()
}

/// `<byte value="x1b"/>`: hexadecimal with `x`/`0x` prefix, decimal otherwise.
fn byte_char(value: &str) -> Option<char> {
    let code = if let Some(hex) = value.strip_prefix("0x").or_else(|| value.strip_prefix('x')) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        value.parse().ok()?
    };
    char::from_u32(code)
}

impl<'a> CatalogParser<'a> {
    fn new(text: &'a str) -> Self {
        let mut reader = Reader::from_str(text);
        reader.trim_text(false);
        reader.expand_empty_elements(true);
        reader.check_end_names(true);
        Self { reader }
    }

    fn xml_error(&self, message: impl ToString) -> CatalogError {
        CatalogError::Xml {
            position: self.reader.buffer_position(),
            message: message.to_string(),
        }
    }

    fn next_event(&mut self) -> Result<Event<'a>> {
        match self.reader.read_event() {
            Ok(event) => Ok(event),
            Err(err) => Err(self.xml_error(err)),
        }
    }

    fn attribute(&self, start: &BytesStart, key: &[u8]) -> Result<Option<String>> {
        for attr in start.attributes() {
            let attr = attr.map_err(|err| self.xml_error(err))?;
            if attr.key.as_ref() == key {
                let value = attr.unescape_value().map_err(|err| self.xml_error(err))?;
                return Ok(Some(value.into_owned()));
            }
        }
        Ok(None)
    }

    /// Consume everything up to and including the end tag of `start`.
    fn skip(&mut self, start: &BytesStart) -> Result<()> {
        let mut depth = 1usize;
        loop {
            match self.next_event()? {
                Event::Start(_) => depth += 1,
                Event::End(_) => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                Event::Eof => {
                    return Err(CatalogError::Unterminated {
                        element: element_name(start),
                    })
                }
                _ => {}
            }
        }
    }

    /// Read the character content of a text element up to its end tag.
    fn read_text(&mut self, element: &'static str) -> Result<String> {
        let mut text = String::new();
        loop {
            match self.next_event()? {
                Event::Text(chunk) => {
                    let chunk = chunk.unescape().map_err(|err| self.xml_error(err))?;
                    text.push_str(&chunk);
                }
                Event::CData(chunk) => text.push_str(std::str::from_utf8(&chunk)?),
                Event::Start(start) => {
                    if start.name().as_ref() == b"byte" {
                        self.push_byte(&start, &mut text)?;
                    } else {
                        tracing::debug!(element = %element_name(&start), "skipping markup inside text");
                    }
                    self.skip(&start)?;
                }
                Event::End(_) => return Ok(text),
                Event::Eof => {
                    return Err(CatalogError::Unterminated {
                        element: element.to_string(),
                    })
                }
                _ => {}
            }
        }
    }

    fn push_byte(&self, start: &BytesStart, text: &mut String) -> Result<()> {
        let value = self.attribute(start, b"value")?.unwrap_or_default();
        match byte_char(&value) {
            Some('\0') => Ok(()),
            Some(ch) => {
                text.push(ch);
                Ok(())
            }
            None => Err(CatalogError::InvalidAttribute {
                element: "byte",
                attribute: "value",
                value,
            }),
        }
    }

    fn parse_document(mut self) -> Result<Catalog> {
        loop {
            match self.next_event()? {
                Event::Start(start) if start.name().as_ref() == b"TS" => {
                    let catalog = self.parse_ts(&start)?;
                    self.expect_end_of_document()?;
                    return Ok(catalog);
                }
                Event::Start(_) | Event::Eof => return Err(CatalogError::MissingRoot),
                // declaration, doctype, comments, whitespace
                _ => {}
            }
        }
    }

    fn expect_end_of_document(&mut self) -> Result<()> {
        loop {
            match self.next_event()? {
                Event::Eof => return Ok(()),
                Event::Start(start) => {
                    return Err(self.xml_error(format!(
                        "unexpected <{}> after the root element",
                        element_name(&start)
                    )))
                }
                _ => {}
            }
        }
    }

    fn parse_ts(&mut self, start: &BytesStart) -> Result<Catalog> {
        let version = self
            .attribute(start, b"version")?
            .unwrap_or_else(|| DEFAULT_VERSION.to_string());
        let mut builder = CatalogBuilder::new(version)
            .language(self.attribute(start, b"language")?)
            .source_language(self.attribute(start, b"sourcelanguage")?);

        loop {
            match self.next_event()? {
                Event::Start(child) => match child.name().as_ref() {
                    b"context" => self.parse_context(&mut builder)?,
                    _ => {
                        tracing::debug!(element = %element_name(&child), "ignoring unknown element in <TS>");
                        self.skip(&child)?;
                    }
                },
                Event::End(_) => return Ok(builder.build()),
                Event::Eof => {
                    return Err(CatalogError::Unterminated {
                        element: "TS".to_string(),
                    })
                }
                _ => {}
            }
        }
    }

    fn parse_context(&mut self, builder: &mut CatalogBuilder) -> Result<()> {
        let mut name = None;
        let mut comment = None;
        let mut messages = Vec::new();

        loop {
            match self.next_event()? {
                Event::Start(child) => match child.name().as_ref() {
                    b"name" => name = Some(self.read_text("name")?),
                    b"comment" => comment = Some(self.read_text("comment")?),
                    b"message" => messages.push(self.parse_message(&child)?),
                    _ => {
                        tracing::debug!(element = %element_name(&child), "ignoring unknown element in <context>");
                        self.skip(&child)?;
                    }
                },
                Event::End(_) => break,
                Event::Eof => {
                    return Err(CatalogError::Unterminated {
                        element: "context".to_string(),
                    })
                }
                _ => {}
            }
        }

        let name = name.ok_or(CatalogError::MissingElement {
            parent: "context",
            element: "name",
        })?;
        builder.context(&name, comment);
        for message in messages {
            builder.message(&name, message);
        }
        Ok(())
    }

    fn parse_message(&mut self, start: &BytesStart) -> Result<Message> {
        let mut message = Message {
            id: self.attribute(start, b"id")?,
            numerus: matches!(
                self.attribute(start, b"numerus")?.as_deref(),
                Some("yes") | Some("true")
            ),
            ..Default::default()
        };
        let mut has_source = false;
        let mut has_translation = false;

        loop {
            match self.next_event()? {
                Event::Start(child) => match child.name().as_ref() {
                    b"location" => {
                        message.locations.push(self.parse_location(&child)?);
                        self.skip(&child)?;
                    }
                    b"source" => {
                        message.source = self.read_text("source")?;
                        has_source = true;
                    }
                    b"oldsource" => message.old_source = Some(self.read_text("oldsource")?),
                    b"comment" => message.comment = Some(self.read_text("comment")?),
                    b"oldcomment" => message.old_comment = Some(self.read_text("oldcomment")?),
                    b"extracomment" => {
                        message.extra_comment = Some(self.read_text("extracomment")?)
                    }
                    b"translatorcomment" => {
                        message.translator_comment = Some(self.read_text("translatorcomment")?)
                    }
                    b"translation" => {
                        self.parse_translation(&child, &mut message)?;
                        has_translation = true;
                    }
                    _ => {
                        tracing::debug!(element = %element_name(&child), "ignoring unknown element in <message>");
                        self.skip(&child)?;
                    }
                },
                Event::End(_) => break,
                Event::Eof => {
                    return Err(CatalogError::Unterminated {
                        element: "message".to_string(),
                    })
                }
                _ => {}
            }
        }

        if !has_source {
            return Err(CatalogError::MissingElement {
                parent: "message",
                element: "source",
            });
        }
        if !has_translation {
            return Err(CatalogError::MissingElement {
                parent: "message",
                element: "translation",
            });
        }
        Ok(message)
    }

    /// `line` is kept verbatim: lupdate writes relative deltas (`+12`, `-5`).
    fn parse_location(&self, start: &BytesStart) -> Result<Location> {
        Ok(Location {
            file: self.attribute(start, b"filename")?,
            line: self.attribute(start, b"line")?,
        })
    }

    fn parse_translation(&mut self, start: &BytesStart, message: &mut Message) -> Result<()> {
        message.status = match self.attribute(start, b"type")? {
            None => Status::Finished,
            Some(value) => value.parse().map_err(|_| CatalogError::InvalidAttribute {
                element: "translation",
                attribute: "type",
                value,
            })?,
        };

        let mut text = String::new();
        let mut forms = Vec::new();
        loop {
            match self.next_event()? {
                Event::Text(chunk) => {
                    let chunk = chunk.unescape().map_err(|err| self.xml_error(err))?;
                    text.push_str(&chunk);
                }
                Event::CData(chunk) => text.push_str(std::str::from_utf8(&chunk)?),
                Event::Start(child) => match child.name().as_ref() {
                    b"numerusform" => forms.push(self.read_text("numerusform")?),
                    b"byte" => {
                        self.push_byte(&child, &mut text)?;
                        self.skip(&child)?;
                    }
                    _ => {
                        tracing::debug!(element = %element_name(&child), "ignoring unknown element in <translation>");
                        self.skip(&child)?;
                    }
                },
                Event::End(_) => break,
                Event::Eof => {
                    return Err(CatalogError::Unterminated {
                        element: "translation".to_string(),
                    })
                }
                _ => {}
            }
        }

        // With numerus forms present the direct text is only indentation.
        if forms.is_empty() {
            message.translation = text;
        } else {
            message.numerus_forms = forms;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABOUT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
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
        <location filename="../src/aboutdlg.cpp" line="61"/>
        <location filename="../src/mainwin.cpp" line="1200"/>
        <source>Browse...</source>
        <translation type="unfinished"></translation>
    </message>
</context>
</TS>
"#;

    #[test]
    fn loads_contexts_messages_and_locations() {
        let catalog = load(ABOUT.as_bytes()).expect("valid catalog");
        assert_eq!(catalog.version(), "2.0");
        assert_eq!(catalog.language(), Some("es"));

        let context = catalog.context("Examples::Dlg").expect("context");
        assert_eq!(context.len(), 2);
        let browse = &context.messages()[1];
        assert_eq!(browse.status, Status::Unfinished);
        assert_eq!(browse.translation, "");
        assert_eq!(browse.locations.len(), 2);
        assert_eq!(browse.locations[1], Location::new("../src/mainwin.cpp", 1200));
    }

    #[test]
    fn lookup_scenarios() {
        let catalog = load(ABOUT.as_bytes()).expect("valid catalog");
        assert_eq!(
            catalog.lookup("Examples::Dlg", "Licq - About", None),
            "Licq-Acerca de"
        );
        assert_eq!(catalog.lookup("Examples::Dlg", "Browse...", None), "Browse...");
    }

    #[test]
    fn unterminated_context_is_an_error() {
        let doc = r#"<TS version="2.0"><context><name>Dlg</name>
            <message><source>a</source><translation>b</translation></message>"#;
        match load(doc.as_bytes()) {
            Err(CatalogError::Unterminated { element }) => assert_eq!(element, "context"),
            Err(CatalogError::Xml { .. }) => {}
            other => panic!("expected unterminated context, got {:?}", other),
        }
    }

    #[test]
    fn mismatched_end_tag_is_an_error() {
        let doc = r#"<TS version="2.0"><context><name>Dlg</message></context></TS>"#;
        assert!(matches!(load(doc.as_bytes()), Err(CatalogError::Xml { .. })));
    }

    #[test]
    fn missing_source_or_translation_is_an_error() {
        let doc = r#"<TS><context><name>Dlg</name>
            <message><translation>b</translation></message></context></TS>"#;
        assert!(matches!(
            load(doc.as_bytes()),
            Err(CatalogError::MissingElement { element: "source", .. })
        ));

        let doc = r#"<TS><context><name>Dlg</name>
            <message><source>a</source></message></context></TS>"#;
        assert!(matches!(
            load(doc.as_bytes()),
            Err(CatalogError::MissingElement { element: "translation", .. })
        ));
    }

    #[test]
    fn context_without_name_is_an_error() {
        let doc = r#"<TS><context><message><source>a</source><translation/></message></context></TS>"#;
        assert!(matches!(
            load(doc.as_bytes()),
            Err(CatalogError::MissingElement { parent: "context", element: "name" })
        ));
    }

    #[test]
    fn missing_root_is_an_error() {
        assert!(matches!(load(b"<?xml version=\"1.0\"?>"), Err(CatalogError::MissingRoot)));
        assert!(matches!(load(b"<xliff/>"), Err(CatalogError::MissingRoot)));
    }

    #[test]
    fn unknown_elements_and_attributes_are_ignored() {
        let doc = r#"<TS version="2.1" future="1">
<defaultcodec>UTF-8</defaultcodec>
<context encoding="UTF-8">
    <name>Dlg</name>
    <extra-hint><nested>x</nested></extra-hint>
    <message utf8="true" shiny="yes">
        <source>OK</source>
        <extra-po-flags>c-format</extra-po-flags>
        <translation variants="no">Aceptar</translation>
    </message>
</context>
</TS>"#;
        let catalog = load(doc.as_bytes()).expect("forward-compatible document");
        assert_eq!(catalog.lookup("Dlg", "OK", None), "Aceptar");
    }

    #[test]
    fn entities_and_bytes_are_decoded() {
        let doc = r#"<TS><context><name>Dlg</name><message>
            <source>&lt;b&gt;Tom &amp; Jerry&lt;/b&gt; say &quot;hi&quot; &apos;%1&apos;</source>
            <translation>Esc<byte value="x1b"/>ape &#233;</translation>
        </message></context></TS>"#;
        let catalog = load(doc.as_bytes()).expect("valid catalog");
        let message = &catalog.contexts()[0].messages()[0];
        assert_eq!(message.source, "<b>Tom & Jerry</b> say \"hi\" '%1'");
        assert_eq!(message.translation, "Esc\u{1b}ape é");
    }

    #[test]
    fn numerus_forms_and_comments_are_read() {
        let doc = r#"<TS language="es_ES"><context><name>Dlg</name>
    <message numerus="yes">
        <source>%n message(s)</source>
        <comment>inbox</comment>
        <extracomment>shown in tray</extracomment>
        <translatorcomment>check plural</translatorcomment>
        <translation>
            <numerusform>%n mensaje</numerusform>
            <numerusform>%n mensajes</numerusform>
        </translation>
    </message>
</context></TS>"#;
        let catalog = load(doc.as_bytes()).expect("valid catalog");
        let message = catalog
            .find("Dlg", "%n message(s)", Some("inbox"))
            .expect("message");
        assert!(message.numerus);
        assert_eq!(message.numerus_forms, ["%n mensaje", "%n mensajes"]);
        assert_eq!(message.extra_comment.as_deref(), Some("shown in tray"));
        assert_eq!(message.translator_comment.as_deref(), Some("check plural"));
        assert_eq!(catalog.lookup_plural("Dlg", "%n message(s)", Some("inbox"), 3), "%n mensajes");
    }

    #[test]
    fn relative_and_odd_line_values_are_kept_verbatim() {
        let doc = r#"<TS><context><name>D</name><message>
            <location filename="a.cpp" line="+40"/>
            <location line="-12"/>
            <location filename="b.cpp" line="ten"/>
            <source>a</source><translation>b</translation></message></context></TS>"#;
        let catalog = load(doc.as_bytes()).expect("line values never fail a load");
        let message = catalog.find("D", "a", None).expect("message");
        let lines: Vec<Option<&str>> = message
            .locations
            .iter()
            .map(|location| location.line.as_deref())
            .collect();
        assert_eq!(lines, [Some("+40"), Some("-12"), Some("ten")]);
        assert_eq!(catalog.lookup("D", "a", None), "b");
    }

    #[test]
    fn catalog_documents_are_recognized_past_a_long_prolog() {
        let header = format!("<!-- {} -->", "license text ".repeat(100));
        let doc = format!(
            "\u{feff}<?xml version=\"1.0\" encoding=\"utf-8\"?>\n{}\n<!DOCTYPE TS>\n<TS version=\"2.1\"></TS>",
            header
        );
        assert!(header.len() > 1024);
        assert!(is_catalog_document(doc.as_bytes()));
        assert!(is_catalog_document(b"<TS><context>"));

        assert!(!is_catalog_document(b"export const x = 1;\n"));
        assert!(!is_catalog_document(
            b"// maps\nexport function first<TSource>(items: Array<TSource>) {}\n"
        ));
        assert!(!is_catalog_document(b"<svg></svg>"));
        assert!(!is_catalog_document(b""));
    }

    #[test]
    fn bad_attribute_values_are_errors() {
        let doc = r#"<TS><context><name>D</name><message>
            <source>a</source><translation type="fuzzy"/></message></context></TS>"#;
        assert!(matches!(
            load(doc.as_bytes()),
            Err(CatalogError::InvalidAttribute { attribute: "type", .. })
        ));
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        assert!(matches!(load(&[0x3c, 0xff, 0xfe]), Err(CatalogError::Encoding(_))));
    }
}
